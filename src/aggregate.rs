use crate::activation::Activations;

/// Pointwise maximum over all rule activation arrays for one consequent.
/// An empty activation set aggregates to all zeros, which the defuzzifier
/// treats as "no rule fired".
pub fn aggregate(activations: &Activations, len: usize) -> Vec<f64> {
    let mut aggregated = vec![0.; len];

    for (_, curve) in activations.iter() {
        for (slot, &degree) in aggregated.iter_mut().zip(curve) {
            if degree > *slot {
                *slot = degree;
            }
        }
    }

    aggregated
}
