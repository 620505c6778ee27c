/// Evenly spaced samples over `[min, max]`, endpoint inclusive, computed
/// the way numpy.linspace does (`min + step * i`, never accumulated).
pub(crate) fn linspace(min: f64, max: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (max - min) / (n - 1) as f64
    } else {
        0.
    };

    (0..n).map(move |i| min + step * i as f64)
}

#[test]
fn test_linspace() {
    let samples: Vec<_> = linspace(0., 1., 5).collect();

    assert_eq!(samples, vec![0., 0.25, 0.5, 0.75, 1.]);
    assert_eq!(linspace(3., 3., 1).collect::<Vec<_>>(), vec![3.]);
    assert_eq!(linspace(0., 1., 0).count(), 0);
}
