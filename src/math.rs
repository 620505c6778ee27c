use num::Float;

/// Similar to numpy.interp: evaluate the piecewise-linear curve given by
/// `coords` at every input point, holding the first/last y value outside
/// the coordinate span.
pub(crate) fn interp<F: Float>(
    x_input: impl IntoIterator<Item = F>,
    coords: impl IntoIterator<Item = (F, F)>,
) -> Vec<F> {
    let coords: Vec<(F, F)> = coords.into_iter().collect();

    x_input.into_iter().map(|x| sample(&coords, x)).collect()
}

fn sample<F: Float>(coords: &[(F, F)], x: F) -> F {
    let (x_first, y_first) = coords[0];
    let (x_last, y_last) = coords[coords.len() - 1];

    if x <= x_first {
        return y_first;
    }
    if x >= x_last {
        return y_last;
    }

    for pair in coords.windows(2) {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];

        if x <= x2 {
            return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
        }
    }

    y_last
}

/// Membership degree of a crisp value against a sampled curve: linear
/// interpolation inside the range, zero outside it.
pub(crate) fn membership_at<F: Float>(range: &[F], curve: &[F], x: F) -> F {
    let last = range.len() - 1;

    if x < range[0] || x > range[last] {
        return F::zero();
    }
    if last == 0 {
        return curve[0];
    }

    for i in 0..last {
        let (x1, x2) = (range[i], range[i + 1]);

        if x <= x2 {
            let (y1, y2) = (curve[i], curve[i + 1]);

            return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
        }
    }

    curve[last]
}

#[test]
fn test_interp() {
    let x = [-1., 0., 2.5, 5., 7.5, 12.];
    let coords = [(0., 0.), (5., 1.), (10., 0.)];

    assert_eq!(interp(x, coords), vec![0., 0., 0.5, 1., 0.5, 0.]);

    let x = [0.5, 2.5, 3.5];
    let coords = [(1., 3.), (2., 2.), (3., 0.)];

    assert_eq!(interp(x, coords), vec![3., 1., 0.]);
}

#[test]
fn test_membership_at() {
    let range = [0., 5., 10.];
    let curve = [1., 0., 0.];

    assert_eq!(membership_at(&range, &curve, 2.5), 0.5);
    assert_eq!(membership_at(&range, &curve, 0.), 1.);
    assert_eq!(membership_at(&range, &curve, -0.1), 0.);
    assert_eq!(membership_at(&range, &curve, 10.1), 0.);

    let singleton_range = [4.];
    let singleton_curve = [0.8];

    assert_eq!(membership_at(&singleton_range, &singleton_curve, 4.), 0.8);
    assert_eq!(membership_at(&singleton_range, &singleton_curve, 3.9), 0.);
}
