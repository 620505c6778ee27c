use num::Float;

use crate::error::FuzzyError;

/// Method for defuzzifying the aggregated membership function.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DefuzzMethod {
    /// Centroid (center of gravity) of the area under the curve
    Centroid,
    /// Vertical line splitting the area under the curve in half
    Bisector,
}

impl DefuzzMethod {
    /// Reduce an aggregated membership curve over its sampled range to one
    /// crisp value, rounded to two decimal places. `range` and
    /// `membership` must be index-aligned.
    pub fn call<F: Float>(self, range: &[F], membership: &[F]) -> Result<F, FuzzyError> {
        debug_assert_eq!(range.len(), membership.len());

        match self {
            Self::Centroid => centroid(range, membership),
            Self::Bisector => bisector(range, membership),
        }
    }
}

/// One consecutive sample pair (x1, y1)-(x2, y2) of the aggregated curve.
#[derive(Clone, Copy)]
struct Segment<F> {
    x1: F,
    x2: F,
    y1: F,
    y2: F,
}

enum Shape {
    Rectangle,
    RisingTriangle,
    FallingTriangle,
    Trapezoid,
}

impl<F: Float> Segment<F> {
    fn over(range: &[F], membership: &[F], i: usize) -> Self {
        Segment {
            x1: range[i],
            x2: range[i + 1],
            y1: membership[i],
            y2: membership[i + 1],
        }
    }

    /// Zero width, or zero height on both ends: contributes no area
    fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 || (self.y1 == F::zero() && self.y2 == F::zero())
    }

    fn shape(&self) -> Shape {
        if self.y1 == self.y2 {
            Shape::Rectangle
        } else if self.y1 == F::zero() {
            Shape::RisingTriangle
        } else if self.y2 == F::zero() {
            Shape::FallingTriangle
        } else {
            Shape::Trapezoid
        }
    }

    fn area(&self) -> F {
        let two = F::one() + F::one();
        let base = self.x2 - self.x1;

        match self.shape() {
            Shape::Rectangle => base * self.y1,
            Shape::RisingTriangle => base * self.y2 / two,
            Shape::FallingTriangle => base * self.y1 / two,
            Shape::Trapezoid => base * (self.y1 + self.y2) / two,
        }
    }

    /// x-coordinate of the segment's own center of mass
    fn moment(&self) -> F {
        let two = F::one() + F::one();
        let three = two + F::one();
        let base = self.x2 - self.x1;

        match self.shape() {
            Shape::Rectangle => (self.x1 + self.x2) / two,
            Shape::RisingTriangle => self.x1 + two / three * base,
            Shape::FallingTriangle => self.x1 + base / three,
            Shape::Trapezoid => {
                self.x1 + (two / three * base * (self.y2 + self.y1 / two)) / (self.y1 + self.y2)
            }
        }
    }

    /// x at which the area swept from x1 reaches `subarea`
    fn bisect(&self, subarea: F) -> F {
        let two = F::one() + F::one();
        let base = self.x2 - self.x1;

        match self.shape() {
            Shape::Rectangle => self.x1 + subarea / self.y1,
            Shape::RisingTriangle => self.x1 + (two * subarea * base / self.y2).sqrt(),
            Shape::FallingTriangle => {
                self.x2 - (base * base - two * subarea * base / self.y1).sqrt()
            }
            Shape::Trapezoid => {
                let slope = (self.y2 - self.y1) / base;
                let root = (self.y1 * self.y1 + two * slope * subarea).sqrt();

                self.x1 - (self.y1 - root) / slope
            }
        }
    }
}

fn centroid<F: Float>(range: &[F], membership: &[F]) -> Result<F, FuzzyError> {
    if range.len() == 1 {
        return singleton(range, membership);
    }

    let mut sum_moment_area = F::zero();
    let mut sum_area = F::zero();

    for i in 0..range.len() - 1 {
        let segment = Segment::over(range, membership, i);

        if segment.is_degenerate() {
            continue;
        }

        let area = segment.area();

        sum_moment_area = sum_moment_area + segment.moment() * area;
        sum_area = sum_area + area;
    }

    if sum_area == F::zero() {
        return Err(FuzzyError::NoActivation);
    }

    Ok(round2(sum_moment_area / sum_area))
}

fn bisector<F: Float>(range: &[F], membership: &[F]) -> Result<F, FuzzyError> {
    if range.len() == 1 {
        return singleton(range, membership);
    }

    let n_segments = range.len() - 1;
    let mut cumulative = Vec::with_capacity(n_segments);
    let mut total = F::zero();

    // The running sum is carried through degenerate segments so that the
    // lookup below always reads the true swept area
    for i in 0..n_segments {
        let segment = Segment::over(range, membership, i);

        if !segment.is_degenerate() {
            total = total + segment.area();
        }

        cumulative.push(total);
    }

    if total == F::zero() {
        return Err(FuzzyError::NoActivation);
    }

    let half_total = total / (F::one() + F::one());
    let crossing = cumulative
        .iter()
        .position(|&area| area >= half_total)
        .ok_or(FuzzyError::NoActivation)?;
    let swept = if crossing == 0 {
        F::zero()
    } else {
        cumulative[crossing - 1]
    };
    let segment = Segment::over(range, membership, crossing);

    Ok(round2(segment.bisect(half_total - swept)))
}

// A singleton fuzzy set defuzzifies to its only sample point, but only
// when some rule activated it
fn singleton<F: Float>(range: &[F], membership: &[F]) -> Result<F, FuzzyError> {
    if membership[0] > F::zero() {
        Ok(range[0])
    } else {
        Err(FuzzyError::NoActivation)
    }
}

fn round2<F: Float>(x: F) -> F {
    let hundred = F::from(100.).expect("unreachable");

    (x * hundred).round() / hundred
}
