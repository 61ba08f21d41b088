use core::fmt;
use core::iter::FusedIterator;
use core::slice;

use num_traits::NumCast;

use crate::basis::cox_de_boor;
use crate::knots::{is_non_decreasing, open_uniform};
use crate::point::Point;
use crate::NativeFloat;

/// Basis weights at or below this value are skipped when accumulating a
/// curve point. Such contributions are near-zero by construction; dropping
/// them only perturbs the result at the noise floor.
pub const BASIS_CUTOFF: NativeFloat = 1e-3;

/// Amount the final sample parameter is pulled inside the knot domain, so
/// the last sample never sits exactly on the closed upper bound.
pub const DOMAIN_END_INSET: NativeFloat = 1e-3;

/// Errors reported by [`BSpline`] construction, evaluation and sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// A curve of degree `d` needs at least `d + 1` control points.
    TooFewControlPoints { control_points: usize, degree: usize },
    /// The knot vector must hold `control_points + degree + 1` entries.
    KnotCountMismatch { knots: usize, expected: usize },
    /// Knots must be sorted in non-decreasing order.
    UnsortedKnots,
    /// The parameter lies outside the curve's knot domain.
    ParameterOutOfDomain,
    /// Sampling needs at least two samples, one for each domain end.
    TooFewSamples { lod: usize },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::TooFewControlPoints {
                control_points,
                degree,
            } => write!(
                f,
                "degree {} needs at least {} control points, got {}",
                degree,
                degree + 1,
                control_points
            ),
            CurveError::KnotCountMismatch { knots, expected } => {
                write!(f, "expected {} knots, got {}", expected, knots)
            }
            CurveError::UnsortedKnots => write!(f, "knots must be non-decreasing"),
            CurveError::ParameterOutOfDomain => {
                write!(f, "parameter lies outside the knot domain")
            }
            CurveError::TooFewSamples { lod } => {
                write!(f, "sampling needs lod >= 2, got {}", lod)
            }
        }
    }
}

impl core::error::Error for CurveError {}

/// General implementation of a B-Spline curve with choosable degree and
/// control points, evaluated with the recursive Cox-de Boor basis sum.
///
/// Generic parameters:
/// P: control point type as defined by the [`Point`] trait
/// const generic parameters:
/// K: Number of knots
/// C: Number of control points
/// D: Degree of the piecewise function used for interpolation, degree = order - 1
/// While C, K and D relate to each other in the following manner
///     K = C + D + 1
/// The relation is validated at construction; so is `C >= D + 1` and the
/// ordering of the knots.
#[derive(Clone)]
pub struct BSpline<P, const K: usize, const C: usize, const D: usize>
where
    P: Point,
{
    /// Knot vector
    knots: [P::Scalar; K],

    /// Control points
    control_points: [P; C],
}

impl<P, const K: usize, const C: usize, const D: usize> BSpline<P, K, C, D>
where
    P: Point,
{
    /// Create a new B-spline curve over `control_points` using the given
    /// `knots`. The knots must be sorted in non-decreasing order, there must
    /// be `control_points.len() + degree + 1` of them, and a curve of degree
    /// `d` requires at least `d + 1` control points.
    pub fn new(knots: [P::Scalar; K], control_points: [P; C]) -> Result<Self, CurveError> {
        if C < D + 1 {
            return Err(CurveError::TooFewControlPoints {
                control_points: C,
                degree: D,
            });
        }
        if K != C + D + 1 {
            return Err(CurveError::KnotCountMismatch {
                knots: K,
                expected: C + D + 1,
            });
        }
        if !is_non_decreasing(&knots) {
            return Err(CurveError::UnsortedKnots);
        }
        Ok(BSpline {
            knots,
            control_points,
        })
    }

    /// Create a curve over a freshly generated clamped open-uniform knot
    /// vector, the convention under which the curve starts at its first and
    /// ends at its last control point with parameter domain `[0, C - D]`.
    pub fn clamped_uniform(control_points: [P; C]) -> Result<Self, CurveError> {
        Self::new(open_uniform(C, D), control_points)
    }

    /// Get the min and max knot domain values for finding the `t` range to
    /// compute the curve over. The curve is only defined over the inclusive
    /// range `[min, max]`; [`eval`](Self::eval) rejects parameters outside it.
    pub fn knot_domain(&self) -> (P::Scalar, P::Scalar) {
        (self.knots[D], self.knots[K - 1 - D])
    }

    /// Returns an iterator over the control points.
    pub fn control_points(&self) -> slice::Iter<'_, P> {
        self.control_points.iter()
    }

    /// Returns an iterator over the knots.
    pub fn knots(&self) -> slice::Iter<'_, P::Scalar> {
        self.knots.iter()
    }

    /// Compute a point on the curve at `t` by summing every control point
    /// weighted with its Cox-de Boor basis value.
    pub fn eval(&self, t: P::Scalar) -> Result<P, CurveError> {
        let (kmin, kmax) = self.knot_domain();
        if t < kmin || t > kmax {
            return Err(CurveError::ParameterOutOfDomain);
        }
        Ok(self.point_at(t))
    }

    /// Sample the curve at `lod` parameter steps evenly spaced over the knot
    /// domain. The final step is pulled inside the domain by
    /// [`DOMAIN_END_INSET`]. Errors when `lod < 2`, since anything less
    /// cannot cover both domain ends.
    ///
    /// # Examples
    /// ```rust
    /// use knotwork::{BSpline, PointN};
    ///
    /// let curve: BSpline<PointN<f64, 2>, 8, 4, 3> = BSpline::clamped_uniform([
    ///     PointN::new([0.0, 0.0]),
    ///     PointN::new([1.0, 2.0]),
    ///     PointN::new([2.0, -1.0]),
    ///     PointN::new([3.0, 0.0]),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(curve.sample(100).unwrap().len(), 100);
    /// ```
    pub fn sample(&self, lod: usize) -> Result<Samples<'_, P, K, C, D>, CurveError> {
        if lod < 2 {
            return Err(CurveError::TooFewSamples { lod });
        }
        Ok(Samples {
            curve: self,
            lod,
            index: 0,
        })
    }

    /// Weighted basis sum over all control points. The accumulator starts at
    /// the zero point and weights at or below [`BASIS_CUTOFF`] are skipped.
    fn point_at(&self, t: P::Scalar) -> P {
        let cutoff = <P::Scalar as NumCast>::from(BASIS_CUTOFF).unwrap();
        let mut point = P::default();
        for (i, control_point) in self.control_points.iter().enumerate() {
            let weight = cox_de_boor(&self.knots, t, i, D + 1);
            if weight > cutoff {
                point = point + *control_point * weight;
            }
        }
        point
    }
}

/// Iterator over evenly spaced curve samples, returned by
/// [`BSpline::sample`]. Yields exactly `lod` points.
pub struct Samples<'a, P, const K: usize, const C: usize, const D: usize>
where
    P: Point,
{
    curve: &'a BSpline<P, K, C, D>,
    lod: usize,
    index: usize,
}

impl<P, const K: usize, const C: usize, const D: usize> Iterator for Samples<'_, P, K, C, D>
where
    P: Point,
{
    type Item = P;

    fn next(&mut self) -> Option<P> {
        if self.index >= self.lod {
            return None;
        }
        let (kmin, kmax) = self.curve.knot_domain();
        let step = <P::Scalar as NumCast>::from(
            self.index as NativeFloat / (self.lod - 1) as NativeFloat,
        )
        .unwrap();
        let mut t = kmin + (kmax - kmin) * step;
        if self.index == self.lod - 1 {
            t = t - <P::Scalar as NumCast>::from(DOMAIN_END_INSET).unwrap();
        }
        self.index += 1;
        Some(self.curve.point_at(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.lod - self.index;
        (remaining, Some(remaining))
    }
}

impl<P, const K: usize, const C: usize, const D: usize> ExactSizeIterator
    for Samples<'_, P, K, C, D>
where
    P: Point,
{
}

impl<P, const K: usize, const C: usize, const D: usize> FusedIterator for Samples<'_, P, K, C, D> where
    P: Point
{
}
