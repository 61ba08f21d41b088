use core::ops::{Add, Mul, Sub};

use num_traits::{Float, Zero};

/// Trait defined over generic N-dimensional points P which themselves are
/// generic over a scalar type.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires
/// mostly wrapping. Keeping the trait as minimal as possible to make
/// integration with other libraries easy.
pub trait Point:
    Add<Output = Self>
    + Sub<Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
    + Copy
    + Default
    + PartialEq
{
    type Scalar: Float;

    /// Number of coordinate axes of the point.
    const DIM: usize;

    /// Returns the component of the Point on the axis corresponding to
    /// `index`, e.g. [0, 1, 2] -> [x, y, z].
    fn axis(&self, index: usize) -> Self::Scalar;

    /// Returns the squared L2 norm of the Point interpreted as a vector.
    fn squared_length(&self) -> Self::Scalar {
        let mut sqr_dist = Self::Scalar::zero();
        for i in 0..Self::DIM {
            sqr_dist = sqr_dist + self.axis(i) * self.axis(i);
        }
        sqr_dist
    }
}
