//! Open-uniform (clamped) knot vector generation.
//!
//! The knot vector for a curve of degree `d` over `n` control points has
//! `n + d + 1` entries: `d` leading zeros, an interior ramp `0, 1, ..., n-d`
//! and `d` trailing repeats of `n-d`. The repeated boundary knots clamp the
//! curve to its first and last control point; the interior ramp doubles as
//! the usable parameter domain `[0, n-d]`.

use num_traits::{Float, NumCast};

/// Build the clamped open-uniform knot vector for `control_points` points of
/// the given `degree`. `K` must equal `control_points + degree + 1`.
///
/// The function is total; the shape is only meaningful for
/// `control_points >= degree + 1`, which the curve constructors enforce.
///
/// # Examples
/// ```rust
/// let knots: [f64; 11] = knotwork::open_uniform(7, 3);
/// assert_eq!(
///     knots,
///     [0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 4.0, 4.0, 4.0]
/// );
/// ```
pub fn open_uniform<S, const K: usize>(control_points: usize, degree: usize) -> [S; K]
where
    S: Float,
{
    let end: S = <S as NumCast>::from(control_points.saturating_sub(degree)).unwrap();
    core::array::from_fn(|i| {
        if i <= degree {
            S::zero()
        } else if i >= K - degree - 1 {
            end
        } else {
            <S as NumCast>::from(i - degree).unwrap()
        }
    })
}

/// Return true if the knot sequence never decreases.
pub fn is_non_decreasing<S: PartialOrd>(knots: &[S]) -> bool {
    knots.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_cubic_shape() {
        // degree 3, 7 control points -> 11 knots
        let knots: [f64; 11] = open_uniform(7, 3);
        assert_eq!(
            knots,
            [0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 4.0, 4.0, 4.0]
        );
        assert!(is_non_decreasing(&knots));
    }

    #[test]
    fn clamped_linear_shape() {
        // degree 1 keeps a single repeat at each end
        let knots: [f64; 6] = open_uniform(4, 1);
        assert_eq!(knots, [0.0, 0.0, 1.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn minimal_curve_has_empty_interior() {
        // n = degree + 1 leaves no interior knots: a single Bezier segment
        let knots: [f64; 8] = open_uniform(4, 3);
        assert_eq!(knots, [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn non_decreasing_rejects_disorder() {
        assert!(is_non_decreasing(&[0.0, 0.0, 0.5, 1.0]));
        assert!(!is_non_decreasing(&[0.0, 1.0, 0.5, 1.0]));
    }
}
