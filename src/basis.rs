//! Cox-de Boor recursion for B-spline basis functions.

use num_traits::Float;

/// Returns the value at `u` of the `i`-th B-spline basis function of order
/// `k` (order = degree + 1) over the given knot vector.
///
/// The order-1 base case uses the half-open span `[knots[i], knots[i+1])`,
/// closed on the right only for the final non-empty span so the domain's
/// upper bound evaluates to the last control point instead of degenerating.
/// Each recursive term is taken only when its denominator is strictly
/// positive, which keeps repeated knots (the clamps of an open-uniform
/// vector) from dividing by zero.
///
/// The recursion depth equals the order; no memoization is done, since the
/// order is small for the curves this library targets and each sample is
/// evaluated independently.
///
/// Callers must keep `i + k` within the knot vector, i.e. `i < n` for a
/// vector of `n + k` knots.
pub fn cox_de_boor<S>(knots: &[S], u: S, i: usize, k: usize) -> S
where
    S: Float,
{
    if k <= 1 {
        let inside = knots[i] <= u && u < knots[i + 1];
        let closes_end = knots[i] < knots[i + 1]
            && u == knots[i + 1]
            && knots[i + 1] == knots[knots.len() - 1];
        return if inside || closes_end {
            S::one()
        } else {
            S::zero()
        };
    }

    let den1 = knots[i + k - 1] - knots[i];
    let den2 = knots[i + k] - knots[i + 1];

    let mut value = S::zero();
    if den1 > S::zero() {
        value = value + (u - knots[i]) / den1 * cox_de_boor(knots, u, i, k - 1);
    }
    if den2 > S::zero() {
        value = value + (knots[i + k] - u) / den2 * cox_de_boor(knots, u, i + 1, k - 1);
    }
    value
}
