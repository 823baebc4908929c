//! Shared numeric tolerance
//!
//! Every degeneracy decision in the crate (coincident points, parallel lines,
//! tangency, concentric circles) compares against [`EPSILON`].

/// Absolute tolerance used for all geometric comparisons.
pub const EPSILON: f64 = 1e-10;

/// True when `value` is within [`EPSILON`] of zero.
#[inline]
pub fn near_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// True when `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
