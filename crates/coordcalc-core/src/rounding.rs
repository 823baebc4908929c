//! Display rounding
//!
//! Results are rounded only for presentation. Values handed to persistence
//! stay unrounded. The number of places is a user setting in `1..=3`; this
//! module does not validate it.

use crate::geometry::Point;

/// Round to `decimal_places` decimals, ties away from zero.
///
/// Values too large to scale are already integral at this precision and
/// come back unchanged, as do NaN and infinities.
pub fn round(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Round both components of a point.
pub fn round_point(point: Point, decimal_places: u32) -> Point {
    Point::new(
        round(point.x, decimal_places),
        round(point.y, decimal_places),
    )
}
