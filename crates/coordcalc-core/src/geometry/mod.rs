//! Planar primitives: points, infinite lines and full circles
//!
//! Lines and circles validate their input at construction so the
//! intersection algorithms only ever see well-formed geometry.

mod circle;
mod line;
mod point;

pub use circle::Circle;
pub use line::Line;
pub use point::Point;
