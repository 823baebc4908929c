use super::Point;
use crate::error::GeometryError;

/// A full circle with a strictly positive radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Build a circle, rejecting a radius that is not strictly positive.
    pub fn new(center: Point, radius: f64) -> Result<Self, GeometryError> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius { radius });
        }
        Ok(Self { center, radius })
    }

    /// Center point
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius (mm)
    pub fn radius(&self) -> f64 {
        self.radius
    }
}
