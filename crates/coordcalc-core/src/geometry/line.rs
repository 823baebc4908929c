use super::Point;
use crate::error::GeometryError;
use crate::tolerance::{near_zero, EPSILON};

/// An infinite line in implicit form `a·x + b·y + c = 0`
///
/// The coefficients are not normalized, so they scale with the input that
/// built the line. All intersection formulas are scale invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    /// Build a line from raw coefficients, rejecting a zero normal vector.
    ///
    /// Only an exact `(0, 0)` normal is rejected; small coefficients are a
    /// valid scaling of the same line.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, GeometryError> {
        if a == 0.0 && b == 0.0 {
            return Err(GeometryError::InvalidLine);
        }
        Ok(Self { a, b, c })
    }

    /// Line through two distinct points.
    pub fn from_two_points(p1: Point, p2: Point) -> Result<Self, GeometryError> {
        if p1.distance_to(&p2) < EPSILON {
            return Err(GeometryError::DegenerateInput { x: p1.x, y: p1.y });
        }
        let a = p2.y - p1.y;
        let b = p1.x - p2.x;
        let c = -a * p1.x - b * p1.y;
        Ok(Self { a, b, c })
    }

    /// Line through `point` with direction `angle_degrees` measured
    /// counter-clockwise from the positive x-axis.
    pub fn from_point_and_angle(point: Point, angle_degrees: f64) -> Self {
        let angle_rad = angle_degrees.to_radians();
        // normal of direction (cos, sin) is (-sin, cos)
        let a = -angle_rad.sin();
        let b = angle_rad.cos();
        let c = -a * point.x - b * point.y;
        Self { a, b, c }
    }

    /// Coefficient of `x`
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Coefficient of `y`
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Constant term
    pub fn c(&self) -> f64 {
        self.c
    }

    /// True when the normals' cross product is within [`EPSILON`] of zero.
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        near_zero(self.a * other.b - self.b * other.a)
    }

    /// Signed residual of `point` in the line equation.
    pub fn evaluate(&self, point: Point) -> f64 {
        self.a * point.x + self.b * point.y + self.c
    }
}
