//! Raw shape descriptions as entered by the user
//!
//! A [`ShapeInput`] keeps the values exactly as typed. It is converted to a
//! validated [`Line`] or [`Circle`] only when a calculation runs, so an
//! input pair can be stored and replayed without loss.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::{Circle, Line, Point};
use crate::records::point_array;

/// Kind of shape the user is entering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeType {
    /// Line through two points
    LineTwoPoints,
    /// Line through a point at an angle
    LinePointAngle,
    /// Circle from center and radius
    Circle,
}

/// A shape description before validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeInput {
    LineTwoPoints {
        #[serde(with = "point_array")]
        p1: Point,
        #[serde(with = "point_array")]
        p2: Point,
    },
    LinePointAngle {
        #[serde(with = "point_array")]
        point: Point,
        #[serde(rename = "angle")]
        angle_degrees: f64,
    },
    Circle {
        #[serde(with = "point_array")]
        center: Point,
        radius: f64,
    },
}

/// A validated primitive ready for the intersection algorithms
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Line(Line),
    Circle(Circle),
}

impl ShapeInput {
    /// Kind tag of this input
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::LineTwoPoints { .. } => ShapeType::LineTwoPoints,
            Self::LinePointAngle { .. } => ShapeType::LinePointAngle,
            Self::Circle { .. } => ShapeType::Circle,
        }
    }

    /// Validate the input and build the line or circle it describes.
    pub fn to_primitive(&self) -> Result<Primitive, GeometryError> {
        match *self {
            Self::LineTwoPoints { p1, p2 } => Line::from_two_points(p1, p2).map(Primitive::Line),
            Self::LinePointAngle {
                point,
                angle_degrees,
            } => Ok(Primitive::Line(Line::from_point_and_angle(
                point,
                angle_degrees,
            ))),
            Self::Circle { center, radius } => Circle::new(center, radius).map(Primitive::Circle),
        }
    }

    /// The line this input describes, if it is a well-formed line.
    pub fn to_line(&self) -> Option<Line> {
        match self.to_primitive() {
            Ok(Primitive::Line(line)) => Some(line),
            _ => None,
        }
    }

    /// The circle this input describes, if it is a well-formed circle.
    pub fn to_circle(&self) -> Option<Circle> {
        match self.to_primitive() {
            Ok(Primitive::Circle(circle)) => Some(circle),
            _ => None,
        }
    }
}

/// The two shapes of one intersection calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    pub shape_a: ShapeInput,
    pub shape_b: ShapeInput,
}

impl CalculationInput {
    pub fn new(shape_a: ShapeInput, shape_b: ShapeInput) -> Self {
        Self { shape_a, shape_b }
    }
}
