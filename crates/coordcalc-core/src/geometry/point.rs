use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rounding;

/// A 2D coordinate in machine units (mm)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Format as `(x, y)` with both components rounded to `decimal_places`
    pub fn format(&self, decimal_places: u32) -> String {
        let places = decimal_places as usize;
        // + 0.0 maps -0.0 to 0.0
        let x = rounding::round(self.x, decimal_places) + 0.0;
        let y = rounding::round(self.y, decimal_places) + 0.0;
        format!("({:.*}, {:.*})", places, x, places, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
