//! Chamfer approach-point calculation
//!
//! For an outside corner the cutting tool should enter along the chamfer
//! line rather than plunge at the corner. Given the corner, its orientation,
//! the chamfer angle and an approach distance, this module derives the
//! point where the approach move starts.

mod direction;
mod scenario;

pub use direction::CornerDirection;
pub use scenario::Scenario;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ParameterError;
use crate::geometry::Point;
use crate::records::{self, ChamferResultRecord};
use crate::rounding;

/// Input for an outer chamfer approach calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChamferParameters {
    /// Corner X coordinate (mm)
    pub corner_x: f64,
    /// Corner Y coordinate (mm)
    pub corner_y: f64,
    /// Chamfer angle (degrees), strictly between 0 and 90
    pub chamfer_angle: f64,
    /// Distance from the corner to the approach point (mm), strictly positive
    pub approach_distance: f64,
    /// Corner orientation; unknown ids in stored records read as `TOP_LEFT`
    #[serde(deserialize_with = "records::direction_or_default")]
    pub direction: CornerDirection,
}

impl ChamferParameters {
    /// Approach distance offered when the user has not entered one (mm)
    pub const DEFAULT_APPROACH_DISTANCE: f64 = 2.0;

    /// Chamfer angles offered as one-tap presets (degrees)
    pub const PRESET_ANGLES: [f64; 3] = [30.0, 45.0, 60.0];

    /// Build validated parameters.
    ///
    /// The chamfer angle must lie in the open interval (0, 90) and the
    /// approach distance must be positive. Coordinates must be finite.
    pub fn new(
        corner_x: f64,
        corner_y: f64,
        chamfer_angle: f64,
        approach_distance: f64,
        direction: CornerDirection,
    ) -> Result<Self, ParameterError> {
        for (name, value) in [("corner_x", corner_x), ("corner_y", corner_y)] {
            if !value.is_finite() {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: "must be a finite number".to_string(),
                });
            }
        }

        if !(chamfer_angle > 0.0 && chamfer_angle < 90.0) {
            return Err(ParameterError::OutOfRange {
                name: "chamfer_angle".to_string(),
                value: chamfer_angle,
                min: 0.0,
                max: 90.0,
            });
        }

        if !(approach_distance > 0.0 && approach_distance.is_finite()) {
            return Err(ParameterError::InvalidValue {
                name: "approach_distance".to_string(),
                reason: format!("must be a positive number, got {}", approach_distance),
            });
        }

        Ok(Self {
            corner_x,
            corner_y,
            chamfer_angle,
            approach_distance,
            direction,
        })
    }

    pub fn corner_point(&self) -> Point {
        Point::new(self.corner_x, self.corner_y)
    }
}

/// Result of an outer chamfer approach calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "ChamferResultRecord", from = "ChamferResultRecord")]
pub struct ChamferResult {
    /// Where the approach move starts
    pub approach_point: Point,
    /// The chamfered corner (reference point)
    pub corner_point: Point,
    /// Chamfer angle (degrees)
    pub chamfer_angle: f64,
    /// Approach distance (mm)
    pub approach_distance: f64,
}

impl ChamferResult {
    /// Copy with both points rounded for display.
    pub fn rounded(&self, decimal_places: u32) -> Self {
        Self {
            approach_point: rounding::round_point(self.approach_point, decimal_places),
            corner_point: rounding::round_point(self.corner_point, decimal_places),
            ..*self
        }
    }
}

/// Chamfer tool-path calculations
pub struct ChamferCalculator;

impl ChamferCalculator {
    /// Approach point for a chamfer on an outside corner.
    ///
    /// The approach runs opposite to the bevel direction, so the tool
    /// reaches the corner travelling along the chamfer line. Parameters are
    /// not re-validated here.
    pub fn calculate_outer_chamfer_approach(params: &ChamferParameters) -> ChamferResult {
        let corner_point = params.corner_point();

        let chamfer_direction_angle = params
            .direction
            .chamfer_direction_angle(params.chamfer_angle);
        let approach_angle_rad = (chamfer_direction_angle + 180.0).to_radians();

        let approach_point = Point::new(
            corner_point.x + params.approach_distance * approach_angle_rad.cos(),
            corner_point.y + params.approach_distance * approach_angle_rad.sin(),
        );

        trace!(
            direction = %params.direction,
            chamfer_angle = params.chamfer_angle,
            approach = %approach_point,
            "outer chamfer approach"
        );

        ChamferResult {
            approach_point,
            corner_point,
            chamfer_angle: params.chamfer_angle,
            approach_distance: params.approach_distance,
        }
    }
}
