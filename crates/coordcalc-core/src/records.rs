//! JSON records for the persistence layer
//!
//! Field names and layouts are fixed so stored history entries stay
//! readable. Values are written unrounded and read back bit-for-bit.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::chamfer::{ChamferParameters, ChamferResult, CornerDirection};
use crate::error::Result;
use crate::geometry::Point;
use crate::intersection::{IntersectionKind, IntersectionResult};
use crate::shapes::CalculationInput;

/// (De)serialize a [`Point`] as a two-element `[x, y]` array.
pub mod point_array {
    use super::Point;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(point: &Point, serializer: S) -> Result<S::Ok, S::Error> {
        [point.x, point.y].serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point, D::Error> {
        let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Point::new(x, y))
    }
}

/// Read a corner direction id, falling back to the default for unknown ids.
pub fn direction_or_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<CornerDirection, D::Error> {
    let id = String::deserialize(deserializer)?;
    Ok(CornerDirection::from_id(&id).unwrap_or_else(|| {
        warn!(id = %id, "unknown corner direction in record, using default");
        CornerDirection::default()
    }))
}

/// Flat on-disk layout of a [`ChamferResult`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChamferResultRecord {
    pub approach_x: f64,
    pub approach_y: f64,
    pub corner_x: f64,
    pub corner_y: f64,
    pub chamfer_angle: f64,
    pub approach_distance: f64,
}

impl From<ChamferResult> for ChamferResultRecord {
    fn from(result: ChamferResult) -> Self {
        Self {
            approach_x: result.approach_point.x,
            approach_y: result.approach_point.y,
            corner_x: result.corner_point.x,
            corner_y: result.corner_point.y,
            chamfer_angle: result.chamfer_angle,
            approach_distance: result.approach_distance,
        }
    }
}

impl From<ChamferResultRecord> for ChamferResult {
    fn from(record: ChamferResultRecord) -> Self {
        Self {
            approach_point: Point::new(record.approach_x, record.approach_y),
            corner_point: Point::new(record.corner_x, record.corner_y),
            chamfer_angle: record.chamfer_angle,
            approach_distance: record.approach_distance,
        }
    }
}

/// One stored intersection point: `{ "x", "y", "type" }`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionRecord {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub kind: IntersectionKind,
}

impl From<&IntersectionResult> for IntersectionRecord {
    fn from(result: &IntersectionResult) -> Self {
        Self {
            x: result.point.x,
            y: result.point.y,
            kind: result.kind,
        }
    }
}

impl From<IntersectionRecord> for IntersectionResult {
    fn from(record: IntersectionRecord) -> Self {
        Self {
            point: Point::new(record.x, record.y),
            kind: record.kind,
        }
    }
}

/// Serialize chamfer parameters as a camelCase JSON object.
pub fn chamfer_parameters_to_json(params: &ChamferParameters) -> Result<String> {
    Ok(serde_json::to_string(params)?)
}

/// Parse chamfer parameters; unknown direction ids read as `TOP_LEFT`.
pub fn chamfer_parameters_from_json(json: &str) -> Result<ChamferParameters> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a chamfer result in its flat record layout.
pub fn chamfer_result_to_json(result: &ChamferResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}

/// Parse a chamfer result from its flat record layout.
pub fn chamfer_result_from_json(json: &str) -> Result<ChamferResult> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a stored input pair as `{ "shapeA", "shapeB" }`.
pub fn calculation_input_to_json(input: &CalculationInput) -> Result<String> {
    Ok(serde_json::to_string(input)?)
}

/// Parse a stored input pair; malformed documents yield `None`.
pub fn calculation_input_from_json(json: &str) -> Option<CalculationInput> {
    serde_json::from_str(json)
        .map_err(|e| debug!("discarding malformed calculation input: {}", e))
        .ok()
}

/// Serialize intersection points as an array of `{ "x", "y", "type" }`.
pub fn intersections_to_json(results: &[IntersectionResult]) -> Result<String> {
    let records: Vec<IntersectionRecord> = results.iter().map(IntersectionRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Parse stored intersection points; malformed documents yield an empty list.
pub fn intersections_from_json(json: &str) -> Vec<IntersectionResult> {
    match serde_json::from_str::<Vec<IntersectionRecord>>(json) {
        Ok(records) => records.into_iter().map(IntersectionResult::from).collect(),
        Err(e) => {
            debug!("discarding malformed intersection list: {}", e);
            Vec::new()
        }
    }
}
