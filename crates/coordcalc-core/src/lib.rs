//! # coordcalc Core
//!
//! Planar geometry kernel for two-axis tool-path planning.
//! Provides:
//! - Points, infinite lines (implicit form) and full circles
//! - Line/line, line/circle and circle/circle intersections with
//!   tangency and degeneracy handling under a single tolerance
//! - Outer chamfer approach-point derivation for the four corner orientations
//! - Display rounding and JSON records for the persistence layer
//!
//! Every calculation is pure and stateless; all types are plain values that
//! can be shared across threads freely.

pub mod chamfer;
pub mod error;
pub mod geometry;
pub mod intersection;
pub mod records;
pub mod rounding;
pub mod shapes;
pub mod tolerance;

pub use chamfer::{ChamferCalculator, ChamferParameters, ChamferResult, CornerDirection, Scenario};
pub use error::{Error, GeometryError, ParameterError, Result};
pub use geometry::{Circle, Line, Point};
pub use intersection::{
    CalculationResult, IntersectionCalculator, IntersectionKind, IntersectionResult,
};
pub use shapes::{CalculationInput, Primitive, ShapeInput, ShapeType};
pub use tolerance::EPSILON;
