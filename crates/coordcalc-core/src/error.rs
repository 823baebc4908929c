//! Error handling for coordcalc
//!
//! Geometric outcomes (parallel lines, disjoint circles, ...) are not errors;
//! they are reported through [`crate::CalculationResult`]. The types here cover
//! the remaining failure modes:
//! - Geometry errors (degenerate construction input)
//! - Parameter errors (chamfer input validation)
//! - Record serialization errors
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry construction error
///
/// Raised when a line or circle cannot be built from the supplied values.
/// Degenerate input never reaches the intersection algorithms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The two points defining a line coincide
    #[error("Points coincide, no line can be built through ({x}, {y})")]
    DegenerateInput {
        /// X coordinate of the coincident point.
        x: f64,
        /// Y coordinate of the coincident point.
        y: f64,
    },

    /// Circle radius is zero, negative or not a number
    #[error("Radius must be positive, got {radius}")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },

    /// Implicit line coefficients with a zero normal vector
    #[error("Line coefficients a and b cannot both be zero")]
    InvalidLine,
}

/// Chamfer parameter validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is outside its open interval.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max}, exclusive)")]
    OutOfRange {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
        /// Lower bound (exclusive).
        min: f64,
        /// Upper bound (exclusive).
        max: f64,
    },

    /// A parameter value is invalid for another reason.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Main error type for coordcalc
///
/// A unified error type used by the fallible public APIs of this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Parameter error
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Record (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a parameter error
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Error::Parameter(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
