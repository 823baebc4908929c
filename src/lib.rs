//! # coordcalc
//!
//! Coordinate calculator for manual machining and CNC setup:
//! - Intersections of lines and circles (line–line, line–circle, circle–circle)
//! - Outer chamfer approach points for rectangular corners
//! - Display rounding and persisted user settings
//!
//! ## Architecture
//!
//! coordcalc is organized as a workspace with multiple crates:
//!
//! 1. **coordcalc-core** - Geometry primitives, intersection and chamfer calculators, records
//! 2. **coordcalc-settings** - Display precision and chamfer defaults, JSON/TOML files
//! 3. **coordcalc** - This facade, re-exporting both and wiring up logging

pub use coordcalc_core::{chamfer, geometry, intersection, records, rounding, shapes, tolerance};

pub use coordcalc_core::{
    CalculationInput, CalculationResult, ChamferCalculator, ChamferParameters, ChamferResult,
    Circle, CornerDirection, Error, GeometryError, IntersectionCalculator, IntersectionKind,
    IntersectionResult, Line, ParameterError, Point, Primitive, Result, Scenario, ShapeInput,
    ShapeType, EPSILON,
};

pub use coordcalc_settings::{
    ChamferSettings, Config, ConfigError, ConfigResult, DisplaySettings, SettingsError,
    SettingsResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support, `info` when unset
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
