use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ChamferCalculator, ChamferParameters, ChamferResult};

/// Machining scenario offered by the tool-path planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Approach for a chamfer on an outside corner
    #[serde(rename = "CHAMFER_OUTER")]
    OuterChamfer,
    /// Chamfer on an inside corner (not available yet)
    #[serde(rename = "CHAMFER_INNER")]
    InnerChamfer,
    /// Arc lead-in (not available yet)
    #[serde(rename = "ARC_APPROACH")]
    ArcApproach,
}

impl Scenario {
    /// Every scenario, enabled or not, in menu order
    pub const ALL: [Scenario; 3] = [Self::OuterChamfer, Self::InnerChamfer, Self::ArcApproach];

    /// Stable identifier used in stored records
    pub fn id(&self) -> &'static str {
        match self {
            Self::OuterChamfer => "CHAMFER_OUTER",
            Self::InnerChamfer => "CHAMFER_INNER",
            Self::ArcApproach => "ARC_APPROACH",
        }
    }

    /// Look up a scenario by its stored identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Whether the scenario has a calculation behind it
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::OuterChamfer)
    }

    /// Scenarios a user can currently pick
    pub fn enabled() -> impl Iterator<Item = Scenario> {
        Self::ALL.into_iter().filter(Scenario::is_enabled)
    }

    /// Run the calculation belonging to this scenario. Disabled scenarios
    /// have no calculation and return `None`.
    pub fn calculate(&self, params: &ChamferParameters) -> Option<ChamferResult> {
        match self {
            Self::OuterChamfer => Some(ChamferCalculator::calculate_outer_chamfer_approach(
                params,
            )),
            Self::InnerChamfer | Self::ArcApproach => None,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OuterChamfer => write!(f, "Outer Chamfer"),
            Self::InnerChamfer => write!(f, "Inner Chamfer"),
            Self::ArcApproach => write!(f, "Arc Approach"),
        }
    }
}
