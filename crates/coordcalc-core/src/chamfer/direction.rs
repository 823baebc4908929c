use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Orientation of the corner being chamfered
///
/// Named after where the corner sits on the workpiece outline:
/// `TopLeft` is `┌──`, `TopRight` is `──┐`, `BottomLeft` is `└──`,
/// `BottomRight` is `──┘`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CornerDirection {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CornerDirection {
    pub const ALL: [CornerDirection; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Stable identifier used in stored records
    pub fn id(&self) -> &'static str {
        match self {
            Self::TopLeft => "TOP_LEFT",
            Self::TopRight => "TOP_RIGHT",
            Self::BottomLeft => "BOTTOM_LEFT",
            Self::BottomRight => "BOTTOM_RIGHT",
        }
    }

    /// Look up a direction by its stored identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.id() == id)
    }

    /// Angle in degrees (counter-clockwise from +x) along which the bevel
    /// runs away from the corner.
    ///
    /// | corner | bevel heads | angle |
    /// |---|---|---|
    /// | top left | down-right | `-α` |
    /// | top right | down-left | `180 + α` |
    /// | bottom left | up-right | `α` |
    /// | bottom right | up-left | `180 - α` |
    pub fn chamfer_direction_angle(&self, chamfer_angle: f64) -> f64 {
        match self {
            Self::TopLeft => -chamfer_angle,
            Self::TopRight => 180.0 + chamfer_angle,
            Self::BottomLeft => chamfer_angle,
            Self::BottomRight => 180.0 - chamfer_angle,
        }
    }
}

impl fmt::Display for CornerDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for CornerDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| format!("Unknown corner direction: {}", s))
    }
}
