use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiffError;

use super::divergence::handler_for;

/// Comparison strategy applied to each pair of captured regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiffMode {
    /// Show the left capture untouched.
    LeftOnly,
    /// Show the right capture untouched.
    RightOnly,
    /// Sum of absolute per-channel differences.
    Rgb,
    /// Absolute luma difference.
    #[default]
    Grayscale,
    /// Weighted hue/saturation/value difference.
    Hsv,
    /// Difference of Sobel gradient magnitudes.
    Edge,
}

impl DiffMode {
    pub const ALL: [DiffMode; 6] = [
        Self::LeftOnly,
        Self::RightOnly,
        Self::Rgb,
        Self::Grayscale,
        Self::Hsv,
        Self::Edge,
    ];

    /// Human-readable label for display next to the output.
    pub fn label(self) -> &'static str {
        match self {
            Self::LeftOnly => "Left image",
            Self::RightOnly => "Right image",
            Self::Rgb => "RGB difference",
            Self::Grayscale => "Grayscale difference",
            Self::Hsv => "HSV difference",
            Self::Edge => "Edge difference",
        }
    }

    /// Modes that show one capture as-is, with no divergence computed.
    pub fn is_passthrough(self) -> bool {
        matches!(self, Self::LeftOnly | Self::RightOnly)
    }

    /// Threshold constant for divergence modes; `None` for pass-through modes.
    pub fn threshold(self) -> Option<f32> {
        handler_for(self).map(|h| h.threshold)
    }
}

impl std::fmt::Display for DiffMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DiffMode {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "leftonly" | "left-only" => Ok(Self::LeftOnly),
            "right" | "rightonly" | "right-only" => Ok(Self::RightOnly),
            "rgb" => Ok(Self::Rgb),
            "gray" | "grey" | "grayscale" | "greyscale" => Ok(Self::Grayscale),
            "hsv" => Ok(Self::Hsv),
            "edge" | "edges" => Ok(Self::Edge),
            other => Err(DiffError::UnsupportedMode(other.to_string())),
        }
    }
}
