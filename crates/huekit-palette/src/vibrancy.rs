//! Saturation scaling.
//!
//! Vibrancy is a plain multiplier on HLS saturation. The product is clamped
//! to [0, 1], so a multiplier above 1 pushes toward full saturation and a
//! negative one collapses to gray.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PaletteError;

/// Scale saturation `s` by `vibrancy`, clamped to [0, 1].
#[inline]
#[must_use]
pub fn apply_vibrancy(s: f64, vibrancy: f64) -> f64 {
    (s * vibrancy).clamp(0.0, 1.0)
}

/// Named vibrancy presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Full saturation (vibrancy 1.0).
    #[default]
    Loud,
    /// Muted (vibrancy 0.5).
    Quiet,
}

impl Style {
    /// The vibrancy multiplier this preset stands for.
    #[must_use]
    pub const fn vibrancy(self) -> f64 {
        match self {
            Self::Loud => 1.0,
            Self::Quiet => 0.5,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Loud => "loud",
            Self::Quiet => "quiet",
        }
    }
}

impl FromStr for Style {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loud" => Ok(Self::Loud),
            "quiet" => Ok(Self::Quiet),
            _ => Err(PaletteError::InvalidParameter {
                name: "style",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
