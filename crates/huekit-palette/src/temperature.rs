//! Warm/cool palettes.
//!
//! A temperature picks a random whole-degree hue from its band, synthesizes
//! a base color there with [`hue_choice`], and hands that base to one of the
//! simple schemes. The draw is the only nondeterministic step in the crate,
//! so it takes the random source as an argument.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use huekit_color::Rgb;
use log::trace;
use rand::Rng;
use serde::Deserialize;

use crate::error::PaletteError;
use crate::rules::{DEFAULT_ANGLE, analogous, complementary, hue_choice, triadic};

// ---------------------------------------------------------------------------
// Temperature
// ---------------------------------------------------------------------------

/// Which side of the wheel the base hue is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    /// Reds, oranges, yellows: 0°–60°.
    #[default]
    Warm,
    /// Cyans, blues, violets: 180°–300°.
    Cool,
}

impl Temperature {
    /// The hue band in whole degrees, both ends inclusive.
    #[must_use]
    pub const fn hue_range(self) -> RangeInclusive<u16> {
        match self {
            Self::Warm => 0..=60,
            Self::Cool => 180..=300,
        }
    }

    /// Draw a hue uniformly from this temperature's band.
    pub fn pick_hue<R: Rng + ?Sized>(self, rng: &mut R) -> u16 {
        rng.gen_range(self.hue_range())
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
        }
    }
}

impl FromStr for Temperature {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warm" => Ok(Self::Warm),
            "cool" => Ok(Self::Cool),
            _ => Err(PaletteError::InvalidParameter {
                name: "temperature",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Scheme
// ---------------------------------------------------------------------------

/// The rule a temperature palette delegates to once it has a base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// `[base, complement]`.
    Complementary,
    /// `[base, +120°, +240°]`.
    Triadic,
    /// `[base, +30°, -30°]`.
    #[default]
    Analogous,
}

impl Scheme {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
        }
    }
}

impl FromStr for Scheme {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "complementary" => Ok(Self::Complementary),
            "triadic" => Ok(Self::Triadic),
            "analogous" => Ok(Self::Analogous),
            _ => Err(PaletteError::InvalidParameter {
                name: "scheme",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Palette construction
// ---------------------------------------------------------------------------

/// Build a temperature palette around an already-chosen hue.
///
/// The base is `hue_choice(hue, vibrancy)` and comes first. Vibrancy then
/// applies again to the delegated scheme's derived colors, so a vibrancy
/// below 1.0 mutes them twice over.
#[must_use]
pub fn temperature_from_hue(hue_degrees: f64, scheme: Scheme, vibrancy: f64) -> Vec<Rgb> {
    let base = hue_choice(hue_degrees, vibrancy);
    let mut palette = Vec::with_capacity(3);
    palette.push(base);
    match scheme {
        Scheme::Complementary => palette.push(complementary(base, vibrancy)),
        Scheme::Triadic => palette.extend(triadic(base, vibrancy)),
        Scheme::Analogous => palette.extend(analogous(base, DEFAULT_ANGLE, vibrancy)),
    }
    palette
}

/// Draw a hue for `temperature` and build the palette around it.
pub fn temperature_palette<R: Rng + ?Sized>(
    temperature: Temperature,
    scheme: Scheme,
    vibrancy: f64,
    rng: &mut R,
) -> Vec<Rgb> {
    let hue = temperature.pick_hue(rng);
    trace!("{temperature} hue pick: {hue}°");
    temperature_from_hue(f64::from(hue), scheme, vibrancy)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
