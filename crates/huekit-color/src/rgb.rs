// SPDX-License-Identifier: MIT
//
// Rgb — the 24-bit exchange format.
//
// Input accepts `RRGGBB` with an optional leading `#`, in either case.
// Output is always `#RRGGBB` in uppercase. Downstream renderers key on
// that exact shape, so `Display` and `to_hex` never vary it.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ColorError;
use crate::hls::Hls;

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9A-Fa-f]{6}$").expect("hex pattern is a valid regex"));

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// A 24-bit sRGB color, one byte per channel.
///
/// ```
/// use huekit_color::Rgb;
///
/// let blue = Rgb::from_hex("#1e90ff").unwrap();
/// assert_eq!(blue, Rgb::new(30, 144, 255));
/// assert_eq!(blue.to_hex(), "#1E90FF");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] unless the input matches
    /// `^#?[0-9A-Fa-f]{6}$` exactly. Shorthand (`#F80`) and alpha
    /// (`#RRGGBBAA`) forms are rejected.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        if !HEX_PATTERN.is_match(s) {
            return Err(ColorError::InvalidFormat(s.to_owned()));
        }
        let digits = s.strip_prefix('#').unwrap_or(s);
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidFormat(s.to_owned()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels normalized to [0.0, 1.0].
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Build from normalized channels, scaling by 255 and truncating
    /// toward zero. Values outside [0.0, 1.0] saturate at the bounds.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to hue/lightness/saturation.
    #[must_use]
    pub fn to_hls(self) -> Hls {
        let (r, g, b) = self.to_unit();
        Hls::from_unit_rgb(r, g, b)
    }

    /// Largest per-channel difference between two colors.
    #[must_use]
    pub const fn max_channel_diff(self, other: Self) -> u8 {
        let dr = self.r.abs_diff(other.r);
        let dg = self.g.abs_diff(other.g);
        let db = self.b.abs_diff(other.b);
        let m = if dr > dg { dr } else { dg };
        if m > db { m } else { db }
    }
}

/// Truncating 8-bit quantization (`int(c * 255)`), not rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(c: f64) -> u8 {
    (c * 255.0) as u8
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({})", self.to_hex())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
