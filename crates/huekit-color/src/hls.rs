// SPDX-License-Identifier: MIT
//
// Hls — the cylindrical working representation.
//
// Hue, lightness and saturation all live in [0, 1]. Hue is a fraction of a
// turn (degrees / 360) and wraps: 0.0 and 1.0 name the same angle.
//
// The formulas are the classic HLS pair (Joblove & Greenberg, 1978), kept
// in their textbook operation order. Plain arithmetic is used instead of
// `mul_add`: a fused multiply-add changes the last bit, and after the
// truncating 8-bit step that can move a channel by one.
#![allow(clippy::suboptimal_flops, clippy::float_cmp)]

use std::fmt;

use crate::rgb::Rgb;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

/// Wrap a hue into [0.0, 1.0).
///
/// Values a hair below zero can round up to exactly 1.0 after the modulo;
/// those fold back to 0.0 so the half-open range always holds.
#[inline]
#[must_use]
pub fn wrap_hue(h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    if h >= 1.0 { 0.0 } else { h }
}

// ─── Hls ─────────────────────────────────────────────────────────────────────

/// A color as hue / lightness / saturation, each in [0.0, 1.0].
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Hls {
    /// Hue as a fraction of a full turn.
    pub h: f64,
    /// Lightness: 0.0 black, 0.5 pure hue, 1.0 white.
    pub l: f64,
    /// Saturation: 0.0 gray, 1.0 fully saturated.
    pub s: f64,
}

impl Hls {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, l: f64, s: f64) -> Self {
        Self { h, l, s }
    }

    /// Build from a hue in degrees. Any angle is accepted and normalized
    /// modulo 360, so `-30.0` and `330.0` are the same hue.
    #[must_use]
    pub fn from_degrees(degrees: f64, l: f64, s: f64) -> Self {
        Self::new(degrees.rem_euclid(360.0) / 360.0, l, s)
    }

    /// Hue in degrees, [0, 360).
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.h * 360.0
    }

    /// Rotate the hue by `turns` (1.0 = full circle), wrapping into [0, 1).
    #[inline]
    #[must_use]
    pub fn rotate(self, turns: f64) -> Self {
        Self {
            h: wrap_hue(self.h + turns),
            ..self
        }
    }

    /// Rotate the hue by an angle in degrees.
    #[inline]
    #[must_use]
    pub fn rotate_degrees(self, degrees: f64) -> Self {
        self.rotate(degrees / 360.0)
    }

    /// Return a copy with a different lightness. No clamping happens here.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Return a copy with a different saturation. No clamping happens here.
    #[inline]
    #[must_use]
    pub const fn with_saturation(self, s: f64) -> Self {
        Self { s, ..self }
    }

    /// Whether the color carries no hue information.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0
    }

    /// Convert normalized RGB (each in [0, 1]) to HLS.
    #[must_use]
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);
        let sumc = maxc + minc;
        let rangec = maxc - minc;
        let l = sumc / 2.0;

        if minc == maxc {
            return Self::new(0.0, l, 0.0);
        }

        let s = if l <= 0.5 {
            rangec / sumc
        } else {
            rangec / (2.0 - maxc - minc)
        };

        let rc = (maxc - r) / rangec;
        let gc = (maxc - g) / rangec;
        let bc = (maxc - b) / rangec;

        let h = if r == maxc {
            bc - gc
        } else if g == maxc {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self::new((h / 6.0).rem_euclid(1.0), l, s)
    }

    /// Convert to normalized RGB, each channel in [0, 1].
    #[must_use]
    pub fn to_unit_rgb(self) -> (f64, f64, f64) {
        let Self { h, l, s } = self;
        if s == 0.0 {
            return (l, l, l);
        }
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
        let m1 = 2.0 * l - m2;
        (
            channel(m1, m2, h + ONE_THIRD),
            channel(m1, m2, h),
            channel(m1, m2, h - ONE_THIRD),
        )
    }

    /// Convert to 8-bit RGB. Channels are truncated, not rounded.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = self.to_unit_rgb();
        Rgb::from_unit(r, g, b)
    }
}

/// One RGB channel from the two HLS intermediates and a hue offset.
#[inline]
fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}

impl fmt::Debug for Hls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hls({:.4}, {:.4}, {:.4})", self.h, self.l, self.s)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
