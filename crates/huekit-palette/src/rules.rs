//! Harmony rules — pure hue and lightness transforms.
//!
//! Each rule converts the base color to HLS, derives one or more variants,
//! and converts them back. Derived colors get [`apply_vibrancy`] on the
//! base saturation. The base color itself is never returned from here;
//! echoing it verbatim at the front of a palette is the dispatcher's job.
//!
//! Hue offsets are fractions of a turn and wrap modulo 1.0. Lightness is
//! passed through untouched except in [`monochromatic`], which bands it.

// Plain arithmetic keeps lightness offsets bit-identical to the reference
// palettes the tests pin.
#![allow(clippy::suboptimal_flops)]

use huekit_color::{Hls, Rgb};

use crate::vibrancy::apply_vibrancy;

/// Default analogous spread in degrees.
pub const DEFAULT_ANGLE: f64 = 30.0;

/// Default number of monochromatic shades.
pub const DEFAULT_VARIATIONS: usize = 5;

/// Upper bound on monochromatic shades. Past about twenty the outer
/// shades already clamp to black and white.
pub const MAX_VARIATIONS: usize = 100;

/// Lightness step between neighboring monochromatic shades.
const LIGHTNESS_STEP: f64 = 0.1;

/// Tetradic hue offsets, ascending.
const TETRADIC_OFFSETS: [f64; 4] = [0.0, 0.25, 0.5, 0.75];

/// Base color in HLS with vibrancy already applied to its saturation.
fn vivid(base: Rgb, vibrancy: f64) -> Hls {
    let hls = base.to_hls();
    hls.with_saturation(apply_vibrancy(hls.s, vibrancy))
}

/// The color opposite the base on the wheel (hue + 0.5).
#[must_use]
pub fn complementary(base: Rgb, vibrancy: f64) -> Rgb {
    vivid(base, vibrancy).rotate(0.5).to_rgb()
}

/// The two neighbors `angle` degrees either side of the base, in the
/// order `[+angle, -angle]`.
#[must_use]
pub fn analogous(base: Rgb, angle: f64, vibrancy: f64) -> [Rgb; 2] {
    let hls = vivid(base, vibrancy);
    let turns = angle / 360.0;
    [hls.rotate(turns).to_rgb(), hls.rotate(-turns).to_rgb()]
}

/// The two remaining corners of the triangle, `[hue + 1/3, hue + 2/3]`.
#[must_use]
pub fn triadic(base: Rgb, vibrancy: f64) -> [Rgb; 2] {
    let hls = vivid(base, vibrancy);
    [hls.rotate(1.0 / 3.0).to_rgb(), hls.rotate(2.0 / 3.0).to_rgb()]
}

/// Four hues a quarter turn apart, starting at the base hue.
///
/// The first entry is the base hue re-derived with vibrancy applied, so
/// it only equals the base color when vibrancy leaves saturation alone.
#[must_use]
pub fn tetradic(base: Rgb, vibrancy: f64) -> [Rgb; 4] {
    let hls = vivid(base, vibrancy);
    TETRADIC_OFFSETS.map(|offset| hls.rotate(offset).to_rgb())
}

/// `n` shades of the base, lightness stepped by 0.1 around the original.
///
/// Offsets are `(i - n / 2) * 0.1` with integer division, so five shades
/// span `[-0.2, -0.1, 0, +0.1, +0.2]` and an even count leans dark. Each
/// lightness is clamped to [0, 1]. Hue and saturation are untouched;
/// vibrancy plays no part. Counts above [`MAX_VARIATIONS`] are capped.
#[must_use]
pub fn monochromatic(base: Rgb, n: usize) -> Vec<Rgb> {
    let n = n.min(MAX_VARIATIONS);
    let hls = base.to_hls();
    let half = (n / 2) as f64;
    (0..n)
        .map(|i| {
            let delta = -half * LIGHTNESS_STEP + i as f64 * LIGHTNESS_STEP;
            hls.with_lightness((hls.l + delta).clamp(0.0, 1.0)).to_rgb()
        })
        .collect()
}

/// Synthesize a color from a hue angle in degrees.
///
/// Lightness is fixed at 0.5 and saturation is the vibrancy itself,
/// clamped to [0, 1]. No existing color is involved.
#[must_use]
pub fn hue_choice(degrees: f64, vibrancy: f64) -> Rgb {
    Hls::from_degrees(degrees, 0.5, apply_vibrancy(1.0, vibrancy)).to_rgb()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
