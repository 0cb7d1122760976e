// SPDX-License-Identifier: MIT
//
// huekit-color — color values for the huekit palette engine.
//
// Two representations, one conversion pipeline:
//
//   "#1E90FF" ↔ Rgb (u8 × 3) ↔ Hls (f64 × 3, each in [0, 1])
//
// Rgb is the exchange format: what callers pass in and what they get
// back, always serialized as uppercase `#RRGGBB`. Hls is the working
// format: every harmony rule rotates hue, scales saturation, or bands
// lightness in HLS and converts back.
//
// Conversion back to 8-bit truncates toward zero. That makes
// hex → HLS → hex lossy by at most one step per channel. This is a
// deliberate policy, and every expected value in the test suites
// depends on it.

pub mod error;
pub mod hls;
pub mod rgb;

pub use error::ColorError;
pub use hls::{Hls, wrap_hue};
pub use rgb::Rgb;
