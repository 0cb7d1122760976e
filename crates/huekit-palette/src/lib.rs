//! # huekit-palette — color-harmony rule engine
//!
//! Derives related colors from a base color. Every rule is a small pure
//! transform in HLS space: rotate the hue, scale the saturation, or band
//! the lightness, then convert back to 8-bit RGB.
//!
//! # Architecture
//!
//! ```text
//! rule name + RuleParams + base color
//!     │
//!     ▼
//! dispatch.rs:    parse rule, fill parameter defaults
//!     │
//!     ▼
//! rules.rs:       complementary / analogous / triadic / tetradic /
//!                 monochromatic / hue choice
//! temperature.rs: random warm/cool hue → hue choice → delegated rule
//!     │
//!     ▼
//! vibrancy.rs:    clamp(s × vibrancy) on every derived color
//!     │
//!     ▼
//! Palette (ordered Vec<Rgb>, base first where the rule echoes it)
//! ```
//!
//! `builtin.rs` (theme keywords), `psychology.rs` (hue family notes) and
//! `roles.rs` (what each palette position is for) sit beside the engine.
//! Callers use them to pick or describe colors, and the rules never
//! consult them.
//!
//! # Determinism
//!
//! Everything is pure except the temperature hue pick, which takes the
//! random source as a parameter. Pass a seeded generator for
//! reproducible palettes, or use
//! [`temperature::temperature_from_hue`] to skip the draw entirely.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Loop indices and variation counts become f64 offsets.
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/saturation variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod builtin;
pub mod dispatch;
pub mod error;
pub mod psychology;
pub mod roles;
pub mod rules;
pub mod temperature;
pub mod vibrancy;

pub use dispatch::{Palette, ResolvedParams, Rule, RuleParams, generate, generate_from_hex};
pub use error::PaletteError;
pub use temperature::{Scheme, Temperature};
pub use vibrancy::{Style, apply_vibrancy};
