// SPDX-License-Identifier: MIT
//
// Command-line arguments.
//
// Every rule parameter has a typed flag. `--param key=value` covers the
// same names generically, and typed flags win over it when both appear.

use std::path::PathBuf;

use clap::Parser;
use huekit_palette::rules::MAX_VARIATIONS;
use huekit_palette::{PaletteError, Rule, RuleParams, Scheme, Style, Temperature};

/// Generate color-harmony palettes from a base color.
///
/// Prints one uppercase `#RRGGBB` per line, base color first when the rule
/// echoes it.
#[derive(Parser, Debug)]
#[command(name = "huekit", version)]
pub struct Args {
    /// Harmony rule: complementary, analogous, triadic, tetradic,
    /// monochromatic, hue, temperature, vibrancy.
    #[arg(required_unless_present = "list_themes")]
    pub rule: Option<Rule>,

    /// Base color as hex (`#1E90FF` or `1e90ff`).
    #[arg(short, long, conflicts_with = "theme")]
    pub color: Option<String>,

    /// Base color from a theme keyword (see --list-themes).
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Analogous spread in degrees [default: 30].
    #[arg(long, allow_negative_numbers = true, value_parser = finite)]
    pub angle: Option<f64>,

    /// Saturation multiplier for derived colors [default: 1.0].
    #[arg(short, long, allow_negative_numbers = true, value_parser = finite)]
    pub vibrancy: Option<f64>,

    /// Anchor hue in degrees for the `hue` rule [default: 0].
    #[arg(long, allow_negative_numbers = true, value_parser = finite)]
    pub hue: Option<f64>,

    /// `warm` or `cool`, for the `temperature` rule [default: warm].
    #[arg(long)]
    pub temperature: Option<Temperature>,

    /// Scheme the `temperature` rule delegates to [default: analogous].
    #[arg(long)]
    pub scheme: Option<Scheme>,

    /// Number of shades for the `monochromatic` rule [default: 5].
    #[arg(long = "variations", value_parser = variation_count)]
    pub num_variations: Option<usize>,

    /// `loud` or `quiet`, for the `vibrancy` rule [default: loud].
    #[arg(long)]
    pub style: Option<Style>,

    /// Extra parameter as KEY=VALUE (repeatable).
    #[arg(short, long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Seed for the temperature rule's hue pick, for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also print the first color's hue family and a usage note per color.
    #[arg(short, long)]
    pub describe: bool,

    /// List theme keywords and exit.
    #[arg(long)]
    pub list_themes: bool,

    /// Path to a TOML config file.
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides config).
    #[arg(short, long)]
    pub log_level: Option<String>,
}

fn finite(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("'{s}' is not a finite number"))
}

fn variation_count(s: &str) -> Result<usize, String> {
    s.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n <= MAX_VARIATIONS)
        .ok_or_else(|| format!("expected a count from 0 to {MAX_VARIATIONS}"))
}

impl Args {
    /// Collect the rule parameters given on the command line.
    ///
    /// # Errors
    ///
    /// Fails on a `--param` without `=`, an unknown parameter name, or a
    /// value that does not parse.
    pub fn rule_params(&self) -> Result<RuleParams, PaletteError> {
        let mut generic = RuleParams::default();
        for pair in &self.params {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| PaletteError::InvalidParameter { name: "param", value: pair.clone() })?;
            generic.set(key, value)?;
        }

        let typed = RuleParams {
            angle: self.angle,
            vibrancy: self.vibrancy,
            hue: self.hue,
            temperature: self.temperature,
            num_variations: self.num_variations,
            style: self.style,
            scheme: self.scheme,
        };
        Ok(generic.merge(&typed))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
