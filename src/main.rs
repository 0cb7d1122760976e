// SPDX-License-Identifier: MIT
//
// huekit — color-harmony palettes from the command line.
//
// This is the binary that wires the crates together:
//
//   huekit-color   → hex parsing, HLS conversion
//   huekit-palette → rules, dispatch, theme keywords, hue families, roles
//
// A run flows through:
//
//   argv → clap → config file → base color (--color / --theme)
//        → RuleParams (config defaults, then flags) → generate → stdout
//
// Palettes go to stdout one hex per line; logs and errors go to stderr.

mod cli;
mod config;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use env_logger::{Builder, Env};
use huekit_color::Rgb;
use huekit_palette::builtin::{builtin_theme, builtin_themes};
use huekit_palette::psychology::HueFamily;
use huekit_palette::roles::Role;
use huekit_palette::{Palette, Rule, generate};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::Args;
use crate::config::Config;

// ─── Base color ─────────────────────────────────────────────────────────────

/// Resolve the base color for `rule` from `--color` or `--theme`.
///
/// Config themes shadow builtins of the same name. Neither flag given
/// means no base, which only the `hue` and `temperature` rules accept.
/// Those rules make their own base, so a given one is checked, logged as
/// ignored and dropped.
fn resolve_base(args: &Args, config: &Config, rule: Rule) -> Result<Option<Rgb>> {
    let base = lookup_base(args, config)?;
    if let Some(rgb) = base.filter(|_| !rule.needs_base()) {
        warn!("the {rule} rule makes its own base color; ignoring {rgb}");
        return Ok(None);
    }
    Ok(base)
}

fn lookup_base(args: &Args, config: &Config) -> Result<Option<Rgb>> {
    if let Some(hex) = &args.color {
        let rgb = Rgb::from_hex(hex).with_context(|| format!("bad --color '{hex}'"))?;
        return Ok(Some(rgb));
    }
    let Some(name) = &args.theme else {
        return Ok(None);
    };
    if let Some((rgb, _)) = config.theme(name) {
        debug!("theme '{name}' from config: {rgb}");
        return Ok(Some(rgb));
    }
    if let Some(theme) = builtin_theme(name) {
        debug!("builtin theme '{name}': {}", theme.base);
        return Ok(Some(theme.base));
    }
    Err(anyhow!("unknown theme '{name}' (try --list-themes)"))
}

// ─── Output ─────────────────────────────────────────────────────────────────

fn write_themes(out: &mut impl Write, config: &Config) -> io::Result<()> {
    for (name, entry) in &config.themes {
        writeln!(out, "{name:<12} {}  {}", entry.base, entry.description)?;
    }
    for theme in builtin_themes() {
        if config.theme(theme.name).is_some() {
            continue;
        }
        writeln!(out, "{:<12} {}  {}", theme.name, theme.base, theme.description)?;
    }
    Ok(())
}

/// Print the palette. With `roles` (from `--describe`) also print the
/// first color's hue family and what each position is for.
fn write_palette(out: &mut impl Write, palette: &Palette, roles: Option<&[Role]>) -> io::Result<()> {
    for color in palette {
        writeln!(out, "{color}")?;
    }
    let Some(roles) = roles else {
        return Ok(());
    };
    let Some(&first) = palette.first() else {
        return Ok(());
    };
    let family = HueFamily::of(first);
    writeln!(out)?;
    writeln!(out, "{first}: {family}")?;
    writeln!(out, "  {}", family.primary_impact())?;
    writeln!(out, "  {}", family.secondary_impact())?;
    writeln!(out)?;
    for (color, role) in palette.iter().zip(roles) {
        writeln!(out, "{color}  {role}: {}", role.usage())?;
    }
    Ok(())
}

// ─── Entry ──────────────────────────────────────────────────────────────────

fn run(args: &Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;

    // RUST_LOG wins, then --log-level, then the config file.
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    Builder::from_env(Env::default().default_filter_or(level)).init();

    let mut out = io::stdout().lock();

    if args.list_themes {
        write_themes(&mut out, &config)?;
        return Ok(());
    }

    let Some(rule) = args.rule else {
        bail!("no rule given");
    };
    let base = resolve_base(args, &config, rule)?;
    let params = config.defaults.clone().merge(&args.rule_params()?);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let palette = generate(base, rule, &params, &mut rng)?;
    info!("{rule}: {} colors", palette.len());
    let roles = args
        .describe
        .then(|| Role::assign(rule, params.resolve().scheme, palette.len()));
    write_palette(&mut out, &palette, roles.as_deref())?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("huekit: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
