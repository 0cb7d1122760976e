//! Rule dispatch — one entry point from a rule name and named parameters
//! to an ordered palette.
//!
//! Parameter defaults are filled here and nowhere else. A missing
//! parameter takes its documented default. A bad rule name or a bad
//! parameter value is an error.

use std::fmt;
use std::str::FromStr;

use huekit_color::Rgb;
use log::{debug, trace};
use rand::Rng;
use serde::Deserialize;

use crate::error::PaletteError;
use crate::rules::{
    DEFAULT_ANGLE, DEFAULT_VARIATIONS, MAX_VARIATIONS, analogous, complementary, hue_choice, monochromatic,
    tetradic, triadic,
};
use crate::temperature::{Scheme, Temperature, temperature_palette};
use crate::vibrancy::Style;

/// An ordered list of colors. Order carries meaning: when a rule echoes
/// the base color it comes first.
pub type Palette = Vec<Rgb>;

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// The harmony rules a caller can ask for by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `[base, complement]`.
    Complementary,
    /// `[base, +angle, -angle]`.
    Analogous,
    /// `[base, +120°, +240°]`.
    Triadic,
    /// Four hues a quarter turn apart, base hue first.
    Tetradic,
    /// `num_variations` lightness shades.
    Monochromatic,
    /// A synthesized base at `hue` degrees plus its analogous pair.
    Hue,
    /// A random warm/cool base plus the chosen `scheme`.
    Temperature,
    /// `[base, complement]` with vibrancy taken from `style`.
    Vibrancy,
}

impl Rule {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
            Self::Hue => "hue",
            Self::Temperature => "temperature",
            Self::Vibrancy => "vibrancy",
        }
    }

    /// All rules, in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary, Self::Analogous, Self::Triadic, Self::Tetradic,
            Self::Monochromatic, Self::Hue, Self::Temperature, Self::Vibrancy,
        ]
    }

    /// Whether the rule derives from a caller-supplied base color. Hue and
    /// temperature synthesize their own.
    #[must_use]
    pub const fn needs_base(self) -> bool {
        !matches!(self, Self::Hue | Self::Temperature)
    }
}

impl FromStr for Rule {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .find(|rule| rule.name() == lower)
            .copied()
            .ok_or_else(|| PaletteError::UnknownRule(s.to_owned()))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Named parameters as a caller supplies them. Every field is optional;
/// [`RuleParams::resolve`] fills the gaps.
///
/// Deserializes from a flat table (`vibrancy = 0.8`, `style = "quiet"`),
/// which is how config files carry defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleParams {
    /// Analogous spread in degrees.
    pub angle: Option<f64>,
    /// Saturation multiplier for derived colors.
    pub vibrancy: Option<f64>,
    /// Anchor hue in degrees for the `hue` rule.
    pub hue: Option<f64>,
    pub temperature: Option<Temperature>,
    /// Shade count for the `monochromatic` rule.
    pub num_variations: Option<usize>,
    pub style: Option<Style>,
    /// Scheme the `temperature` rule delegates to.
    pub scheme: Option<Scheme>,
}

/// Parameters with every default applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedParams {
    pub angle: f64,
    pub vibrancy: f64,
    pub hue: f64,
    pub temperature: Temperature,
    pub num_variations: usize,
    pub style: Style,
    pub scheme: Scheme,
}

impl Default for ResolvedParams {
    fn default() -> Self {
        RuleParams::default().resolve()
    }
}

impl RuleParams {
    /// Fill one parameter from a string pair, the way a menu or a
    /// `key=value` argument would supply it.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownParameter`] for a name no rule reads, and
    /// [`PaletteError::InvalidParameter`] for a value that does not parse.
    /// Numbers must be finite.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), PaletteError> {
        trace!("param {name} = {value:?}");
        match name.trim().to_ascii_lowercase().as_str() {
            "angle" => self.angle = Some(parse_number("angle", value)?),
            "vibrancy" => self.vibrancy = Some(parse_number("vibrancy", value)?),
            "hue" => self.hue = Some(parse_number("hue", value)?),
            "temperature" => self.temperature = Some(value.parse()?),
            "num_variations" | "variations" => {
                self.num_variations = Some(
                    value
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .filter(|n| *n <= MAX_VARIATIONS)
                        .ok_or_else(|| PaletteError::InvalidParameter {
                            name: "num_variations",
                            value: value.to_owned(),
                        })?,
                );
            }
            "style" => self.style = Some(value.parse()?),
            "scheme" => self.scheme = Some(value.parse()?),
            _ => return Err(PaletteError::UnknownParameter(name.to_owned())),
        }
        Ok(())
    }

    /// Overlay `other` on top of `self`: any parameter `other` sets wins.
    #[must_use]
    pub fn merge(self, other: &Self) -> Self {
        Self {
            angle: other.angle.or(self.angle),
            vibrancy: other.vibrancy.or(self.vibrancy),
            hue: other.hue.or(self.hue),
            temperature: other.temperature.or(self.temperature),
            num_variations: other.num_variations.or(self.num_variations),
            style: other.style.or(self.style),
            scheme: other.scheme.or(self.scheme),
        }
    }

    /// Check values that bypassed [`RuleParams::set`], such as typed
    /// command-line flags or a config table.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidParameter`] for a non-finite number or a
    /// shade count above [`MAX_VARIATIONS`].
    pub fn validate(&self) -> Result<(), PaletteError> {
        for (name, value) in [("angle", self.angle), ("vibrancy", self.vibrancy), ("hue", self.hue)] {
            if let Some(v) = value.filter(|v| !v.is_finite()) {
                return Err(PaletteError::InvalidParameter { name, value: v.to_string() });
            }
        }
        if let Some(n) = self.num_variations.filter(|n| *n > MAX_VARIATIONS) {
            return Err(PaletteError::InvalidParameter { name: "num_variations", value: n.to_string() });
        }
        Ok(())
    }

    /// Apply the documented defaults: angle 30, vibrancy 1.0, hue 0,
    /// temperature warm, 5 variations, style loud, scheme analogous.
    #[must_use]
    pub fn resolve(&self) -> ResolvedParams {
        ResolvedParams {
            angle: self.angle.unwrap_or(DEFAULT_ANGLE),
            vibrancy: self.vibrancy.unwrap_or(1.0),
            hue: self.hue.unwrap_or(0.0),
            temperature: self.temperature.unwrap_or_default(),
            num_variations: self.num_variations.unwrap_or(DEFAULT_VARIATIONS),
            style: self.style.unwrap_or_default(),
            scheme: self.scheme.unwrap_or_default(),
        }
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, PaletteError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PaletteError::InvalidParameter { name, value: value.to_owned() })
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Run `rule` with `params` and return the ordered palette.
///
/// Rules that echo the base put it first, unmodified; vibrancy only
/// touches derived colors. `rng` is only drawn from by
/// [`Rule::Temperature`].
///
/// # Errors
///
/// [`PaletteError::MissingBase`] when the rule needs a base color and
/// `base` is `None`, and [`PaletteError::InvalidParameter`] when
/// [`RuleParams::validate`] fails.
pub fn generate<R: Rng + ?Sized>(
    base: Option<Rgb>,
    rule: Rule,
    params: &RuleParams,
    rng: &mut R,
) -> Result<Palette, PaletteError> {
    params.validate()?;
    let p = params.resolve();
    debug!("{rule} palette from {base:?} with {p:?}");

    let base = match base {
        Some(base) => base,
        None if rule.needs_base() => return Err(PaletteError::MissingBase(rule.name())),
        // Hue and temperature never read it.
        None => Rgb::BLACK,
    };

    let palette = match rule {
        Rule::Complementary => vec![base, complementary(base, p.vibrancy)],
        Rule::Analogous => {
            let [plus, minus] = analogous(base, p.angle, p.vibrancy);
            vec![base, plus, minus]
        }
        Rule::Triadic => {
            let [a, b] = triadic(base, p.vibrancy);
            vec![base, a, b]
        }
        Rule::Tetradic => tetradic(base, p.vibrancy).to_vec(),
        Rule::Monochromatic => monochromatic(base, p.num_variations),
        Rule::Hue => {
            let anchor = hue_choice(p.hue, p.vibrancy);
            let [plus, minus] = analogous(anchor, p.angle, p.vibrancy);
            vec![anchor, plus, minus]
        }
        Rule::Temperature => temperature_palette(p.temperature, p.scheme, p.vibrancy, rng),
        Rule::Vibrancy => vec![base, complementary(base, p.style.vibrancy())],
    };
    Ok(palette)
}

/// String-level entry point: parse the rule name and base hex, then
/// [`generate`].
///
/// # Errors
///
/// [`PaletteError::UnknownRule`] for an unrecognized rule,
/// [`PaletteError::InvalidColor`] for a malformed hex, and
/// [`PaletteError::MissingBase`] as in [`generate`].
pub fn generate_from_hex<R: Rng + ?Sized>(
    base: Option<&str>,
    rule: &str,
    params: &RuleParams,
    rng: &mut R,
) -> Result<Palette, PaletteError> {
    let rule: Rule = rule.parse()?;
    let base = base.map(Rgb::from_hex).transpose()?;
    generate(base, rule, params, rng)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn run(base: &str, rule: &str, params: &RuleParams) -> Vec<String> {
        generate_from_hex(Some(base), rule, params, &mut rng())
            .unwrap()
            .iter()
            .map(|c| c.to_hex())
            .collect()
    }

    fn params(pairs: &[(&str, &str)]) -> RuleParams {
        let mut p = RuleParams::default();
        for (k, v) in pairs {
            p.set(k, v).unwrap();
        }
        p
    }

    // ── Rule names ───────────────────────────────────────────────────────

    #[test]
    fn every_rule_parses_from_its_name() {
        for rule in Rule::all() {
            assert_eq!(rule.name().parse::<Rule>().unwrap(), *rule);
        }
        assert_eq!("Triadic".parse::<Rule>().unwrap(), Rule::Triadic);
    }

    #[test]
    fn unknown_rule_is_an_error() {
        assert_eq!("sepia".parse::<Rule>(), Err(PaletteError::UnknownRule("sepia".to_owned())));
        assert!(matches!(
            generate_from_hex(Some("#1E90FF"), "", &RuleParams::default(), &mut rng()),
            Err(PaletteError::UnknownRule(_))
        ));
    }

    // ── Parameters ───────────────────────────────────────────────────────

    #[test]
    fn defaults() {
        let p = RuleParams::default().resolve();
        assert_eq!(
            p,
            ResolvedParams {
                angle: 30.0,
                vibrancy: 1.0,
                hue: 0.0,
                temperature: Temperature::Warm,
                num_variations: 5,
                style: Style::Loud,
                scheme: Scheme::Analogous,
            }
        );
    }

    #[test]
    fn set_parses_each_parameter() {
        let p = params(&[
            ("angle", "45"),
            ("vibrancy", "0.5"),
            ("hue", "200"),
            ("temperature", "cool"),
            ("num_variations", "7"),
            ("style", "quiet"),
            ("scheme", "triadic"),
        ])
        .resolve();
        assert_eq!(
            p,
            ResolvedParams {
                angle: 45.0,
                vibrancy: 0.5,
                hue: 200.0,
                temperature: Temperature::Cool,
                num_variations: 7,
                style: Style::Quiet,
                scheme: Scheme::Triadic,
            }
        );
    }

    #[test]
    fn set_rejects_unknown_name() {
        let mut p = RuleParams::default();
        assert_eq!(p.set("shade", "1"), Err(PaletteError::UnknownParameter("shade".to_owned())));
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut p = RuleParams::default();
        assert!(matches!(p.set("angle", "wide"), Err(PaletteError::InvalidParameter { name: "angle", .. })));
        assert!(matches!(p.set("vibrancy", "NaN"), Err(PaletteError::InvalidParameter { name: "vibrancy", .. })));
        assert!(matches!(p.set("vibrancy", "inf"), Err(PaletteError::InvalidParameter { name: "vibrancy", .. })));
        assert!(matches!(
            p.set("num_variations", "-1"),
            Err(PaletteError::InvalidParameter { name: "num_variations", .. })
        ));
        assert!(matches!(p.set("style", "mild"), Err(PaletteError::InvalidParameter { name: "style", .. })));
        assert_eq!(p, RuleParams::default());
    }

    #[test]
    fn set_caps_variations() {
        let mut p = RuleParams::default();
        assert!(p.set("variations", "100").is_ok());
        assert!(matches!(
            p.set("num_variations", "101"),
            Err(PaletteError::InvalidParameter { name: "num_variations", .. })
        ));
        assert!(matches!(
            p.set("num_variations", &usize::MAX.to_string()),
            Err(PaletteError::InvalidParameter { name: "num_variations", .. })
        ));
    }

    #[test]
    fn generate_rejects_non_finite_fields() {
        let base = Some(Rgb::new(0x1E, 0x90, 0xFF));
        let cases = [
            (RuleParams { hue: Some(f64::INFINITY), ..RuleParams::default() }, Rule::Hue, "hue"),
            (RuleParams { vibrancy: Some(f64::NAN), ..RuleParams::default() }, Rule::Complementary, "vibrancy"),
            (RuleParams { angle: Some(f64::NEG_INFINITY), ..RuleParams::default() }, Rule::Analogous, "angle"),
        ];
        for (p, rule, field) in cases {
            match generate(base, rule, &p, &mut rng()) {
                Err(PaletteError::InvalidParameter { name, .. }) => assert_eq!(name, field),
                other => panic!("{field}: expected InvalidParameter, got {other:?}"),
            }
        }
    }

    #[test]
    fn generate_rejects_huge_variation_count() {
        let p = RuleParams { num_variations: Some(usize::MAX), ..RuleParams::default() };
        assert!(matches!(
            generate(Some(Rgb::new(0x80, 0x80, 0x80)), Rule::Monochromatic, &p, &mut rng()),
            Err(PaletteError::InvalidParameter { name: "num_variations", .. })
        ));
        assert_eq!(RuleParams::default().validate(), Ok(()));
    }

    #[test]
    fn merge_prefers_overlay() {
        let base = params(&[("vibrancy", "0.8"), ("angle", "20")]);
        let overlay = params(&[("angle", "40")]);
        let merged = base.merge(&overlay).resolve();
        assert!((merged.angle - 40.0).abs() < f64::EPSILON);
        assert!((merged.vibrancy - 0.8).abs() < f64::EPSILON);
    }

    // ── Palettes ─────────────────────────────────────────────────────────

    #[test]
    fn complementary_echoes_base_first() {
        assert_eq!(run("#1E90FF", "complementary", &RuleParams::default()), ["#1E90FF", "#FF8C1E"]);
    }

    #[test]
    fn base_is_echoed_verbatim_even_when_muted() {
        // Lowercase input, muted vibrancy: base comes back as typed, uppercased.
        let out = run("1e90ff", "complementary", &params(&[("vibrancy", "0.5")]));
        assert_eq!(out, ["#1E90FF", "#C68D56"]);
    }

    #[test]
    fn analogous_uses_angle() {
        assert_eq!(run("#1E90FF", "analogous", &RuleParams::default()), ["#1E90FF", "#1E1FFF", "#1EFFFD"]);
        assert_eq!(
            run("#1E90FF", "analogous", &params(&[("angle", "45"), ("vibrancy", "1.2")])),
            ["#1E90FF", "#541EFF", "#1EFFC5"]
        );
    }

    #[test]
    fn triadic_of_red() {
        assert_eq!(run("#FF0000", "triadic", &RuleParams::default()), ["#FF0000", "#00FF00", "#0000FF"]);
    }

    #[test]
    fn tetradic_is_four_without_echo() {
        assert_eq!(
            run("#1E90FF", "tetradic", &RuleParams::default()),
            ["#1E90FF", "#FD1EFF", "#FF8C1E", "#1FFF1E"]
        );
    }

    #[test]
    fn monochromatic_honors_variations_and_ignores_vibrancy() {
        let out = run("#808080", "monochromatic", &params(&[("vibrancy", "0.1")]));
        assert_eq!(out, ["#4D4D4D", "#666666", "#808080", "#999999", "#B3B3B3"]);
        assert_eq!(run("#1E90FF", "monochromatic", &params(&[("num_variations", "3")])).len(), 3);
    }

    #[test]
    fn hue_synthesizes_anchor_and_neighbors() {
        let out = run("#000000", "hue", &RuleParams::default());
        assert_eq!(out, ["#FF0000", "#FF7F00", "#FF007F"]);
        let out = run("#000000", "hue", &params(&[("hue", "90"), ("angle", "45")]));
        assert_eq!(out, ["#7FFF00", "#00FF40", "#FFBF00"]);
    }

    #[test]
    fn hue_and_temperature_need_no_base() {
        let p = RuleParams::default();
        assert_eq!(generate(None, Rule::Hue, &p, &mut rng()).unwrap().len(), 3);
        assert_eq!(generate(None, Rule::Temperature, &p, &mut rng()).unwrap().len(), 3);
    }

    #[test]
    fn other_rules_need_a_base() {
        for rule in Rule::all().iter().filter(|r| r.needs_base()) {
            assert_eq!(
                generate(None, *rule, &RuleParams::default(), &mut rng()),
                Err(PaletteError::MissingBase(rule.name()))
            );
        }
    }

    #[test]
    fn temperature_respects_scheme_and_band() {
        let p = params(&[("temperature", "cool"), ("scheme", "complementary")]);
        let out = generate(None, Rule::Temperature, &p, &mut rng()).unwrap();
        assert_eq!(out.len(), 2);
        let deg = out[0].to_hls().degrees();
        assert!((179.0..=301.0).contains(&deg), "cool base at {deg}°");
    }

    #[test]
    fn temperature_is_reproducible_with_a_seed() {
        let p = params(&[("temperature", "warm")]);
        let a = generate(None, Rule::Temperature, &p, &mut rng()).unwrap();
        let b = generate(None, Rule::Temperature, &p, &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn vibrancy_rule_uses_style() {
        assert_eq!(run("#1E90FF", "vibrancy", &params(&[("style", "quiet")])), ["#1E90FF", "#C68D56"]);
        assert_eq!(run("#1E90FF", "vibrancy", &RuleParams::default()), ["#1E90FF", "#FF8C1E"]);
    }

    #[test]
    fn vibrancy_rule_ignores_vibrancy_param() {
        let out = run("#1E90FF", "vibrancy", &params(&[("vibrancy", "0.0")]));
        assert_eq!(out, ["#1E90FF", "#FF8C1E"]);
    }

    #[test]
    fn invalid_hex_surfaces() {
        assert!(matches!(
            generate_from_hex(Some("bad"), "triadic", &RuleParams::default(), &mut rng()),
            Err(PaletteError::InvalidColor(_))
        ));
    }

    #[test]
    fn output_format_is_uppercase_hashed() {
        for rule in Rule::all() {
            for color in run("#8b4513", rule.name(), &RuleParams::default()) {
                assert_eq!(color.len(), 7);
                assert!(color.starts_with('#'));
                assert!(color[1..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)), "{color}");
            }
        }
    }
}
