//! What each palette position is for.
//!
//! Every rule returns colors in a fixed order, so a position maps to a
//! design role (primary, accent, neighbor, shade). Like the hue families,
//! this is descriptive text for front ends and never feeds back into
//! generation.

use std::fmt;

use crate::dispatch::Rule;
use crate::temperature::Scheme;

/// The job a palette color does in a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    Complementary,
    AnalogousFirst,
    AnalogousSecond,
    TriadicFirst,
    TriadicSecond,
    /// A quarter turn from the primary, either way.
    Square,
    LightShade,
    DarkShade,
}

impl Role {
    /// Roles for each position of a `len`-color palette from `rule`.
    ///
    /// `scheme` only matters for [`Rule::Temperature`], whose shape follows
    /// the delegated scheme.
    #[must_use]
    pub fn assign(rule: Rule, scheme: Scheme, len: usize) -> Vec<Self> {
        use Role::{
            AnalogousFirst, AnalogousSecond, Complementary, DarkShade, LightShade, Primary,
            Square, TriadicFirst, TriadicSecond,
        };

        let fixed: &[Self] = match rule {
            Rule::Complementary | Rule::Vibrancy => &[Primary, Complementary],
            Rule::Analogous | Rule::Hue => &[Primary, AnalogousFirst, AnalogousSecond],
            Rule::Triadic => &[Primary, TriadicFirst, TriadicSecond],
            Rule::Tetradic => &[Primary, Square, Complementary, Square],
            Rule::Temperature => match scheme {
                Scheme::Complementary => &[Primary, Complementary],
                Scheme::Triadic => &[Primary, TriadicFirst, TriadicSecond],
                Scheme::Analogous => &[Primary, AnalogousFirst, AnalogousSecond],
            },
            Rule::Monochromatic => {
                let middle = len / 2;
                return (0..len)
                    .map(|i| match i.cmp(&middle) {
                        std::cmp::Ordering::Less => DarkShade,
                        std::cmp::Ordering::Equal => Primary,
                        std::cmp::Ordering::Greater => LightShade,
                    })
                    .collect();
            }
        };
        fixed.iter().copied().take(len).collect()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Complementary => "complementary",
            Self::AnalogousFirst => "analogous 1",
            Self::AnalogousSecond => "analogous 2",
            Self::TriadicFirst => "triadic 1",
            Self::TriadicSecond => "triadic 2",
            Self::Square => "square",
            Self::LightShade => "light shade",
            Self::DarkShade => "dark shade",
        }
    }

    /// Where the color tends to be used.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Primary => "The main brand identifier: logo, key headers, anything that carries the core character.",
            Self::Complementary => "Opposite on the wheel. Accents and calls to action that must pop against the primary.",
            Self::AnalogousFirst => "A neighbor of the primary for cohesive designs: backgrounds, icons, subtle highlights.",
            Self::AnalogousSecond => "The other neighbor. Sidebars, alternate backgrounds, supporting text blocks.",
            Self::TriadicFirst => "One of an evenly spaced trio. Adds energy to headings, buttons, promotional labels.",
            Self::TriadicSecond => "The rest of the triad. Interactive elements, hover states, secondary calls to action.",
            Self::Square => "A quarter turn away. Balances the complementary pair in charts and categorical color.",
            Self::LightShade => "A softer tint of the hue. Large areas and readable backgrounds with a gentle brand touch.",
            Self::DarkShade => "A deeper tone for contrast. Footers, header bars, bold text overlays.",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
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

    use crate::dispatch::{RuleParams, generate};
    use huekit_color::Rgb;

    #[test]
    fn one_role_per_color_for_every_rule() {
        let base = Some(Rgb::new(0x8B, 0x45, 0x13));
        for scheme in [Scheme::Complementary, Scheme::Triadic, Scheme::Analogous] {
            let params = RuleParams { scheme: Some(scheme), ..RuleParams::default() };
            for &rule in Rule::all() {
                let palette = generate(base, rule, &params, &mut StdRng::seed_from_u64(7)).unwrap();
                let roles = Role::assign(rule, scheme, palette.len());
                assert_eq!(roles.len(), palette.len(), "{rule} / {scheme}");
                assert_eq!(roles.iter().filter(|r| **r == Role::Primary).count(), 1, "{rule} / {scheme}");
            }
        }
    }

    #[test]
    fn tetradic_pairs_complement_with_squares() {
        assert_eq!(
            Role::assign(Rule::Tetradic, Scheme::default(), 4),
            [Role::Primary, Role::Square, Role::Complementary, Role::Square]
        );
    }

    #[test]
    fn temperature_follows_scheme() {
        assert_eq!(
            Role::assign(Rule::Temperature, Scheme::Triadic, 3),
            [Role::Primary, Role::TriadicFirst, Role::TriadicSecond]
        );
        assert_eq!(
            Role::assign(Rule::Temperature, Scheme::Complementary, 2),
            [Role::Primary, Role::Complementary]
        );
    }

    #[test]
    fn monochromatic_shades_around_the_base() {
        use Role::{DarkShade, LightShade, Primary};
        assert_eq!(
            Role::assign(Rule::Monochromatic, Scheme::default(), 5),
            [DarkShade, DarkShade, Primary, LightShade, LightShade]
        );
        // Even counts lean dark, matching the lightness offsets.
        assert_eq!(
            Role::assign(Rule::Monochromatic, Scheme::default(), 4),
            [DarkShade, DarkShade, Primary, LightShade]
        );
        assert!(Role::assign(Rule::Monochromatic, Scheme::default(), 0).is_empty());
    }

    #[test]
    fn every_role_has_usage_text() {
        let all = [
            Role::Primary, Role::Complementary, Role::AnalogousFirst, Role::AnalogousSecond,
            Role::TriadicFirst, Role::TriadicSecond, Role::Square, Role::LightShade,
            Role::DarkShade,
        ];
        for role in all {
            assert!(!role.usage().is_empty(), "{role}");
        }
    }
}
