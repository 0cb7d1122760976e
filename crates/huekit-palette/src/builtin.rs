//! Named theme keywords — ready-made base colors.
//!
//! A keyword is just a base color with a short mood note. The rule engine
//! never reads this table; callers look a keyword up and pass its base on.

use huekit_color::Rgb;

/// A named base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeKeyword {
    pub name: &'static str,
    pub base: Rgb,
    pub description: &'static str,
}

const fn kw(name: &'static str, base: Rgb, description: &'static str) -> ThemeKeyword {
    ThemeKeyword { name, base, description }
}

const THEMES: [ThemeKeyword; 14] = [
    kw("ocean", Rgb::new(0x1E, 0x90, 0xFF), "Calm, trustworthy, and serene (cool blue)."),
    kw("woodland", Rgb::new(0x22, 0x8B, 0x22), "Natural and earthy with growth (forest green)."),
    kw("city", Rgb::new(0x70, 0x80, 0x90), "Modern and sophisticated (slate gray)."),
    kw("sunset", Rgb::new(0xFF, 0x45, 0x00), "Energetic and passionate (vivid orange-red)."),
    kw("vintage", Rgb::new(0x8B, 0x45, 0x13), "Classic and reliable (rich brown)."),
    kw("desert", Rgb::new(0xED, 0xC9, 0xAF), "Warm and sandy (light tan) evoking arid landscapes."),
    kw("midnight", Rgb::new(0x19, 0x19, 0x70), "Mysterious and deep (midnight blue)."),
    kw("pastel", Rgb::new(0xFF, 0xD1, 0xDC), "Soft and gentle (pastel pink) for a calming feel."),
    kw("neon", Rgb::new(0x39, 0xFF, 0x14), "Bold and vibrant (neon green) for an energetic vibe."),
    kw("tropical", Rgb::new(0xFF, 0x63, 0x47), "Lively and warm (tomato red) reminiscent of tropical sunsets."),
    kw("romantic", Rgb::new(0xFF, 0x69, 0xB4), "Playful and affectionate (hot pink)."),
    kw("modern", Rgb::new(0x2F, 0x4F, 0x4F), "Sleek and minimal (dark slate gray)."),
    kw("industrial", Rgb::new(0x69, 0x69, 0x69), "Utilitarian and robust (dim gray)."),
    kw("playful", Rgb::new(0xFF, 0x14, 0x93), "Fun and energetic (deep pink)."),
];

/// Look up a builtin theme keyword (case-insensitive).
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<ThemeKeyword> {
    let lower = name.trim().to_ascii_lowercase();
    THEMES.iter().find(|t| t.name == lower).copied()
}

/// All builtin theme keywords, in table order.
#[must_use]
pub const fn builtin_themes() -> &'static [ThemeKeyword] {
    &THEMES
}

/// List all builtin theme names.
#[must_use]
pub fn builtin_names() -> Vec<&'static str> {
    THEMES.iter().map(|t| t.name).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
