//! Hue families and the brand associations commonly attached to them.
//!
//! Purely descriptive: buckets a color's hue into a named family so a front
//! end can explain what a palette's anchor color tends to convey.

use std::fmt;

use huekit_color::Rgb;

/// A named band of the color wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HueFamily {
    /// [0°, 20°)
    Red,
    /// [20°, 50°)
    Orange,
    /// [50°, 70°)
    Yellow,
    /// [70°, 170°)
    Green,
    /// [170°, 250°)
    Blue,
    /// [250°, 290°)
    Purple,
    /// [290°, 330°)
    Pink,
    /// [330°, 360°)
    Crimson,
    /// No saturation, so no hue to speak of.
    Neutral,
}

impl HueFamily {
    /// Classify a color by its HLS hue.
    #[must_use]
    pub fn of(color: Rgb) -> Self {
        let hls = color.to_hls();
        if hls.is_achromatic() {
            return Self::Neutral;
        }
        match hls.degrees() {
            d if d < 20.0 => Self::Red,
            d if d < 50.0 => Self::Orange,
            d if d < 70.0 => Self::Yellow,
            d if d < 170.0 => Self::Green,
            d if d < 250.0 => Self::Blue,
            d if d < 290.0 => Self::Purple,
            d if d < 330.0 => Self::Pink,
            _ => Self::Crimson,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Crimson => "crimson",
            Self::Neutral => "neutral",
        }
    }

    /// The main association.
    #[must_use]
    pub const fn primary_impact(self) -> &'static str {
        match self {
            Self::Red => "Intensity, passion and energy. Draws attention fast; common for bold branding and urgent calls to action, and known to stimulate appetite.",
            Self::Orange => "Enthusiasm, optimism and creativity. Adds fun or adventure and encourages confidence.",
            Self::Yellow => "Cheerfulness, friendliness and clarity. Catches the eye quickly but tires it when overused.",
            Self::Green => "Growth, balance and nature. Reads as tranquil or environmentally aware; common in health and outdoor brands.",
            Self::Blue => "Trust, stability and calm. A staple for brands that want to look reliable, especially in technology and finance.",
            Self::Purple => "Luxury, creativity and spirituality, mixing the calm of blue with the energy of red.",
            Self::Pink => "Romance, youthfulness and edgy flair. Frequent in fashion, beauty and playful brands.",
            Self::Crimson => "Power, passion and refinement. Suits dramatic or luxurious statements.",
            Self::Neutral => "Restraint and neutrality. Grays and near-whites let surrounding accents carry the message.",
        }
    }

    /// A secondary nuance or caveat.
    #[must_use]
    pub const fn secondary_impact(self) -> &'static str {
        match self {
            Self::Red => "Overuse can read as aggressive or impulsive; in small doses it signals strength and urgency.",
            Self::Orange => "Feels approachable, though heavy saturation can look unprofessional or overwhelming.",
            Self::Yellow => "Also signals caution. Toned down, it brings warmth and accessibility.",
            Self::Green => "Deeper greens suggest wealth and stability; very bright greens drift toward neon and lose their natural feel.",
            Self::Blue => "Light blues evoke freedom; dark blues look authoritative but can feel conservative or cold.",
            Self::Purple => "Lavenders lean delicate and romantic; very dark purples suggest opulence or mystery.",
            Self::Pink => "Hot pink excites but can overwhelm; softer pinks imply tenderness and compassion.",
            Self::Crimson => "Can also lean toward romance or emotional intensity; cultural readings of red vary widely.",
            Self::Neutral => "Too much gray can feel flat or corporate; pair it with at least one saturated accent.",
        }
    }
}

impl fmt::Display for HueFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
