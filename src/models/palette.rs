//! Color schemes and the four-color palettes they map to.

use std::fmt;

use super::RgbColor;

/// Named color scheme offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSchemeKey {
    /// Wood tones
    #[default]
    Natural,
    /// Grays
    Modern,
    /// Blue, teal and tomato
    Vibrant,
}

/// Four colors applied uniformly to the current illustration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteDescriptor {
    /// Main body color
    pub primary: RgbColor,
    /// Frames, dividers and secondary panels
    pub secondary: RgbColor,
    /// Highlights: blankets, cushions, shelf edges
    pub accent: RgbColor,
    /// Soft surfaces: mattress, drawer fronts, handles
    pub light: RgbColor,
}

impl PaletteDescriptor {
    /// The palette colors in (primary, secondary, accent, light) order.
    #[must_use]
    pub const fn colors(&self) -> [RgbColor; 4] {
        [self.primary, self.secondary, self.accent, self.light]
    }
}

const NATURAL: PaletteDescriptor = PaletteDescriptor {
    primary: RgbColor::new(0xD2, 0xB4, 0x8C),
    secondary: RgbColor::new(0xA6, 0x7C, 0x52),
    accent: RgbColor::new(0x8B, 0x45, 0x13),
    light: RgbColor::new(0xF5, 0xF5, 0xDC),
};

const MODERN: PaletteDescriptor = PaletteDescriptor {
    primary: RgbColor::new(0x80, 0x80, 0x80),
    secondary: RgbColor::new(0x50, 0x50, 0x50),
    accent: RgbColor::new(0x30, 0x30, 0x30),
    light: RgbColor::new(0xE0, 0xE0, 0xE0),
};

const VIBRANT: PaletteDescriptor = PaletteDescriptor {
    primary: RgbColor::new(0x46, 0x82, 0xB4),
    secondary: RgbColor::new(0x20, 0xB2, 0xAA),
    accent: RgbColor::new(0xFF, 0x63, 0x47),
    light: RgbColor::new(0xF0, 0xF8, 0xFF),
};

impl ColorSchemeKey {
    /// All schemes in display order.
    pub const ALL: [Self; 3] = [Self::Natural, Self::Modern, Self::Vibrant];

    /// Lower-case identifier ("natural", "modern", "vibrant").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Modern => "modern",
            Self::Vibrant => "vibrant",
        }
    }

    /// Capitalized button label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Natural => "Natural",
            Self::Modern => "Modern",
            Self::Vibrant => "Vibrant",
        }
    }

    /// Returns the palette for this scheme.
    #[must_use]
    pub const fn palette(&self) -> PaletteDescriptor {
        match self {
            Self::Natural => NATURAL,
            Self::Modern => MODERN,
            Self::Vibrant => VIBRANT,
        }
    }

    /// The following scheme in display order, wrapping around.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Natural => Self::Modern,
            Self::Modern => Self::Vibrant,
            Self::Vibrant => Self::Natural,
        }
    }
}

impl fmt::Display for ColorSchemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
