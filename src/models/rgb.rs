//! RGB color values used by palettes and the illustration.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_lossless)]

use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure white, used for the bed pillow.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure black, used for the desk monitor screen.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use moduliving::models::RgbColor;
    ///
    /// let color = RgbColor::new(0x46, 0x82, 0xB4);
    /// assert_eq!(color.to_hex(), "#4682B4");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Composites this color over `under` with the given opacity.
    ///
    /// `alpha` is clamped to 0.0-1.0; 1.0 returns `self`, 0.0 returns `under`.
    ///
    /// # Examples
    ///
    /// ```
    /// use moduliving::models::RgbColor;
    ///
    /// let red = RgbColor::new(255, 0, 0);
    /// let blended = red.blend(RgbColor::new(0, 0, 255), 0.5);
    /// assert_eq!(blended, RgbColor::new(128, 0, 128));
    /// ```
    #[must_use]
    pub fn blend(&self, under: Self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |over: u8, under: u8| -> u8 {
            f32::from(over)
                .mul_add(alpha, f32::from(under) * (1.0 - alpha))
                .round() as u8
        };
        Self {
            r: mix(self.r, under.r),
            g: mix(self.g, under.g),
            b: mix(self.b, under.b),
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
