//! Colors for the warm-orange-on-black portfolio palette.

use serde::Deserialize;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Page background (#0a0a0a).
    pub const BACKGROUND: Self = Self::hex(0x0A0A_0AFF);
    /// Accent orange (#ff8c32): particles, glow, links.
    pub const ACCENT: Self = Self::hex(0xFF8C_32FF);
    /// Orange 600 (#ea580c).
    pub const ORANGE_600: Self = Self::hex(0xEA58_0CFF);
    /// Orange 400 (#fb923c).
    pub const ORANGE_400: Self = Self::hex(0xFB92_3CFF);
    /// Orange 700 (#c2410c).
    pub const ORANGE_700: Self = Self::hex(0xC241_0CFF);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Formats as a CSS `rgba(...)` string with 8-bit channels.
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            self.a
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_hex() {
        let c = Color::ACCENT;
        assert!((c.r - 1.0).abs() < 0.01);
        assert!((c.g - 140.0 / 255.0).abs() < 0.01);
        assert!((c.b - 50.0 / 255.0).abs() < 0.01);
        assert!((c.a - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_css_output() {
        assert_eq!(Color::ACCENT.with_alpha(0.8).to_css(), "rgba(255, 140, 50, 0.8)");
    }
}
