//! Colors handed to external collaborators.
//!
//! Theming is the host's concern; sections only need to name a handful of
//! colors when they configure decorative layers.

use std::fmt;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
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
    /// Brand indigo.
    pub const PRIMARY: Self = Self::hex(0x6366_F1FF);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
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
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Formats as a CSS `rgba()` expression.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let color = Color::hex(0xFF00_00FF);
        assert!((color.r - 1.0).abs() < 0.01);
        assert!((color.g - 0.0).abs() < 0.01);
        assert!((color.b - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_css_display() {
        assert_eq!(Color::WHITE.with_alpha(0.5).to_string(), "rgba(255, 255, 255, 0.5)");
        assert_eq!(Color::TRANSPARENT.to_string(), "rgba(0, 0, 0, 0)");
    }
}
