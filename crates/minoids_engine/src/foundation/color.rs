//! RGBA color type and palette

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Create a color from its channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Same color with a different alpha
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[allow(missing_docs)]
impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RAYWHITE: Self = Self::rgb(245, 245, 245);
    pub const GRAY: Self = Self::rgb(130, 130, 130);
    pub const DARKGRAY: Self = Self::rgb(80, 80, 80);
    pub const RED: Self = Self::rgb(230, 41, 55);
    pub const ORANGE: Self = Self::rgb(255, 161, 0);
    pub const DARKGREEN: Self = Self::rgb(0, 117, 44);
    pub const DARKBLUE: Self = Self::rgb(0, 82, 172);
    pub const BROWN: Self = Self::rgb(127, 106, 79);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
