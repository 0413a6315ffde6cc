//! RGBA colors and the palette used by the scenes

use serde::{Deserialize, Serialize};

/// 8-bit sRGB color with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized sRGB components
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Normalized linear components (alpha is already linear)
    pub fn to_linear(self) -> [f32; 4] {
        let [r, g, b, a] = self.to_f32();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Named colors
pub mod palette {
    use super::Color;

    pub const RAYWHITE: Color = Color::rgb(245, 245, 245);
    pub const LIGHTGRAY: Color = Color::rgb(200, 200, 200);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const YELLOW: Color = Color::rgb(253, 249, 0);
    pub const BROWN: Color = Color::rgb(127, 106, 79);
    pub const BEIGE: Color = Color::rgb(211, 176, 131);
    pub const PURPLE: Color = Color::rgb(200, 122, 255);
    pub const PINK: Color = Color::rgb(255, 109, 194);
    pub const GREEN: Color = Color::rgb(0, 228, 48);

    /// Colors a ball may be spawned with
    pub const BALLS: [Color; 8] = [BLUE, RED, YELLOW, BROWN, BEIGE, PURPLE, PINK, GREEN];
}
