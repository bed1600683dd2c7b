// Simple color struct for the particle fill, created from RGB bytes and an
// alpha fraction, or from an unsigned 32 representing RRGGBBAA

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Color {
    // Translucent blue used when no fill is configured
    pub const DEFAULT_FILL: Color = Color {
        r: 0,
        g: 123,
        b: 255,
        alpha: 0.3,
    };

    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Color {
        Color { r, g, b, alpha }
    }

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color {
            r,
            g,
            b,
            alpha: a as f64 / 255.0,
        }
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.alpha)
    }

    // CSS string accepted by CanvasRenderingContext2d.fillStyle
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::DEFAULT_FILL
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}
