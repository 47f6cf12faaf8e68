//! Pen and fill colors
//!
//! Fig colors are plain integers: `-1` is the default color, `0..=31` are
//! the standard palette and `32..` refer to custom colors defined in the
//! document's color table.

use std::fmt;

/// First color number used for custom colors
pub const CUSTOM_COLOR_BASE: i32 = 32;

/// RGB values of the 32 standard colors
pub const STANDARD_COLORS: [(u8, u8, u8); 32] = [
    // pure colors
    (0, 0, 0),
    (0, 0, 255),
    (0, 255, 0),
    (0, 255, 255),
    (255, 0, 0),
    (255, 0, 255),
    (255, 255, 0),
    (255, 255, 255),
    // blues
    (0, 0, 144),
    (0, 0, 176),
    (0, 0, 208),
    (135, 206, 255),
    // greens
    (0, 144, 0),
    (0, 176, 0),
    (0, 208, 0),
    // cyans
    (0, 144, 144),
    (0, 176, 176),
    (0, 208, 208),
    // reds
    (144, 0, 0),
    (176, 0, 0),
    (208, 0, 0),
    // magentas
    (144, 0, 144),
    (176, 0, 176),
    (208, 0, 208),
    // browns
    (128, 48, 0),
    (160, 64, 0),
    (192, 96, 0),
    // pinks
    (255, 128, 128),
    (255, 160, 160),
    (255, 192, 192),
    (255, 224, 224),
    // gold
    (255, 215, 0),
];

/// A pen or fill color reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Default color (-1)
    #[default]
    Default,
    /// Standard palette entry (0-31)
    Standard(u8),
    /// Any other number, normally a custom color (>= 32)
    Custom(i32),
}

impl Color {
    pub fn from_index(index: i32) -> Self {
        match index {
            -1 => Color::Default,
            0..=31 => Color::Standard(index as u8),
            _ => Color::Custom(index),
        }
    }

    /// Color number as written to the file
    pub fn index(&self) -> i32 {
        match self {
            Color::Default => -1,
            Color::Standard(i) => *i as i32,
            Color::Custom(i) => *i,
        }
    }

    /// RGB of a standard color; `None` for default and custom colors
    pub fn standard_rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Standard(i) => STANDARD_COLORS.get(*i as usize).copied(),
            _ => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Color::Custom(i) if *i >= CUSTOM_COLOR_BASE)
    }

    pub const BLACK: Color = Color::Standard(0);
    pub const BLUE: Color = Color::Standard(1);
    pub const GREEN: Color = Color::Standard(2);
    pub const CYAN: Color = Color::Standard(3);
    pub const RED: Color = Color::Standard(4);
    pub const MAGENTA: Color = Color::Standard(5);
    pub const YELLOW: Color = Color::Standard(6);
    pub const WHITE: Color = Color::Standard(7);
    pub const BLUE4: Color = Color::Standard(8);
    pub const BLUE3: Color = Color::Standard(9);
    pub const BLUE2: Color = Color::Standard(10);
    pub const LIGHT_BLUE: Color = Color::Standard(11);
    pub const GREEN4: Color = Color::Standard(12);
    pub const GREEN3: Color = Color::Standard(13);
    pub const GREEN2: Color = Color::Standard(14);
    pub const CYAN4: Color = Color::Standard(15);
    pub const CYAN3: Color = Color::Standard(16);
    pub const CYAN2: Color = Color::Standard(17);
    pub const RED4: Color = Color::Standard(18);
    pub const RED3: Color = Color::Standard(19);
    pub const RED2: Color = Color::Standard(20);
    pub const MAGENTA4: Color = Color::Standard(21);
    pub const MAGENTA3: Color = Color::Standard(22);
    pub const MAGENTA2: Color = Color::Standard(23);
    pub const BROWN4: Color = Color::Standard(24);
    pub const BROWN3: Color = Color::Standard(25);
    pub const BROWN2: Color = Color::Standard(26);
    pub const PINK4: Color = Color::Standard(27);
    pub const PINK3: Color = Color::Standard(28);
    pub const PINK2: Color = Color::Standard(29);
    pub const LIGHT_PINK: Color = Color::Standard(30);
    pub const GOLD: Color = Color::Standard(31);
}

impl From<i32> for Color {
    fn from(index: i32) -> Self {
        Color::from_index(index)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Format an RGB triple as `#rrggbb`
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Parse `#rrggbb` (case-insensitive) into an RGB triple
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let component = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((component(0)?, component(2)?, component(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_index_roundtrip() {
        for index in [-1, 0, 7, 31, 32, 543] {
            assert_eq!(Color::from_index(index).index(), index);
        }
        assert_eq!(Color::from_index(-1), Color::Default);
        assert_eq!(Color::from_index(4), Color::RED);
        assert!(Color::from_index(40).is_custom());
        assert!(!Color::from_index(-7).is_custom());
    }

    #[test]
    fn test_standard_rgb() {
        assert_eq!(Color::GOLD.standard_rgb(), Some((255, 215, 0)));
        assert_eq!(Color::Default.standard_rgb(), None);
    }

    #[test]
    fn test_hex_conversion() {
        assert_eq!(rgb_to_hex(254, 1, 0), "#fe0100");
        assert_eq!(hex_to_rgb("#FE0100"), Some((254, 1, 0)));
        assert_eq!(hex_to_rgb("fe0100"), None);
        assert_eq!(hex_to_rgb("#fe01"), None);
        assert_eq!(hex_to_rgb("#zz0100"), None);
    }
}
