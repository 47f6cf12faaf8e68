//! Custom color entries and color specifications

use crate::error::{FigError, Result};
use crate::types::{hex_to_rgb, rgb_to_hex, Color};
use std::fmt;
use std::ops::Sub;

/// A document-local palette entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomColor {
    /// Color number referenced by pen/fill colors (32 and up)
    pub index: i32,
    /// Lowercase `#rrggbb`
    hex_code: String,
}

impl CustomColor {
    /// Create an entry, validating and normalizing the hex code
    pub fn new(index: i32, hex_code: &str) -> Result<Self> {
        let (r, g, b) = hex_to_rgb(hex_code).ok_or_else(|| {
            FigError::InvalidColor(format!(
                "{:?} should look like '#fe0d00'",
                hex_code
            ))
        })?;
        Ok(CustomColor {
            index,
            hex_code: rgb_to_hex(r, g, b),
        })
    }

    pub fn hex_code(&self) -> &str {
        &self.hex_code
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        // hex_code is validated on construction
        hex_to_rgb(&self.hex_code).unwrap_or((0, 0, 0))
    }

    pub fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.hex_code = rgb_to_hex(r, g, b);
    }

    /// Color reference for use as pen or fill color
    pub fn color(&self) -> Color {
        Color::from_index(self.index)
    }

    /// Squared RGB distance
    pub fn distance_squared(&self, rgb: (u8, u8, u8)) -> i32 {
        let (dr, dg, db) = difference(self.rgb(), rgb);
        dr * dr + dg * dg + db * db
    }
}

fn difference(a: (u8, u8, u8), b: (u8, u8, u8)) -> (i32, i32, i32) {
    (
        a.0 as i32 - b.0 as i32,
        a.1 as i32 - b.1 as i32,
        a.2 as i32 - b.2 as i32,
    )
}

/// Component-wise RGB difference
impl Sub for &CustomColor {
    type Output = (i32, i32, i32);

    fn sub(self, other: &CustomColor) -> (i32, i32, i32) {
        difference(self.rgb(), other.rgb())
    }
}

impl From<&CustomColor> for Color {
    fn from(c: &CustomColor) -> Self {
        c.color()
    }
}

impl fmt::Display for CustomColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.index, self.hex_code)
    }
}

/// The ways a color can be requested from the color table
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// 0-255 components
    Rgb(u8, u8, u8),
    /// 0.0-1.0 components
    Unit(f64, f64, f64),
    /// `#rrggbb`
    Hex(String),
}

impl ColorSpec {
    /// Gray level 0.0 (black) .. 1.0 (white)
    pub fn gray(level: f64) -> Self {
        ColorSpec::Unit(level, level, level)
    }

    pub fn to_rgb(&self) -> Result<(u8, u8, u8)> {
        match self {
            ColorSpec::Rgb(r, g, b) => Ok((*r, *g, *b)),
            ColorSpec::Unit(r, g, b) => {
                let component = |c: f64| -> Result<u8> {
                    let v = (c * 255.0).round();
                    if (0.0..=255.0).contains(&v) {
                        Ok(v as u8)
                    } else {
                        Err(FigError::InvalidColor(format!(
                            "component {} outside 0.0..1.0",
                            c
                        )))
                    }
                };
                Ok((component(*r)?, component(*g)?, component(*b)?))
            }
            ColorSpec::Hex(hex) => hex_to_rgb(hex)
                .ok_or_else(|| FigError::InvalidColor(format!("{:?} is not #rrggbb", hex))),
        }
    }

    /// Normalized lowercase `#rrggbb`
    pub fn to_hex(&self) -> Result<String> {
        let (r, g, b) = self.to_rgb()?;
        Ok(rgb_to_hex(r, g, b))
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorSpec::Rgb(r, g, b)
    }
}

impl From<(f64, f64, f64)> for ColorSpec {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        ColorSpec::Unit(r, g, b)
    }
}

impl From<&str> for ColorSpec {
    fn from(hex: &str) -> Self {
        ColorSpec::Hex(hex.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(hex: String) -> Self {
        ColorSpec::Hex(hex)
    }
}

impl From<&CustomColor> for ColorSpec {
    fn from(c: &CustomColor) -> Self {
        ColorSpec::Hex(c.hex_code.clone())
    }
}
