//! Custom color table

use crate::error::{FigError, Result};
use crate::types::{CUSTOM_COLOR_BASE, STANDARD_COLORS};
use indexmap::IndexMap;
use std::collections::HashMap;

pub mod custom_color;

pub use custom_color::{ColorSpec, CustomColor};

/// Maximum number of custom colors a document may define
pub const MAX_CUSTOM_COLORS: usize = 512;

/// Ordered table of custom colors, addressable by color number and by hex code
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    /// Entries by color number, in definition order
    entries: IndexMap<i32, CustomColor>,
    /// Color number by normalized hex code (first definition wins)
    by_hex: HashMap<String, i32>,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomColor> {
        self.entries.values()
    }

    /// Get a color by its number
    pub fn get(&self, index: i32) -> Option<&CustomColor> {
        self.entries.get(&index)
    }

    /// Get a color by `#rrggbb` (case-insensitive)
    pub fn get_by_hex(&self, hex: &str) -> Option<&CustomColor> {
        let key = hex.to_ascii_lowercase();
        self.by_hex.get(&key).and_then(|index| self.entries.get(index))
    }

    /// Number the next added color receives
    pub fn next_index(&self) -> i32 {
        let sequential = CUSTOM_COLOR_BASE + self.entries.len() as i32;
        match self.entries.keys().max() {
            Some(&max) if max >= sequential => max + 1,
            _ => sequential,
        }
    }

    /// Add a new color with the next free number.
    ///
    /// Fails with [`FigError::ColorTableFull`] once the table holds
    /// [`MAX_CUSTOM_COLORS`] entries; the table is left unchanged.
    pub fn add(&mut self, hex: &str) -> Result<CustomColor> {
        self.ensure_capacity()?;
        let color = CustomColor::new(self.next_index(), hex)?;
        self.push(color.clone());
        Ok(color)
    }

    /// Insert a color keeping its number (used when reading files).
    /// A redefinition of an existing number replaces the old entry.
    pub fn insert(&mut self, color: CustomColor) -> Result<()> {
        if !self.entries.contains_key(&color.index) {
            self.ensure_capacity()?;
        }
        self.push(color);
        Ok(())
    }

    fn ensure_capacity(&self) -> Result<()> {
        if self.entries.len() >= MAX_CUSTOM_COLORS {
            return Err(FigError::ColorTableFull {
                limit: MAX_CUSTOM_COLORS,
            });
        }
        Ok(())
    }

    fn push(&mut self, color: CustomColor) {
        let index = color.index;
        let hex = color.hex_code().to_string();
        if let Some(replaced) = self.entries.insert(index, color) {
            self.unlink_hex(replaced.hex_code(), index);
        }
        self.by_hex.entry(hex).or_insert(index);
    }

    /// Drop or re-point the hex key of a replaced entry
    fn unlink_hex(&mut self, hex: &str, index: i32) {
        if self.by_hex.get(hex) != Some(&index) {
            return;
        }
        match self.entries.values().find(|c| c.hex_code() == hex) {
            Some(other) => {
                self.by_hex.insert(hex.to_string(), other.index);
            }
            None => {
                self.by_hex.remove(hex);
            }
        }
    }

    /// Closest existing color whose squared RGB distance is `< similarity²`
    pub fn find_similar(&self, rgb: (u8, u8, u8), similarity: f64) -> Option<&CustomColor> {
        let limit = similarity * similarity;
        self.entries
            .values()
            .map(|c| (c.distance_squared(rgb), c))
            .min_by_key(|(d, _)| *d)
            .filter(|(d, _)| (*d as f64) < limit)
            .map(|(_, c)| c)
    }

    /// Look up a color, adding it on a miss.
    ///
    /// An exact hex match is returned first. With `Some(similarity)` and a
    /// positive value the closest color within that distance is returned
    /// before adding. With a non-positive similarity nothing is added and a
    /// miss is [`FigError::ColorNotFound`].
    pub fn get_color(&mut self, spec: &ColorSpec, similarity: Option<f64>) -> Result<CustomColor> {
        let hex = spec.to_hex()?;
        if let Some(existing) = self.get_by_hex(&hex) {
            return Ok(existing.clone());
        }
        match similarity {
            None => self.add(&hex),
            Some(s) if s > 0.0 => {
                let rgb = spec.to_rgb()?;
                if let Some(similar) = self.find_similar(rgb, s) {
                    return Ok(similar.clone());
                }
                self.add(&hex)
            }
            Some(_) => Err(FigError::ColorNotFound(hex)),
        }
    }

    /// RGB of a standard (0-31) or custom color number
    pub fn color_rgb(&self, index: i32) -> Result<(u8, u8, u8)> {
        if (0..CUSTOM_COLOR_BASE).contains(&index) {
            return Ok(STANDARD_COLORS[index as usize]);
        }
        self.get(index)
            .map(|c| c.rgb())
            .ok_or(FigError::InvalidColorIndex(index))
    }
}
