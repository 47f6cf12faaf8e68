//! Text objects

use super::{impl_common_entity_accessors, Entity, ObjectCommon, ObjectKind};
use crate::types::{Alignment, BoundingBox2D, Font, FontFlags, Point};

/// A single line of text anchored at a point
///
/// `approximate_height` and `approximate_length` are whatever the writing
/// program stored; they are not derived from the string and only give a
/// rough box for bounds and `within` queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub common: ObjectCommon,
    pub alignment: Alignment,
    pub text: String,
    /// Anchor on the baseline
    pub position: Point,
    /// `None` writes the default font for the current flags
    pub font: Option<Font>,
    /// Size in points
    pub font_size: f64,
    /// Rotation in radians
    pub angle: f64,
    pub font_flags: FontFlags,
    pub approximate_height: f64,
    pub approximate_length: f64,
}

impl Text {
    pub fn new(position: Point, text: impl Into<String>) -> Self {
        Text {
            common: ObjectCommon::new(),
            alignment: Alignment::Left,
            text: text.into(),
            position,
            font: None,
            font_size: 12.0,
            angle: 0.0,
            font_flags: FontFlags::POSTSCRIPT,
            approximate_height: 136.0,
            approximate_length: 100.0,
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Font number written to the file
    pub fn resolved_font(&self) -> Font {
        match self.font {
            Some(font) => font,
            None if self.font_flags.contains(FontFlags::POSTSCRIPT) => Font::DEFAULT,
            None => Font(0),
        }
    }

    /// Rough glyph height in fig units for the current font size
    pub fn guess_height(&self) -> f64 {
        self.font_size * 34.0 / 3.0
    }
}

impl Entity for Text {
    impl_common_entity_accessors!();

    fn bounding_box(&self) -> Option<BoundingBox2D> {
        let x = self.position.x as f64;
        let y = self.position.y as f64;
        let (h, l) = (self.approximate_height, self.approximate_length);
        let (left, right) = match self.alignment {
            Alignment::Left => (x, x + l),
            Alignment::Center => (x - l / 2.0, x + l / 2.0),
            Alignment::Right => (x - l, x),
        };
        Some(BoundingBox2D::new(
            crate::types::Vector2::new(left, y - h),
            crate::types::Vector2::new(right, y),
        ))
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.position = self.position.translated(dx, dy);
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = Text::new(Point::new(10, 20), "hello");
        assert_eq!(t.font_size, 12.0);
        assert_eq!(t.approximate_height, 136.0);
        assert_eq!(t.guess_height(), 136.0);
        assert_eq!(t.resolved_font(), Font::DEFAULT);
    }

    #[test]
    fn test_resolved_font_without_postscript() {
        let mut t = Text::new(Point::new(0, 0), "x");
        t.font_flags = FontFlags::SPECIAL;
        assert_eq!(t.resolved_font(), Font(0));
        t.font = Some(Font::HELVETICA);
        assert_eq!(t.resolved_font(), Font(16));
    }

    #[test]
    fn test_bounding_box_by_alignment() {
        let t = Text::new(Point::new(1000, 500), "x");
        assert_eq!(t.bounding_box().unwrap().to_string(), "1000,364-1100,500");
        let t = t.with_alignment(Alignment::Center);
        assert_eq!(t.bounding_box().unwrap().to_string(), "950,364-1050,500");
        let t = t.with_alignment(Alignment::Right);
        assert_eq!(t.bounding_box().unwrap().to_string(), "900,364-1000,500");
    }
}
