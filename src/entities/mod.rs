//! Drawing objects and the traits they share

use crate::types::{
    Arrow, BoundingBox2D, CapStyle, Color, FillStyle, Handle, JoinStyle, LineStyle,
};
use std::fmt;

/// Implements the handle/comment part of [`Entity`] through a `common` field.
macro_rules! impl_common_entity_accessors {
    () => {
        fn handle(&self) -> crate::types::Handle {
            self.common.handle
        }

        fn set_handle(&mut self, handle: crate::types::Handle) {
            self.common.handle = handle;
        }

        fn comment(&self) -> Option<&str> {
            self.common.comment.as_deref()
        }

        fn set_comment(&mut self, comment: Option<String>) {
            self.common.comment = comment;
        }
    };
}
pub(crate) use impl_common_entity_accessors;

pub mod arc;
pub mod compound;
pub mod ellipse;
pub mod polyline;
pub mod spline;
pub mod text;

pub use arc::{Arc, ArcKind};
pub use compound::Compound;
pub use ellipse::{Ellipse, EllipseShape};
pub use polyline::{Polyline, PolylineKind};
pub use spline::{Spline, SplineKind};
pub use text::Text;

/// Base trait for everything that can live in a document or compound
pub trait Entity {
    /// Document-assigned handle (`Handle::NULL` until appended)
    fn handle(&self) -> Handle;

    fn set_handle(&mut self, handle: Handle);

    /// Comment lines attached in front of the record, joined with `\n`.
    /// `Some("")` is a single empty `#` line.
    fn comment(&self) -> Option<&str>;

    fn set_comment(&mut self, comment: Option<String>);

    /// Bounding box in fig units; `None` for objects without geometry
    fn bounding_box(&self) -> Option<BoundingBox2D>;

    /// Move by `(dx, dy)` fig units
    fn translate(&mut self, dx: i32, dy: i32);

    fn kind(&self) -> ObjectKind;
}

/// Coarse object family, used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Arc,
    Ellipse,
    Polyline,
    Spline,
    Text,
    Compound,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Arc => "arc",
            ObjectKind::Ellipse => "ellipse",
            ObjectKind::Polyline => "polyline",
            ObjectKind::Spline => "spline",
            ObjectKind::Text => "text",
            ObjectKind::Compound => "compound",
        };
        f.write_str(name)
    }
}

/// Style attributes shared by all drawing objects (everything but compounds).
///
/// Text records only store pen color, depth and pen style; the other
/// fields keep their defaults there.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectCommon {
    pub handle: Handle,
    pub line_style: LineStyle,
    /// Line thickness in 1/80 inch
    pub line_width: i32,
    pub pen_color: Color,
    pub fill_color: Color,
    /// Stacking depth, 0 (front) ..= 999 (back)
    pub depth: i32,
    /// Unused by xfig, carried through
    pub pen_style: i32,
    pub fill_style: FillStyle,
    /// Dash length or dot gap in 1/80 inch
    pub style_value: f64,
    pub join_style: JoinStyle,
    pub cap_style: CapStyle,
    pub forward_arrow: Option<Arrow>,
    pub backward_arrow: Option<Arrow>,
    pub comment: Option<String>,
}

impl ObjectCommon {
    pub fn new() -> Self {
        ObjectCommon {
            handle: Handle::NULL,
            line_style: LineStyle::Default,
            line_width: 1,
            pen_color: Color::Default,
            fill_color: Color::Default,
            depth: 50,
            pen_style: 0,
            fill_style: FillStyle::NONE,
            style_value: 3.0,
            join_style: JoinStyle::Miter,
            cap_style: CapStyle::Butt,
            forward_arrow: None,
            backward_arrow: None,
            comment: None,
        }
    }
}

impl Default for ObjectCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Any object that can appear in a document or compound
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    Arc(Arc),
    Ellipse(Ellipse),
    Polyline(Polyline),
    Spline(Spline),
    Text(Text),
    Compound(Compound),
}

impl EntityType {
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Arc(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Text(e) => e,
            EntityType::Compound(e) => e,
        }
    }

    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Arc(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Text(e) => e,
            EntityType::Compound(e) => e,
        }
    }

    /// Shared style attributes; `None` for compounds
    pub fn common(&self) -> Option<&ObjectCommon> {
        match self {
            EntityType::Arc(e) => Some(&e.common),
            EntityType::Ellipse(e) => Some(&e.common),
            EntityType::Polyline(e) => Some(&e.common),
            EntityType::Spline(e) => Some(&e.common),
            EntityType::Text(e) => Some(&e.common),
            EntityType::Compound(_) => None,
        }
    }

    pub fn common_mut(&mut self) -> Option<&mut ObjectCommon> {
        match self {
            EntityType::Arc(e) => Some(&mut e.common),
            EntityType::Ellipse(e) => Some(&mut e.common),
            EntityType::Polyline(e) => Some(&mut e.common),
            EntityType::Spline(e) => Some(&mut e.common),
            EntityType::Text(e) => Some(&mut e.common),
            EntityType::Compound(_) => None,
        }
    }

    pub fn handle(&self) -> Handle {
        self.as_entity().handle()
    }

    pub fn kind(&self) -> ObjectKind {
        self.as_entity().kind()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox2D> {
        self.as_entity().bounding_box()
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.as_entity_mut().translate(dx, dy)
    }

    pub fn comment(&self) -> Option<&str> {
        self.as_entity().comment()
    }

    /// Depth of a drawing object; `None` for compounds
    pub fn depth(&self) -> Option<i32> {
        self.common().map(|c| c.depth)
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, EntityType::Compound(_))
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            EntityType::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            EntityType::Compound(c) => Some(c),
            _ => None,
        }
    }

    /// Recolor pen and fill colors through `f`, recursing into compounds
    pub fn map_colors(&mut self, f: &mut dyn FnMut(Color) -> Color) {
        match self {
            EntityType::Compound(c) => {
                for child in &mut c.children {
                    child.map_colors(f);
                }
            }
            other => {
                if let Some(common) = other.common_mut() {
                    common.pen_color = f(common.pen_color);
                    common.fill_color = f(common.fill_color);
                }
            }
        }
    }
}

impl From<Arc> for EntityType {
    fn from(e: Arc) -> Self {
        EntityType::Arc(e)
    }
}

impl From<Ellipse> for EntityType {
    fn from(e: Ellipse) -> Self {
        EntityType::Ellipse(e)
    }
}

impl From<Polyline> for EntityType {
    fn from(e: Polyline) -> Self {
        EntityType::Polyline(e)
    }
}

impl From<Spline> for EntityType {
    fn from(e: Spline) -> Self {
        EntityType::Spline(e)
    }
}

impl From<Text> for EntityType {
    fn from(e: Text) -> Self {
        EntityType::Text(e)
    }
}

impl From<Compound> for EntityType {
    fn from(e: Compound) -> Self {
        EntityType::Compound(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn test_object_common_defaults() {
        let c = ObjectCommon::new();
        assert_eq!(c.line_style, LineStyle::Default);
        assert_eq!(c.line_width, 1);
        assert_eq!(c.depth, 50);
        assert_eq!(c.fill_style, FillStyle::NONE);
        assert_eq!(c.style_value, 3.0);
        assert!(c.forward_arrow.is_none() && c.backward_arrow.is_none());
        assert!(c.comment.is_none());
    }

    #[test]
    fn test_entity_type_dispatch() {
        let mut e: EntityType = Polyline::rect(0, 0, 10, 20).into();
        assert_eq!(e.kind(), ObjectKind::Polyline);
        assert_eq!(e.depth(), Some(50));
        e.translate(5, 5);
        let bbox = e.bounding_box().unwrap();
        assert_eq!(bbox.to_string(), "5,5-15,25");

        let compound: EntityType = Compound::new().into();
        assert!(compound.is_compound());
        assert!(compound.common().is_none());
        assert!(compound.bounding_box().is_none());
    }

    #[test]
    fn test_map_colors_recurses() {
        let mut inner = Compound::new();
        inner.push(Text::new(Point::new(0, 0), "a").into());
        let mut e: EntityType = inner.into();
        e.map_colors(&mut |c| if c == Color::Default { Color::RED } else { c });
        let child = &e.as_compound().unwrap().children[0];
        assert_eq!(child.common().unwrap().pen_color, Color::RED);
    }
}
