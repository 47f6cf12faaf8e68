//! Compound objects (groups)

use super::{Entity, EntityType, ObjectKind};
use crate::types::{BoundingBox2D, Handle};

/// An ordered group of objects, possibly nested
///
/// The bounds stored in a compound record are ignored on read; the
/// bounding box is always computed from the children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    pub handle: Handle,
    pub comment: Option<String>,
    pub(crate) children: Vec<EntityType>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: Vec<EntityType>) -> Self {
        Compound {
            children,
            ..Default::default()
        }
    }

    /// Children of a compound that is already part of a document are
    /// added with [`FigDocument::append_to`](crate::FigDocument::append_to)
    pub(crate) fn push(&mut self, entity: EntityType) {
        self.children.push(entity);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Entity for Compound {
    fn handle(&self) -> Handle {
        self.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }

    fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }

    fn bounding_box(&self) -> Option<BoundingBox2D> {
        self.children
            .iter()
            .fold(None, |acc, child| BoundingBox2D::union(acc, child.bounding_box()))
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Compound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Polyline, Text};
    use crate::types::Point;

    #[test]
    fn test_bounding_box_is_recomputed() {
        let mut group = Compound::new();
        group.push(Polyline::rect(0, 0, 10, 10).into());
        assert_eq!(group.bounding_box().unwrap().to_string(), "0,0-10,10");

        let mut label = Text::new(Point::new(50, 200), "far away");
        label.approximate_length = 0.0;
        label.approximate_height = 0.0;
        group.push(label.into());
        assert_eq!(group.bounding_box().unwrap().to_string(), "0,0-50,200");

        group.children.pop();
        assert_eq!(group.bounding_box().unwrap().to_string(), "0,0-10,10");
    }

    #[test]
    fn test_nested_translate() {
        let inner = Compound::with_children(vec![Polyline::rect(0, 0, 1, 1).into()]);
        let mut outer = Compound::with_children(vec![inner.into()]);
        outer.translate(10, 20);
        assert_eq!(outer.bounding_box().unwrap().to_string(), "10,20-11,21");
    }

    #[test]
    fn test_empty_compound_has_no_bounds() {
        assert!(Compound::new().bounding_box().is_none());
        assert!(Compound::new().is_empty());
    }
}
