//! Container traversal, attribute search and bulk editing
//!
//! [`Container`] is implemented by the document and by compounds. Searches
//! return an [`ObjectSelection`]: a snapshot of handles that is resolved
//! against the container again for every bulk operation, so it stays valid
//! across structural edits (members that disappeared are simply skipped,
//! or reported by [`ObjectSelection::remove_all_from_parent`]).

use crate::entities::{Compound, EntityType, ObjectKind};
use crate::error::{FigError, Result};
use crate::types::{
    Alignment, ArcDirection, Arrow, BoundingBox2D, CapStyle, Color, FillStyle, Font, FontFlags,
    Handle, JoinStyle, LineStyle,
};
use std::collections::BTreeSet;
use std::fmt;

/// An ordered, possibly nested collection of entities
///
/// There is no public mutable access to the child lists: objects enter a
/// document through [`FigDocument::append`](crate::FigDocument::append) and
/// [`FigDocument::append_to`](crate::FigDocument::append_to), which give
/// every object in the tree a handle.
pub trait Container {
    fn children(&self) -> &[EntityType];

    /// Depth-first iteration, descending into compounds. Compounds
    /// themselves are yielded (before their children) only when
    /// `include_compounds` is set.
    fn all_objects(&self, include_compounds: bool) -> AllObjects<'_> {
        AllObjects {
            stack: vec![self.children().iter()],
            include_compounds,
        }
    }

    /// Snapshot of all objects matching `filter`
    fn find_objects(&self, filter: &ObjectFilter) -> ObjectSelection {
        self.all_objects(filter.includes_compounds())
            .filter(|e| filter.matches(e))
            .map(|e| e.handle())
            .collect()
    }

    /// All objects at the given depth
    fn layer(&self, depth: i32) -> ObjectSelection {
        self.find_objects(&ObjectFilter::new().depth(depth))
    }

    /// Sorted distinct depths in use
    fn layers(&self) -> Vec<i32> {
        self.all_objects(false)
            .filter_map(|e| e.depth())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Union of the children's bounding boxes, computed on every call
    fn bounds(&self) -> Option<BoundingBox2D> {
        self.children()
            .iter()
            .fold(None, |acc, e| BoundingBox2D::union(acc, e.bounding_box()))
    }

    /// Find an entity anywhere in the tree
    fn find(&self, handle: Handle) -> Option<&EntityType> {
        if handle.is_null() {
            return None;
        }
        self.all_objects(true).find(|e| e.handle() == handle)
    }

    fn find_mut(&mut self, handle: Handle) -> Option<&mut EntityType>;

    /// Remove an entity from wherever it lives in the tree
    fn remove(&mut self, handle: Handle) -> Option<EntityType>;
}

pub(crate) fn find_in_mut(children: &mut [EntityType], handle: Handle) -> Option<&mut EntityType> {
    if handle.is_null() {
        return None;
    }
    for child in children.iter_mut() {
        if child.handle() == handle {
            return Some(child);
        }
        if let EntityType::Compound(c) = child {
            if let Some(found) = find_in_mut(&mut c.children, handle) {
                return Some(found);
            }
        }
    }
    None
}

pub(crate) fn remove_from(children: &mut Vec<EntityType>, handle: Handle) -> Option<EntityType> {
    if handle.is_null() {
        return None;
    }
    if let Some(pos) = children.iter().position(|c| c.handle() == handle) {
        return Some(children.remove(pos));
    }
    for child in children.iter_mut() {
        if let EntityType::Compound(c) = child {
            if let Some(removed) = remove_from(&mut c.children, handle) {
                return Some(removed);
            }
        }
    }
    None
}

impl Container for Compound {
    fn children(&self) -> &[EntityType] {
        &self.children
    }

    fn find_mut(&mut self, handle: Handle) -> Option<&mut EntityType> {
        find_in_mut(&mut self.children, handle)
    }

    fn remove(&mut self, handle: Handle) -> Option<EntityType> {
        remove_from(&mut self.children, handle)
    }
}

/// Depth-first iterator over a container, see [`Container::all_objects`]
pub struct AllObjects<'a> {
    stack: Vec<std::slice::Iter<'a, EntityType>>,
    include_compounds: bool,
}

impl<'a> Iterator for AllObjects<'a> {
    type Item = &'a EntityType;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(entity) => {
                    if let EntityType::Compound(c) = entity {
                        self.stack.push(c.children.iter());
                        if !self.include_compounds {
                            continue;
                        }
                    }
                    return Some(entity);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Names of the editable attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    LineStyle,
    LineWidth,
    PenColor,
    FillColor,
    Depth,
    PenStyle,
    FillStyle,
    StyleValue,
    JoinStyle,
    CapStyle,
    ForwardArrow,
    BackwardArrow,
    Comment,
    CornerRadius,
    Font,
    FontSize,
    FontFlags,
    Alignment,
    Angle,
    Direction,
}

impl AttributeKey {
    /// Whether objects of `kind` carry this attribute in their record
    pub fn applies_to(&self, kind: ObjectKind) -> bool {
        use ObjectKind as K;
        match self {
            AttributeKey::Comment => true,
            _ if kind == K::Compound => false,
            AttributeKey::PenColor | AttributeKey::Depth | AttributeKey::PenStyle => true,
            AttributeKey::LineStyle
            | AttributeKey::LineWidth
            | AttributeKey::FillColor
            | AttributeKey::FillStyle
            | AttributeKey::StyleValue => kind != K::Text,
            AttributeKey::JoinStyle | AttributeKey::CornerRadius => kind == K::Polyline,
            AttributeKey::CapStyle | AttributeKey::ForwardArrow | AttributeKey::BackwardArrow => {
                matches!(kind, K::Arc | K::Polyline | K::Spline)
            }
            AttributeKey::Font
            | AttributeKey::FontSize
            | AttributeKey::FontFlags
            | AttributeKey::Alignment => kind == K::Text,
            AttributeKey::Angle => matches!(kind, K::Text | K::Ellipse),
            AttributeKey::Direction => kind == K::Arc,
        }
    }
}

/// An attribute together with its value
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    LineStyle(LineStyle),
    LineWidth(i32),
    PenColor(Color),
    FillColor(Color),
    Depth(i32),
    PenStyle(i32),
    FillStyle(FillStyle),
    StyleValue(f64),
    JoinStyle(JoinStyle),
    CapStyle(CapStyle),
    ForwardArrow(Option<Arrow>),
    BackwardArrow(Option<Arrow>),
    Comment(Option<String>),
    CornerRadius(i32),
    Font(Option<Font>),
    FontSize(f64),
    FontFlags(FontFlags),
    Alignment(Alignment),
    Angle(f64),
    Direction(ArcDirection),
}

impl Attribute {
    pub fn key(&self) -> AttributeKey {
        match self {
            Attribute::LineStyle(_) => AttributeKey::LineStyle,
            Attribute::LineWidth(_) => AttributeKey::LineWidth,
            Attribute::PenColor(_) => AttributeKey::PenColor,
            Attribute::FillColor(_) => AttributeKey::FillColor,
            Attribute::Depth(_) => AttributeKey::Depth,
            Attribute::PenStyle(_) => AttributeKey::PenStyle,
            Attribute::FillStyle(_) => AttributeKey::FillStyle,
            Attribute::StyleValue(_) => AttributeKey::StyleValue,
            Attribute::JoinStyle(_) => AttributeKey::JoinStyle,
            Attribute::CapStyle(_) => AttributeKey::CapStyle,
            Attribute::ForwardArrow(_) => AttributeKey::ForwardArrow,
            Attribute::BackwardArrow(_) => AttributeKey::BackwardArrow,
            Attribute::Comment(_) => AttributeKey::Comment,
            Attribute::CornerRadius(_) => AttributeKey::CornerRadius,
            Attribute::Font(_) => AttributeKey::Font,
            Attribute::FontSize(_) => AttributeKey::FontSize,
            Attribute::FontFlags(_) => AttributeKey::FontFlags,
            Attribute::Alignment(_) => AttributeKey::Alignment,
            Attribute::Angle(_) => AttributeKey::Angle,
            Attribute::Direction(_) => AttributeKey::Direction,
        }
    }

    /// Read an attribute; `None` if the entity does not carry it
    pub fn get(entity: &EntityType, key: AttributeKey) -> Option<Attribute> {
        if !key.applies_to(entity.kind()) {
            return None;
        }
        if key == AttributeKey::Comment {
            return Some(Attribute::Comment(entity.comment().map(str::to_string)));
        }
        let common = entity.common()?;
        let value = match key {
            AttributeKey::LineStyle => Attribute::LineStyle(common.line_style),
            AttributeKey::LineWidth => Attribute::LineWidth(common.line_width),
            AttributeKey::PenColor => Attribute::PenColor(common.pen_color),
            AttributeKey::FillColor => Attribute::FillColor(common.fill_color),
            AttributeKey::Depth => Attribute::Depth(common.depth),
            AttributeKey::PenStyle => Attribute::PenStyle(common.pen_style),
            AttributeKey::FillStyle => Attribute::FillStyle(common.fill_style),
            AttributeKey::StyleValue => Attribute::StyleValue(common.style_value),
            AttributeKey::JoinStyle => Attribute::JoinStyle(common.join_style),
            AttributeKey::CapStyle => Attribute::CapStyle(common.cap_style),
            AttributeKey::ForwardArrow => Attribute::ForwardArrow(common.forward_arrow),
            AttributeKey::BackwardArrow => Attribute::BackwardArrow(common.backward_arrow),
            AttributeKey::Comment => Attribute::Comment(common.comment.clone()),
            AttributeKey::CornerRadius => match entity {
                EntityType::Polyline(p) => Attribute::CornerRadius(p.corner_radius),
                _ => return None,
            },
            AttributeKey::Font => match entity {
                EntityType::Text(t) => Attribute::Font(t.font),
                _ => return None,
            },
            AttributeKey::FontSize => match entity {
                EntityType::Text(t) => Attribute::FontSize(t.font_size),
                _ => return None,
            },
            AttributeKey::FontFlags => match entity {
                EntityType::Text(t) => Attribute::FontFlags(t.font_flags),
                _ => return None,
            },
            AttributeKey::Alignment => match entity {
                EntityType::Text(t) => Attribute::Alignment(t.alignment),
                _ => return None,
            },
            AttributeKey::Angle => match entity {
                EntityType::Text(t) => Attribute::Angle(t.angle),
                EntityType::Ellipse(e) => Attribute::Angle(e.angle),
                _ => return None,
            },
            AttributeKey::Direction => match entity {
                EntityType::Arc(a) => Attribute::Direction(a.direction),
                _ => return None,
            },
        };
        Some(value)
    }

    /// Assign to `entity` if it carries this attribute; returns whether it did
    pub fn apply(&self, entity: &mut EntityType) -> bool {
        if !self.key().applies_to(entity.kind()) {
            return false;
        }
        if let Attribute::Comment(comment) = self {
            entity.as_entity_mut().set_comment(comment.clone());
            return true;
        }
        match (self, entity) {
            (Attribute::CornerRadius(v), EntityType::Polyline(p)) => p.corner_radius = *v,
            (Attribute::Font(v), EntityType::Text(t)) => t.font = *v,
            (Attribute::FontSize(v), EntityType::Text(t)) => t.font_size = *v,
            (Attribute::FontFlags(v), EntityType::Text(t)) => t.font_flags = *v,
            (Attribute::Alignment(v), EntityType::Text(t)) => t.alignment = *v,
            (Attribute::Angle(v), EntityType::Text(t)) => t.angle = *v,
            (Attribute::Angle(v), EntityType::Ellipse(e)) => e.angle = *v,
            (Attribute::Direction(v), EntityType::Arc(a)) => a.direction = *v,
            (attribute, entity) => {
                let Some(common) = entity.common_mut() else {
                    return false;
                };
                match attribute {
                    Attribute::LineStyle(v) => common.line_style = *v,
                    Attribute::LineWidth(v) => common.line_width = *v,
                    Attribute::PenColor(v) => common.pen_color = *v,
                    Attribute::FillColor(v) => common.fill_color = *v,
                    Attribute::Depth(v) => common.depth = *v,
                    Attribute::PenStyle(v) => common.pen_style = *v,
                    Attribute::FillStyle(v) => common.fill_style = *v,
                    Attribute::StyleValue(v) => common.style_value = *v,
                    Attribute::JoinStyle(v) => common.join_style = *v,
                    Attribute::CapStyle(v) => common.cap_style = *v,
                    Attribute::ForwardArrow(v) => common.forward_arrow = *v,
                    Attribute::BackwardArrow(v) => common.backward_arrow = *v,
                    _ => return false,
                }
            }
        }
        true
    }
}

/// Search criteria; all given criteria must hold
#[derive(Default)]
pub struct ObjectFilter {
    depth: Option<i32>,
    kinds: Vec<ObjectKind>,
    within: Option<BoundingBox2D>,
    attributes: Vec<Attribute>,
    predicate: Option<Box<dyn Fn(&EntityType) -> bool>>,
}

impl ObjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(mut self, depth: i32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Restrict to a kind; may be given several times (any of them matches).
    /// Compounds are only returned when asked for here.
    pub fn kind(mut self, kind: ObjectKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Objects whose bounding box lies inside `rect` (border inclusive)
    pub fn within(mut self, rect: BoundingBox2D) -> Self {
        self.within = Some(rect);
        self
    }

    /// Objects that carry `attribute` with an equal value
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn matching(mut self, predicate: impl Fn(&EntityType) -> bool + 'static) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    pub fn includes_compounds(&self) -> bool {
        self.kinds.contains(&ObjectKind::Compound)
    }

    pub fn matches(&self, entity: &EntityType) -> bool {
        if !self.kinds.is_empty() && !self.kinds.contains(&entity.kind()) {
            return false;
        }
        if let Some(depth) = self.depth {
            if entity.depth() != Some(depth) {
                return false;
            }
        }
        if let (Some(rect), Some(bbox)) = (self.within, entity.bounding_box()) {
            if !rect.contains_box(&bbox) {
                return false;
            }
        }
        let attributes_match = self
            .attributes
            .iter()
            .all(|a| Attribute::get(entity, a.key()).as_ref() == Some(a));
        if !attributes_match {
            return false;
        }
        self.predicate.as_ref().map_or(true, |p| p(entity))
    }
}

impl fmt::Debug for ObjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectFilter")
            .field("depth", &self.depth)
            .field("kinds", &self.kinds)
            .field("within", &self.within)
            .field("attributes", &self.attributes)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}

/// Snapshot of matching objects, by handle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSelection {
    handles: Vec<Handle>,
}

impl ObjectSelection {
    pub fn new(handles: Vec<Handle>) -> Self {
        ObjectSelection { handles }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.handles.contains(&handle)
    }

    /// Resolve the members still present in `container`
    pub fn objects<'a, C: Container + ?Sized>(&self, container: &'a C) -> Vec<&'a EntityType> {
        self.handles
            .iter()
            .filter_map(|h| container.find(*h))
            .collect()
    }

    /// Run `f` on every member still present; returns how many were visited
    pub fn for_each<C, F>(&self, container: &mut C, mut f: F) -> usize
    where
        C: Container + ?Sized,
        F: FnMut(&mut EntityType),
    {
        let mut visited = 0;
        for handle in &self.handles {
            if let Some(entity) = container.find_mut(*handle) {
                f(entity);
                visited += 1;
            }
        }
        visited
    }

    /// Assign `attribute` to every member that carries it; others are
    /// skipped. Returns the number of objects changed.
    pub fn set<C: Container + ?Sized>(&self, container: &mut C, attribute: Attribute) -> usize {
        let mut changed = 0;
        self.for_each(container, |e| {
            if attribute.apply(e) {
                changed += 1;
            }
        });
        changed
    }

    /// The value shared by all members carrying `key`; `None` when no
    /// member carries it or the values differ
    pub fn common_value<C: Container + ?Sized>(
        &self,
        container: &C,
        key: AttributeKey,
    ) -> Option<Attribute> {
        let mut values = self
            .objects(container)
            .into_iter()
            .filter_map(|e| Attribute::get(e, key));
        let first = values.next()?;
        values.all(|v| v == first).then_some(first)
    }

    /// Remove every member from its actual parent.
    ///
    /// Fails with [`FigError::ObjectNotFound`] before removing anything if
    /// a member cannot be located. Members inside a compound that is itself
    /// selected go away with that compound.
    pub fn remove_all_from_parent<C: Container + ?Sized>(
        &self,
        container: &mut C,
    ) -> Result<Vec<EntityType>> {
        if let Some(missing) = self.handles.iter().find(|h| container.find(**h).is_none()) {
            return Err(FigError::ObjectNotFound(missing.value()));
        }
        Ok(self
            .handles
            .iter()
            .filter_map(|h| container.remove(*h))
            .collect())
    }

    /// Members of both selections, without duplicates, in order
    pub fn union(mut self, other: &ObjectSelection) -> ObjectSelection {
        for handle in &other.handles {
            if !self.handles.contains(handle) {
                self.handles.push(*handle);
            }
        }
        self
    }
}

impl FromIterator<Handle> for ObjectSelection {
    fn from_iter<I: IntoIterator<Item = Handle>>(iter: I) -> Self {
        ObjectSelection {
            handles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ObjectSelection {
    type Item = &'a Handle;
    type IntoIter = std::slice::Iter<'a, Handle>;

    fn into_iter(self) -> Self::IntoIter {
        self.handles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Ellipse, Entity, Polyline, Text};
    use crate::types::Point;

    /// Compound tree with handles assigned by hand:
    /// 1 rect(depth 10), 2 compound[3 text(depth 10), 4 circle(depth 20)]
    fn sample() -> Compound {
        let mut rect = Polyline::rect(0, 0, 10, 10);
        rect.set_handle(Handle::new(1));
        rect.common.depth = 10;

        let mut text = Text::new(Point::new(5, 5), "label");
        text.set_handle(Handle::new(3));
        text.common.depth = 10;

        let mut circle = Ellipse::circle(Point::new(100, 100), 5);
        circle.set_handle(Handle::new(4));
        circle.common.depth = 20;

        let mut inner = Compound::with_children(vec![text.into(), circle.into()]);
        inner.set_handle(Handle::new(2));
        Compound::with_children(vec![rect.into(), inner.into()])
    }

    #[test]
    fn test_all_objects_order() {
        let root = sample();
        let without: Vec<u64> = root.all_objects(false).map(|e| e.handle().value()).collect();
        assert_eq!(without, vec![1, 3, 4]);
        let with: Vec<u64> = root.all_objects(true).map(|e| e.handle().value()).collect();
        assert_eq!(with, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_layers_and_layer() {
        let root = sample();
        assert_eq!(root.layers(), vec![10, 20]);
        assert_eq!(root.layer(10).handles(), &[Handle::new(1), Handle::new(3)]);
    }

    #[test]
    fn test_kind_filter_and_compounds() {
        let root = sample();
        let compounds = root.find_objects(&ObjectFilter::new().kind(ObjectKind::Compound));
        assert_eq!(compounds.handles(), &[Handle::new(2)]);
        let texts = root.find_objects(&ObjectFilter::new().kind(ObjectKind::Text));
        assert_eq!(texts.len(), 1);
    }

    #[test]
    fn test_within_filter() {
        let root = sample();
        let filter = ObjectFilter::new().within(BoundingBox2D::from_coords(90, 90, 110, 110));
        assert_eq!(root.find_objects(&filter).handles(), &[Handle::new(4)]);
    }

    #[test]
    fn test_set_skips_objects_without_attribute() {
        let mut root = sample();
        let selection = root.layer(10);
        // only the rectangle has a line width; the text is skipped
        assert_eq!(selection.set(&mut root, Attribute::LineWidth(4)), 1);
        assert_eq!(selection.set(&mut root, Attribute::PenColor(Color::RED)), 2);
        assert_eq!(
            selection.common_value(&root, AttributeKey::PenColor),
            Some(Attribute::PenColor(Color::RED))
        );
        assert_eq!(
            selection.common_value(&root, AttributeKey::LineWidth),
            Some(Attribute::LineWidth(4))
        );
        assert_eq!(selection.common_value(&root, AttributeKey::Direction), None);
    }

    #[test]
    fn test_attribute_filter() {
        let root = sample();
        let filter = ObjectFilter::new().attribute(Attribute::Depth(20));
        assert_eq!(root.find_objects(&filter).handles(), &[Handle::new(4)]);
    }

    #[test]
    fn test_remove_all_from_parent_reaches_nested() {
        let mut root = sample();
        let removed = root.layer(10).remove_all_from_parent(&mut root).unwrap();
        assert_eq!(removed.len(), 2);
        assert!(root.layer(10).is_empty());
        assert_eq!(root.all_objects(false).count(), 1);
    }

    #[test]
    fn test_remove_missing_member_fails() {
        let mut root = sample();
        let selection = ObjectSelection::new(vec![Handle::new(1), Handle::new(99)]);
        let err = selection.remove_all_from_parent(&mut root);
        assert!(matches!(err, Err(FigError::ObjectNotFound(99))));
        // nothing was removed
        assert_eq!(root.all_objects(false).count(), 3);
    }

    #[test]
    fn test_union_dedupes() {
        let a = ObjectSelection::new(vec![Handle::new(1), Handle::new(3)]);
        let b = ObjectSelection::new(vec![Handle::new(3), Handle::new(4)]);
        assert_eq!(a.union(&b).len(), 3);
    }

    #[test]
    fn test_bounds() {
        let root = sample();
        let bbox = root.bounds().unwrap();
        assert_eq!(bbox.max, crate::types::Vector2::new(105.0, 105.0));
    }
}
