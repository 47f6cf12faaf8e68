//! Polyline family: open polylines, polygons, boxes, arc boxes and pictures

use super::{impl_common_entity_accessors, Entity, ObjectCommon, ObjectKind};
use crate::types::{BoundingBox2D, Point};

/// Semantic role of a point list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolylineKind {
    #[default]
    Polyline,
    Box,
    Polygon,
    /// Box with rounded corners
    ArcBox,
    /// Bounding box of an embedded picture
    PictureBBox,
}

impl PolylineKind {
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(PolylineKind::Polyline),
            2 => Some(PolylineKind::Box),
            3 => Some(PolylineKind::Polygon),
            4 => Some(PolylineKind::ArcBox),
            5 => Some(PolylineKind::PictureBBox),
            _ => None,
        }
    }

    pub fn to_value(&self) -> i32 {
        match self {
            PolylineKind::Polyline => 1,
            PolylineKind::Box => 2,
            PolylineKind::Polygon => 3,
            PolylineKind::ArcBox => 4,
            PolylineKind::PictureBBox => 5,
        }
    }

    /// Everything but the open polyline is closed
    pub fn is_closed(&self) -> bool {
        *self != PolylineKind::Polyline
    }

    /// Kinds that always consist of exactly four corners
    pub fn is_box(&self) -> bool {
        matches!(
            self,
            PolylineKind::Box | PolylineKind::ArcBox | PolylineKind::PictureBBox
        )
    }
}

/// A polyline-family object
///
/// Closed kinds never store the closing point; the writer repeats the first
/// point at the end of the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub common: ObjectCommon,
    pub kind: PolylineKind,
    pub points: Vec<Point>,
    /// Corner radius of arc boxes in 1/80 inch; -1 for other kinds
    pub corner_radius: i32,
    /// Picture file of a picture box; `None` until set
    pub filename: Option<String>,
    /// Picture is flipped about the diagonal
    pub flipped: bool,
}

impl Polyline {
    pub fn new(kind: PolylineKind, points: Vec<Point>) -> Self {
        Polyline {
            common: ObjectCommon::new(),
            kind,
            points,
            corner_radius: -1,
            filename: None,
            flipped: false,
        }
    }

    /// Open polyline
    pub fn polyline(points: Vec<Point>) -> Self {
        Polyline::new(PolylineKind::Polyline, points)
    }

    /// Closed polygon; a repeated closing point is dropped
    pub fn polygon(mut points: Vec<Point>) -> Self {
        if points.len() >= 2 && points.first() == points.last() {
            points.pop();
        }
        Polyline::new(PolylineKind::Polygon, points)
    }

    /// Rectangular box with corners `(x1, y1)` and `(x2, y2)`
    pub fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Polyline::new(PolylineKind::Box, box_corners(x1, y1, x2, y2))
    }

    /// Box with rounded corners
    pub fn arc_box(x1: i32, y1: i32, x2: i32, y2: i32, corner_radius: i32) -> Self {
        let mut p = Polyline::new(PolylineKind::ArcBox, box_corners(x1, y1, x2, y2));
        p.corner_radius = corner_radius;
        p
    }

    /// Embedded picture filling the given box
    pub fn picture(
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        filename: impl Into<String>,
        flipped: bool,
    ) -> Self {
        let mut p = Polyline::new(PolylineKind::PictureBBox, box_corners(x1, y1, x2, y2));
        p.filename = Some(filename.into());
        p.flipped = flipped;
        p
    }

    pub fn is_closed(&self) -> bool {
        self.kind.is_closed()
    }

    /// Change the kind while keeping style, arrows and points.
    ///
    /// When closedness changes and there are at least two points the
    /// closing duplicate is removed (open to closed, if present) or added
    /// (closed to open), unless `retain_points` is set. A box kind that
    /// does not end up with four points gets the corners of the points'
    /// bounding box.
    pub fn change_type(&mut self, kind: PolylineKind, retain_points: bool) {
        let was_closed = self.kind.is_closed();
        self.kind = kind;

        if !retain_points && was_closed != kind.is_closed() && self.points.len() >= 2 {
            if was_closed {
                let first = self.points[0];
                self.points.push(first);
            } else if self.points.first() == self.points.last() {
                self.points.pop();
            }
        }

        if kind.is_box() && self.points.len() != 4 {
            if let Some(bbox) = BoundingBox2D::from_points(self.points.iter().copied()) {
                let (a, b) = bbox.to_points();
                self.points = box_corners(a.x, a.y, b.x, b.y);
            }
        }
    }

    /// Points as written to the file, closing point included
    pub fn output_points(&self) -> impl Iterator<Item = Point> + '_ {
        let closing = if self.is_closed() {
            self.points.first().copied()
        } else {
            None
        };
        self.points.iter().copied().chain(closing)
    }

    /// Corner at index 0 of a box
    pub fn upper_left(&self) -> Option<Point> {
        self.box_points().map(|(a, _)| a)
    }

    /// Corner at index 2 of a box
    pub fn lower_right(&self) -> Option<Point> {
        self.box_points().map(|(_, b)| b)
    }

    pub fn center(&self) -> Option<Point> {
        self.box_points()
            .map(|(a, b)| a.midpoint(&b))
    }

    pub fn width(&self) -> Option<i32> {
        self.box_points().map(|(a, b)| (b.x - a.x).abs())
    }

    pub fn height(&self) -> Option<i32> {
        self.box_points().map(|(a, b)| (b.y - a.y).abs())
    }

    fn box_points(&self) -> Option<(Point, Point)> {
        if self.kind.is_box() && self.points.len() == 4 {
            Some((self.points[0], self.points[2]))
        } else {
            None
        }
    }
}

fn box_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Point> {
    vec![
        Point::new(x1, y1),
        Point::new(x2, y1),
        Point::new(x2, y2),
        Point::new(x1, y2),
    ]
}

impl Entity for Polyline {
    impl_common_entity_accessors!();

    fn bounding_box(&self) -> Option<BoundingBox2D> {
        BoundingBox2D::from_points(self.points.iter().copied())
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Polyline
    }
}
