//! Arc objects

use super::{impl_common_entity_accessors, Entity, ObjectCommon, ObjectKind};
use crate::types::{ArcDirection, BoundingBox2D, Point, Vector2};
use std::f64::consts::PI;

/// Open arc or closed pie wedge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArcKind {
    #[default]
    Open,
    Pie,
}

impl ArcKind {
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(ArcKind::Open),
            2 => Some(ArcKind::Pie),
            _ => None,
        }
    }

    pub fn to_value(&self) -> i32 {
        match self {
            ArcKind::Open => 1,
            ArcKind::Pie => 2,
        }
    }
}

/// A circular arc defined by its center and three points on the arc
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub common: ObjectCommon,
    pub kind: ArcKind,
    pub direction: ArcDirection,
    /// Center, stored with fractional precision
    pub center: Vector2,
    /// Start, middle and end point
    pub points: [Point; 3],
}

impl Arc {
    pub fn new(kind: ArcKind, center: Vector2, points: [Point; 3], direction: ArcDirection) -> Self {
        Arc {
            common: ObjectCommon::new(),
            kind,
            direction,
            center,
            points,
        }
    }

    /// Create an open arc from its center and end points.
    ///
    /// The middle point is placed on the circle through `start`, halfway
    /// between both ends when running in `direction`.
    pub fn from_center_endpoints(
        center: Vector2,
        start: Point,
        end: Point,
        direction: ArcDirection,
    ) -> Self {
        let mut arc = Arc::new(ArcKind::Open, center, [start, start, end], direction);
        let (angle1, angle2) = arc.angles();
        let mid_angle = angle1 + angle_diff(angle2, angle1, direction) / 2.0;
        let radius = arc.radius();
        let mid = center + Vector2::new(mid_angle.cos(), -mid_angle.sin()) * radius;
        arc.points[1] = mid.round();
        arc
    }

    /// Start and end angle in radians, counter-clockwise from the x axis
    /// with y pointing up
    pub fn angles(&self) -> (f64, f64) {
        let angle = |p: Point| (-(p.y as f64 - self.center.y)).atan2(p.x as f64 - self.center.x);
        (angle(self.points[0]), angle(self.points[2]))
    }

    /// Distance of the start point from the center
    pub fn radius(&self) -> f64 {
        Vector2::from(self.points[0]).distance(&self.center)
    }

    pub fn change_type(&mut self, kind: ArcKind) {
        self.kind = kind;
    }

    pub fn is_closed(&self) -> bool {
        self.kind == ArcKind::Pie
    }
}

/// Signed sweep from `angle1` to `angle2` in the given direction,
/// within (-2π, 0] for clockwise and [0, 2π] for counter-clockwise
fn angle_diff(angle2: f64, angle1: f64, direction: ArcDirection) -> f64 {
    let mut result = angle2 - angle1;
    match direction {
        ArcDirection::Clockwise => {
            while result > 0.0 {
                result -= 2.0 * PI;
            }
            if result <= -2.0 * PI {
                result += 2.0 * PI;
            }
        }
        ArcDirection::CounterClockwise => {
            while result < 0.0 {
                result += 2.0 * PI;
            }
            if result > 2.0 * PI {
                result -= 2.0 * PI;
            }
        }
    }
    result
}

impl Default for Arc {
    fn default() -> Self {
        Arc::new(
            ArcKind::Open,
            Vector2::ZERO,
            [Point::ORIGIN; 3],
            ArcDirection::Clockwise,
        )
    }
}

impl Entity for Arc {
    impl_common_entity_accessors!();

    fn bounding_box(&self) -> Option<BoundingBox2D> {
        BoundingBox2D::from_points(self.points)
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.center = self.center + Vector2::new(dx as f64, dy as f64);
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Arc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_counter_clockwise() {
        // quarter circle from +x to -y (up on screen)
        let arc = Arc::from_center_endpoints(
            Vector2::new(0.0, 0.0),
            Point::new(100, 0),
            Point::new(0, -100),
            ArcDirection::CounterClockwise,
        );
        assert_eq!(arc.points[1], Point::new(71, -71));
        assert!((arc.radius() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_midpoint_clockwise_takes_long_way() {
        let arc = Arc::from_center_endpoints(
            Vector2::new(0.0, 0.0),
            Point::new(100, 0),
            Point::new(0, -100),
            ArcDirection::Clockwise,
        );
        assert_eq!(arc.points[1], Point::new(-71, 71));
    }

    #[test]
    fn test_angles() {
        let arc = Arc::new(
            ArcKind::Pie,
            Vector2::new(0.0, 0.0),
            [Point::new(10, 0), Point::new(7, -7), Point::new(0, -10)],
            ArcDirection::CounterClockwise,
        );
        let (a1, a2) = arc.angles();
        assert!(a1.abs() < 1e-12);
        assert!((a2 - PI / 2.0).abs() < 1e-12);
        assert!(arc.is_closed());
    }

    #[test]
    fn test_change_type_keeps_geometry() {
        let mut arc = Arc::from_center_endpoints(
            Vector2::new(5.5, 5.5),
            Point::new(10, 5),
            Point::new(5, 0),
            ArcDirection::Clockwise,
        );
        arc.common.depth = 10;
        let points = arc.points;
        arc.change_type(ArcKind::Pie);
        assert_eq!(arc.kind.to_value(), 2);
        assert_eq!(arc.points, points);
        assert_eq!(arc.common.depth, 10);
    }

    #[test]
    fn test_bounding_box_and_translate() {
        let mut arc = Arc::new(
            ArcKind::Open,
            Vector2::new(0.0, 0.0),
            [Point::new(10, 0), Point::new(7, -7), Point::new(0, -10)],
            ArcDirection::CounterClockwise,
        );
        arc.translate(1, 1);
        assert_eq!(arc.bounding_box().unwrap().to_string(), "1,-9-11,1");
        assert_eq!(arc.center, Vector2::new(1.0, 1.0));
    }
}
