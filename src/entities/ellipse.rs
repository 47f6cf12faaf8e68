//! Ellipse and circle objects

use super::{impl_common_entity_accessors, Entity, ObjectCommon, ObjectKind};
use crate::error::{FigError, Result};
use crate::types::{BoundingBox2D, Point, Vector2};
use std::f64::consts::PI;

/// Concrete shape of an ellipse record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EllipseShape {
    #[default]
    Ellipse,
    /// Both radii equal
    Circle,
}

/// Ellipse sub-type codes
pub const ELLIPSE_RADII: i32 = 1;
pub const ELLIPSE_DIAMETER: i32 = 2;
pub const CIRCLE_RADIUS: i32 = 3;
pub const CIRCLE_DIAMETER: i32 = 4;

/// An ellipse or circle
///
/// `start` and `end` are the points the user dragged in xfig. Whether the
/// record is "by radius" or "by diameter" depends only on `start == center`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub common: ObjectCommon,
    pub shape: EllipseShape,
    /// Rotation in radians
    pub angle: f64,
    pub center: Point,
    pub radius_x: i32,
    pub radius_y: i32,
    pub start: Point,
    pub end: Point,
}

impl Ellipse {
    /// Ellipse specified by center and radii
    pub fn ellipse(center: Point, radius_x: i32, radius_y: i32, angle: f64) -> Self {
        let mut e = Ellipse {
            common: ObjectCommon::new(),
            shape: EllipseShape::Ellipse,
            angle,
            center,
            radius_x: 0,
            radius_y: 0,
            start: center,
            end: center,
        };
        e.set_radius(radius_x, radius_y);
        e
    }

    /// Circle specified by center and radius
    pub fn circle(center: Point, radius: i32) -> Self {
        let mut e = Ellipse::ellipse(center, radius, radius, 0.0);
        e.shape = EllipseShape::Circle;
        e
    }

    /// Ellipse or circle specified by two dragged points
    pub fn from_start_end(shape: EllipseShape, start: Point, end: Point) -> Self {
        let mut e = Ellipse {
            shape,
            ..Ellipse::ellipse(start, 0, 0, 0.0)
        };
        e.set_start_end(start, end);
        e
    }

    /// Sub-type code as stored in the file
    pub fn sub_type(&self) -> i32 {
        let by_radius = self.center == self.start;
        match (self.shape, by_radius) {
            (EllipseShape::Ellipse, true) => ELLIPSE_RADII,
            (EllipseShape::Ellipse, false) => ELLIPSE_DIAMETER,
            (EllipseShape::Circle, true) => CIRCLE_RADIUS,
            (EllipseShape::Circle, false) => CIRCLE_DIAMETER,
        }
    }

    /// Retag from a sub-type code (1-4); geometry is kept as is
    pub fn change_type(&mut self, ellipse_type: i32) -> Result<()> {
        self.shape = match ellipse_type {
            ELLIPSE_RADII | ELLIPSE_DIAMETER => EllipseShape::Ellipse,
            CIRCLE_RADIUS | CIRCLE_DIAMETER => EllipseShape::Circle,
            other => {
                return Err(FigError::InvalidValue {
                    field: "ellipse type",
                    value: other.to_string(),
                })
            }
        };
        Ok(())
    }

    /// Change radii; start becomes the center and end the radius corner
    pub fn set_radius(&mut self, radius_x: i32, radius_y: i32) {
        self.radius_x = radius_x;
        self.radius_y = radius_y;
        self.start = self.center;
        self.end = self.center.translated(radius_x, radius_y);
    }

    pub fn set_center_radius(&mut self, center: Point, radius_x: i32, radius_y: i32) {
        self.center = center;
        self.set_radius(radius_x, radius_y);
    }

    /// Set from two dragged points; the center becomes their midpoint.
    /// Circles take the distance from the center to `end` as radius.
    pub fn set_start_end(&mut self, start: Point, end: Point) {
        self.start = start;
        self.end = end;
        self.center = start.midpoint(&end);
        match self.shape {
            EllipseShape::Ellipse => {
                self.radius_x = end.x - self.center.x;
                self.radius_y = end.y - self.center.y;
            }
            EllipseShape::Circle => {
                let r = Vector2::from(end).distance(&Vector2::from(self.center)).round() as i32;
                self.radius_x = r;
                self.radius_y = r;
            }
        }
    }

    /// Rotation normalized to [0, 2π)
    pub fn normalized_angle(&self) -> f64 {
        self.angle.rem_euclid(2.0 * PI)
    }

    /// Circles must have equal radii
    pub fn validate(&self) -> Result<()> {
        if self.shape == EllipseShape::Circle && self.radius_x != self.radius_y {
            return Err(FigError::InvalidGeometry(format!(
                "circle with unequal radii {} != {}",
                self.radius_x, self.radius_y
            )));
        }
        Ok(())
    }
}

impl Entity for Ellipse {
    impl_common_entity_accessors!();

    fn bounding_box(&self) -> Option<BoundingBox2D> {
        let (rx, ry) = (self.radius_x.abs(), self.radius_y.abs());
        Some(BoundingBox2D::from_coords(
            self.center.x - rx,
            self.center.y - ry,
            self.center.x + rx,
            self.center.y + ry,
        ))
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.center = self.center.translated(dx, dy);
        self.start = self.start.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Ellipse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_type_follows_start() {
        let mut c = Ellipse::circle(Point::new(100, 100), 50);
        assert_eq!(c.sub_type(), CIRCLE_RADIUS);
        c.start = Point::new(50, 100);
        assert_eq!(c.sub_type(), CIRCLE_DIAMETER);

        let e = Ellipse::from_start_end(EllipseShape::Ellipse, Point::new(0, 0), Point::new(40, 20));
        assert_eq!(e.center, Point::new(20, 10));
        assert_eq!((e.radius_x, e.radius_y), (20, 10));
        assert_eq!(e.sub_type(), ELLIPSE_DIAMETER);

        let e = Ellipse::from_start_end(EllipseShape::Ellipse, Point::new(-5, -5), Point::new(0, 0));
        assert_eq!(e.center, Point::new(-3, -3));
        assert_eq!((e.radius_x, e.radius_y), (3, 3));
    }

    #[test]
    fn test_change_type_keeps_style() {
        let mut e = Ellipse::ellipse(Point::new(0, 0), 30, 30, 0.0);
        e.common.depth = 7;
        e.change_type(CIRCLE_RADIUS).unwrap();
        assert_eq!(e.shape, EllipseShape::Circle);
        assert_eq!(e.common.depth, 7);
        assert!(e.change_type(9).is_err());
    }

    #[test]
    fn test_circle_validation() {
        let mut c = Ellipse::circle(Point::new(0, 0), 10);
        assert!(c.validate().is_ok());
        c.radius_y = 11;
        assert!(matches!(c.validate(), Err(FigError::InvalidGeometry(_))));
    }

    #[test]
    fn test_bounding_box() {
        let e = Ellipse::ellipse(Point::new(100, 200), 30, 20, 0.5);
        assert_eq!(e.bounding_box().unwrap().to_string(), "70,180-130,220");
    }

    #[test]
    fn test_normalized_angle() {
        let e = Ellipse::ellipse(Point::new(0, 0), 1, 1, -PI / 2.0);
        assert!((e.normalized_angle() - 1.5 * PI).abs() < 1e-12);
    }
}
