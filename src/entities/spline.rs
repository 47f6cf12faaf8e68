//! Spline objects
//!
//! Approximated, interpolated and X-splines, each open or closed, map to
//! sub-type codes 0-5. Every control point carries a shape factor.

use super::{impl_common_entity_accessors, Entity, ObjectCommon, ObjectKind};
use crate::error::{FigError, Result};
use crate::types::{BoundingBox2D, Point};

/// Spline interpolation family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplineKind {
    #[default]
    Approximated,
    Interpolated,
    X,
}

impl SplineKind {
    /// Shape factor xfig assigns to interior points of this kind
    pub fn default_shape_factor(&self) -> f64 {
        match self {
            SplineKind::Approximated => 1.0,
            SplineKind::Interpolated => -1.0,
            SplineKind::X => -1.0,
        }
    }
}

/// A spline through (or near) its control points
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    pub common: ObjectCommon,
    pub kind: SplineKind,
    pub closed: bool,
    /// Control points; closed splines never repeat the first point
    pub points: Vec<Point>,
    /// One factor per control point
    pub shape_factors: Vec<f64>,
}

impl Spline {
    /// Spline with default shape factors for its kind
    pub fn new(kind: SplineKind, closed: bool, points: Vec<Point>) -> Self {
        let n = points.len();
        let shape_factors = (0..n)
            .map(|i| {
                if !closed && (i == 0 || i + 1 == n) {
                    0.0
                } else {
                    kind.default_shape_factor()
                }
            })
            .collect();
        Spline {
            common: ObjectCommon::new(),
            kind,
            closed,
            points,
            shape_factors,
        }
    }

    /// Sub-type code: kind * 2 + closed
    pub fn sub_type(&self) -> i32 {
        let base = match self.kind {
            SplineKind::Approximated => 0,
            SplineKind::Interpolated => 2,
            SplineKind::X => 4,
        };
        base + self.closed as i32
    }

    /// Retag from a sub-type code (0-5); points and factors are kept
    pub fn change_type(&mut self, spline_type: i32) -> Result<()> {
        let kind = match spline_type {
            0 | 1 => SplineKind::Approximated,
            2 | 3 => SplineKind::Interpolated,
            4 | 5 => SplineKind::X,
            other => {
                return Err(FigError::InvalidValue {
                    field: "spline type",
                    value: other.to_string(),
                })
            }
        };
        self.kind = kind;
        self.closed = spline_type % 2 == 1;
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Drop a repeated closing point (and its shape factor) from a closed
    /// spline. Returns whether anything was removed.
    pub fn normalize_closing_point(&mut self) -> bool {
        if !self.closed || self.points.len() < 2 || self.points.first() != self.points.last() {
            return false;
        }
        self.points.pop();
        if self.shape_factors.len() > self.points.len() {
            self.shape_factors.truncate(self.points.len());
        }
        true
    }

    /// Point and shape factor counts must match
    pub fn validate(&self) -> Result<()> {
        if self.points.len() != self.shape_factors.len() {
            return Err(FigError::InvalidGeometry(format!(
                "spline has {} points but {} shape factors",
                self.points.len(),
                self.shape_factors.len()
            )));
        }
        Ok(())
    }
}

impl Entity for Spline {
    impl_common_entity_accessors!();

    /// Box around the control points; the curve itself may leave it
    fn bounding_box(&self) -> Option<BoundingBox2D> {
        BoundingBox2D::from_points(self.points.iter().copied())
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Spline
    }
}
