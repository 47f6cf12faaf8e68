//! Bounding rectangles and geometry-string parsing

use super::{Point, Vector2};
use crate::error::{FigError, Result};
use nom::{
    character::complete::{digit1, one_of},
    combinator::{all_consuming, map_res},
    sequence::tuple,
    IResult,
};
use std::fmt;

/// Axis-aligned 2D bounding box
///
/// Empty geometry is represented by `Option<BoundingBox2D>::None` at the
/// call sites; a value of this type always covers at least one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum point (upper-left in fig coordinates, y grows downwards)
    pub min: Vector2,
    /// Maximum point
    pub max: Vector2,
}

impl BoundingBox2D {
    /// Create a new bounding box from two corners, in any order
    pub fn new(a: Vector2, b: Vector2) -> Self {
        BoundingBox2D {
            min: Vector2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vector2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Bounding box from integer corner coordinates
    pub fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(
            Vector2::new(x1 as f64, y1 as f64),
            Vector2::new(x2 as f64, y2 as f64),
        )
    }

    pub fn from_point(point: Vector2) -> Self {
        BoundingBox2D {
            min: point,
            max: point,
        }
    }

    /// Create a bounding box that contains all given points
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<Vector2>,
    {
        let mut iter = points.into_iter();
        let mut result = BoundingBox2D::from_point(iter.next()?.into());
        for point in iter {
            result.expand_to_include(point.into());
        }
        Some(result)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Check if this bounding box contains a point (border inclusive)
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if another box lies entirely within this one
    pub fn contains_box(&self, other: &BoundingBox2D) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Expand the bounding box to include another point
    pub fn expand_to_include(&mut self, point: Vector2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Merge with another bounding box
    pub fn merge(&self, other: &BoundingBox2D) -> BoundingBox2D {
        BoundingBox2D {
            min: Vector2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vector2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Union of two optional boxes
    pub fn union(a: Option<BoundingBox2D>, b: Option<BoundingBox2D>) -> Option<BoundingBox2D> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.merge(&b)),
            (a, None) => a,
            (None, b) => b,
        }
    }

    /// Corners rounded to fig units
    pub fn to_points(&self) -> (Point, Point) {
        (self.min.round(), self.max.round())
    }
}

impl fmt::Display for BoundingBox2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.to_points();
        write!(f, "{},{}-{},{}", a.x, a.y, b.x, b.y)
    }
}

fn number(input: &str) -> IResult<&str, i32> {
    map_res(digit1, |s: &str| s.parse::<i32>())(input)
}

fn size(input: &str) -> IResult<&str, (i32, char, i32)> {
    tuple((number, one_of("x"), number))(input)
}

#[allow(clippy::type_complexity)]
fn geometry(input: &str) -> IResult<&str, (i32, char, i32, char, i32, char, i32)> {
    tuple((
        number,
        one_of(":,"),
        number,
        one_of("+-:,"),
        number,
        one_of("x:,"),
        number,
    ))(input)
}

/// Parse a size string such as `640x480`.
pub fn parse_size(text: &str) -> Result<(i32, i32)> {
    let (_, (w, _, h)) = all_consuming(size)(text.trim())
        .map_err(|_| FigError::InvalidGeometry(format!("invalid size string {:?}", text)))?;
    Ok((w, h))
}

/// Parse a geometry string.
///
/// Accepted forms are `x1,y1-x2,y2`, `x1,y1,x2,y2` (corners) and
/// `x,y+WxH` / `x,y+W,H` (origin and size).
pub fn parse_geometry(text: &str) -> Result<BoundingBox2D> {
    let invalid = || FigError::InvalidGeometry(format!("invalid geometry string {:?}", text));
    let (_, (x1, _, y1, sep, a, sep2, b)) =
        all_consuming(geometry)(text.trim()).map_err(|_| invalid())?;
    if sep == '+' || sep2 == 'x' {
        if sep == '-' {
            return Err(FigError::InvalidGeometry(format!(
                "{:?}: use either x1,y1-x2,y2 or x,y+WxH",
                text
            )));
        }
        Ok(BoundingBox2D::from_coords(x1, y1, x1 + a, y1 + b))
    } else {
        Ok(BoundingBox2D::from_coords(x1, y1, a, b))
    }
}
