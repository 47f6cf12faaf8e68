//! Core value types: geometry, colors, styles and handles

pub mod bounds;
pub mod color;
pub mod handle;
pub mod style;
pub mod vector;

pub use bounds::{parse_geometry, parse_size, BoundingBox2D};
pub use color::{hex_to_rgb, rgb_to_hex, Color, CUSTOM_COLOR_BASE, STANDARD_COLORS};
pub use handle::Handle;
pub use style::{
    Alignment, ArcDirection, Arrow, ArrowStyle, ArrowType, CapStyle, FillStyle, Font, FontFlags,
    JoinStyle, LineStyle, UNIT_CM, UNIT_INCH,
};
pub use vector::{Point, Vector2};
