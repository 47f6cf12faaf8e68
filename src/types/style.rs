//! Style values shared by drawing objects: line, fill, join and cap
//! styles, arrows, text alignment and fonts

use bitflags::bitflags;

/// Fig units per centimeter at the default 1200 ppi
pub const UNIT_CM: i32 = 450;

/// Fig units per inch at the default resolution
pub const UNIT_INCH: i32 = 1200;

/// Declares a closed set of integer-coded values with
/// `from_value` / `to_value` conversions.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Create from the value stored in the file
            pub fn from_value(value: i32) -> Option<Self> {
                match value {
                    $( v if v == $value => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Value stored in the file
            pub fn to_value(&self) -> i32 {
                match self {
                    $( $name::$variant => $value, )+
                }
            }
        }
    };
}

coded_enum! {
    /// Line dash pattern
    pub enum LineStyle {
        Default = -1,
        Solid = 0,
        Dashed = 1,
        Dotted = 2,
        DashDotted = 3,
        DashDoubleDotted = 4,
        DashTripleDotted = 5,
    }
}

coded_enum! {
    /// How line segments are joined
    pub enum JoinStyle {
        Miter = 0,
        Round = 1,
        Bevel = 2,
    }
}

coded_enum! {
    /// How open line ends are drawn
    pub enum CapStyle {
        Butt = 0,
        Round = 1,
        Projecting = 2,
    }
}

coded_enum! {
    /// Horizontal text alignment relative to the anchor point
    pub enum Alignment {
        Left = 0,
        Center = 1,
        Right = 2,
    }
}

coded_enum! {
    /// Direction in which an arc runs from its first to its last point
    pub enum ArcDirection {
        Clockwise = 0,
        CounterClockwise = 1,
    }
}

coded_enum! {
    /// Arrow head fill
    pub enum ArrowStyle {
        /// Filled with white
        Hollow = 0,
        /// Filled with the pen color
        Filled = 1,
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle::Default
    }
}

impl Default for JoinStyle {
    fn default() -> Self {
        JoinStyle::Miter
    }
}

impl Default for CapStyle {
    fn default() -> Self {
        CapStyle::Butt
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Left
    }
}

impl Default for ArcDirection {
    fn default() -> Self {
        ArcDirection::Clockwise
    }
}

impl Default for ArrowStyle {
    fn default() -> Self {
        ArrowStyle::Hollow
    }
}

/// Area fill: none, shades/tints of the fill color, or a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FillStyle(pub i32);

impl FillStyle {
    pub const NONE: FillStyle = FillStyle(-1);
    pub const BLACK: FillStyle = FillStyle(0);
    /// Full saturation of the fill color
    pub const SOLID: FillStyle = FillStyle(20);
    pub const WHITE: FillStyle = FillStyle(40);
    pub const LEFT30: FillStyle = FillStyle(41);
    pub const RIGHT30: FillStyle = FillStyle(42);
    pub const CROSSED30: FillStyle = FillStyle(43);
    pub const LEFT45: FillStyle = FillStyle(44);
    pub const RIGHT45: FillStyle = FillStyle(45);
    pub const CROSSED45: FillStyle = FillStyle(46);

    /// Dark shade of the fill color: 0 = black .. 100 = fill color, 5% steps
    pub fn shaded(percent: u32) -> Self {
        FillStyle((percent.min(100) / 5) as i32)
    }

    /// Light tint of the fill color: 0 = fill color .. 100 = white, 5% steps
    pub fn tinted(percent: u32) -> Self {
        FillStyle(20 + (percent.min(100) / 5) as i32)
    }

    pub fn is_filled(&self) -> bool {
        self.0 >= 0
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle::NONE
    }
}

/// Arrow head shape; xfig knows more shapes than the named ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArrowType(pub i32);

impl ArrowType {
    /// Three-stroke head
    pub const STICK: ArrowType = ArrowType(0);
    pub const CLOSED: ArrowType = ArrowType(1);
    pub const CLOSED_INDENTED: ArrowType = ArrowType(2);
    pub const CLOSED_POINTED: ArrowType = ArrowType(3);
}

/// Arrow head attached to an open end of an arc, polyline or spline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub arrow_type: ArrowType,
    pub style: ArrowStyle,
    /// Line thickness in 1/80 inch
    pub thickness: f64,
    /// Head width in fig units
    pub width: f64,
    /// Head length in fig units
    pub height: f64,
}

impl Arrow {
    pub fn new(arrow_type: ArrowType, style: ArrowStyle) -> Self {
        Arrow {
            arrow_type,
            style,
            ..Default::default()
        }
    }

    pub fn with_size(mut self, thickness: f64, width: f64, height: f64) -> Self {
        self.thickness = thickness;
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for Arrow {
    fn default() -> Self {
        Arrow {
            arrow_type: ArrowType::STICK,
            style: ArrowStyle::Hollow,
            thickness: 1.0,
            width: 60.0,
            height: 120.0,
        }
    }
}

/// Text font; LaTeX fonts when the PostScript flag is clear,
/// PostScript fonts otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Font(pub i32);

impl Font {
    pub const DEFAULT: Font = Font(-1);
    pub const TIMES_ROMAN: Font = Font(0);
    pub const TIMES_ITALIC: Font = Font(1);
    pub const TIMES_BOLD: Font = Font(2);
    pub const TIMES_BOLD_ITALIC: Font = Font(3);
    pub const AVANT_GARDE_BOOK: Font = Font(4);
    pub const AVANT_GARDE_BOOK_OBLIQUE: Font = Font(5);
    pub const AVANT_GARDE_DEMI: Font = Font(6);
    pub const AVANT_GARDE_DEMI_OBLIQUE: Font = Font(7);
    pub const BOOKMAN_LIGHT: Font = Font(8);
    pub const BOOKMAN_LIGHT_ITALIC: Font = Font(9);
    pub const BOOKMAN_DEMI: Font = Font(10);
    pub const BOOKMAN_DEMI_ITALIC: Font = Font(11);
    pub const COURIER: Font = Font(12);
    pub const COURIER_OBLIQUE: Font = Font(13);
    pub const COURIER_BOLD: Font = Font(14);
    pub const COURIER_BOLD_OBLIQUE: Font = Font(15);
    pub const HELVETICA: Font = Font(16);
    pub const HELVETICA_OBLIQUE: Font = Font(17);
    pub const HELVETICA_BOLD: Font = Font(18);
    pub const HELVETICA_BOLD_OBLIQUE: Font = Font(19);
    pub const HELVETICA_NARROW: Font = Font(20);
    pub const HELVETICA_NARROW_OBLIQUE: Font = Font(21);
    pub const HELVETICA_NARROW_BOLD: Font = Font(22);
    pub const HELVETICA_NARROW_BOLD_OBLIQUE: Font = Font(23);
    pub const NEW_CENTURY_SCHOOLBOOK_ROMAN: Font = Font(24);
    pub const NEW_CENTURY_SCHOOLBOOK_ITALIC: Font = Font(25);
    pub const NEW_CENTURY_SCHOOLBOOK_BOLD: Font = Font(26);
    pub const NEW_CENTURY_SCHOOLBOOK_BOLD_ITALIC: Font = Font(27);
    pub const PALATINO_ROMAN: Font = Font(28);
    pub const PALATINO_ITALIC: Font = Font(29);
    pub const PALATINO_BOLD: Font = Font(30);
    pub const PALATINO_BOLD_ITALIC: Font = Font(31);
    pub const SYMBOL: Font = Font(32);
    pub const ZAPF_CHANCERY_MEDIUM_ITALIC: Font = Font(33);
    pub const ZAPF_DINGBATS: Font = Font(34);
}

bitflags! {
    /// Text flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FontFlags: i32 {
        /// Text does not scale with the figure
        const RIGID = 1;
        /// LaTeX special text, passed through unescaped by exporters
        const SPECIAL = 2;
        /// Font number refers to a PostScript font
        const POSTSCRIPT = 4;
        const HIDDEN = 8;
    }
}

impl Default for FontFlags {
    fn default() -> Self {
        FontFlags::POSTSCRIPT
    }
}
