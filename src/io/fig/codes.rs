//! Fig record codes
//!
//! The first token of every object line selects the record type and with
//! it the number and meaning of the fields and continuation lines.

/// Magic token opening every fig file
pub const FIG_MAGIC: &str = "#FIG";

/// Escaped `\x01` closing a text record
pub const TEXT_TERMINATOR: &str = "\\001";

/// Number of data lines in the file header
pub const HEADER_LINES: usize = 8;

/// Object codes found in column one of a record line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum RecordCode {
    /// `0 <number> #rrggbb`, no continuation lines
    CustomColor = 0,
    /// Ellipse or circle, no continuation lines
    Ellipse = 1,
    /// Polyline family: arrows, optional picture line, points
    Polyline = 2,
    /// Spline: arrows, points, shape factors
    Spline = 3,
    /// Text with inline payload
    Text = 4,
    /// Arc: arrows only
    Arc = 5,
    /// Opens a compound; followed by its bounds
    CompoundBegin = 6,
    /// Closes the innermost compound
    CompoundEnd = -6,
}

impl RecordCode {
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(RecordCode::CustomColor),
            1 => Some(RecordCode::Ellipse),
            2 => Some(RecordCode::Polyline),
            3 => Some(RecordCode::Spline),
            4 => Some(RecordCode::Text),
            5 => Some(RecordCode::Arc),
            6 => Some(RecordCode::CompoundBegin),
            -6 => Some(RecordCode::CompoundEnd),
            _ => None,
        }
    }

    pub fn to_value(self) -> i32 {
        self as i32
    }
}
