//! Line and field formatting

/// Format a float field: integral values as `100.0`, others with the
/// shortest representation that reads back to the same value.
pub fn format_float(value: f64) -> String {
    if value == value.trunc() && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Format a float that xfig usually writes as an integer (font sizes)
pub fn format_number(value: f64) -> String {
    if value == value.trunc() && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Round half away from zero for integer fields held as floats
pub fn round_field(value: f64) -> i64 {
    value.round() as i64
}

/// Accumulates output lines of whitespace-separated fields
pub struct FieldWriter {
    buffer: String,
    indent: String,
    line_open: bool,
    fields_in_line: usize,
}

impl FieldWriter {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            indent: indent.into(),
            line_open: false,
            fields_in_line: 0,
        }
    }

    /// Write comment lines, each prefixed with `#`
    pub fn comment(&mut self, comment: Option<&str>) {
        let Some(comment) = comment else {
            return;
        };
        self.end_line();
        for line in comment.split('\n') {
            self.buffer.push('#');
            self.buffer.push_str(line);
            self.buffer.push('\n');
        }
    }

    /// Start a record line
    pub fn begin_line(&mut self) -> &mut Self {
        self.end_line();
        self.line_open = true;
        self
    }

    /// Start a continuation line
    pub fn begin_continuation(&mut self) -> &mut Self {
        self.end_line();
        self.buffer.push_str(&self.indent);
        self.line_open = true;
        self
    }

    pub fn end_line(&mut self) {
        if self.line_open {
            self.buffer.push('\n');
            self.line_open = false;
            self.fields_in_line = 0;
        }
    }

    /// Append a preformatted field
    pub fn raw(&mut self, field: &str) -> &mut Self {
        if !self.line_open {
            self.line_open = true;
        }
        if self.fields_in_line > 0 {
            self.buffer.push(' ');
        }
        self.buffer.push_str(field);
        self.fields_in_line += 1;
        self
    }

    pub fn int(&mut self, value: i32) -> &mut Self {
        self.raw(&value.to_string())
    }

    pub fn flag(&mut self, value: bool) -> &mut Self {
        self.int(value as i32)
    }

    pub fn float(&mut self, value: f64) -> &mut Self {
        self.raw(&format_float(value))
    }

    /// Float written as a rounded integer
    pub fn rounded(&mut self, value: f64) -> &mut Self {
        self.raw(&round_field(value).to_string())
    }

    /// Append text verbatim to the current line, without separator
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Write a complete line verbatim
    pub fn line(&mut self, text: &str) {
        self.end_line();
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    pub fn into_string(mut self) -> String {
        self.end_line();
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(100.0), "100.0");
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(-1.0), "-1.0");
        assert_eq!(format_float(4.125), "4.125");
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(10.5), "10.5");
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_field(2.5), 3);
        assert_eq!(round_field(-2.5), -3);
        assert_eq!(round_field(135.4), 135);
    }

    #[test]
    fn test_lines_and_comments() {
        let mut w = FieldWriter::new("\t");
        w.comment(Some("first\nsecond"));
        w.begin_line().int(2).int(1).float(3.0);
        w.begin_continuation().int(0).int(0);
        w.comment(None);
        w.comment(Some(""));
        w.comment(Some("last\n"));
        assert_eq!(w.into_string(), "#first\n#second\n2 1 3.0\n\t0 0\n#\n#last\n#\n");
    }
}
