//! Record assembly
//!
//! Turns classified lines into document state: the eight header lines,
//! custom colors, single-line records and multi-line records that consume
//! continuation lines until they are complete. Compounds are kept on an
//! explicit stack; completed objects go to the innermost open compound or
//! to the document.

use crate::document::{
    FigDocument, Justification, Orientation, Pagination, PaperSize, Units, FIG_VERSION,
};
use crate::entities::{
    Arc, ArcKind, Compound, Ellipse, EntityType, ObjectCommon, Polyline, PolylineKind, Spline,
    SplineKind, Text,
};
use crate::error::{FigError, Result};
use crate::io::fig::codes::{RecordCode, FIG_MAGIC, HEADER_LINES, TEXT_TERMINATOR};
use crate::io::fig::escape::unescape_text;
use crate::notification::NotificationType;
use crate::tables::CustomColor;
use crate::types::{
    Alignment, ArcDirection, Arrow, ArrowStyle, ArrowType, CapStyle, Color, FillStyle, Font,
    FontFlags, JoinStyle, LineStyle, Point, Vector2,
};

/// Sequential access to the whitespace-separated fields of one line
struct Fields<'t> {
    tokens: &'t [&'t str],
    pos: usize,
}

impl<'t> Fields<'t> {
    fn new(tokens: &'t [&'t str]) -> Self {
        Fields { tokens, pos: 0 }
    }

    fn token(&mut self, field: &'static str) -> Result<&'t str> {
        let token = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or_else(|| FigError::Custom(format!("missing field '{}'", field)))?;
        self.pos += 1;
        Ok(token)
    }

    fn int(&mut self, field: &'static str) -> Result<i32> {
        let token = self.token(field)?;
        token.parse().map_err(|_| FigError::InvalidValue {
            field,
            value: token.to_string(),
        })
    }

    fn float(&mut self, field: &'static str) -> Result<f64> {
        let token = self.token(field)?;
        token.parse().map_err(|_| FigError::InvalidValue {
            field,
            value: token.to_string(),
        })
    }

    fn flag(&mut self, field: &'static str) -> Result<bool> {
        Ok(self.int(field)? != 0)
    }

    fn point(&mut self, field: &'static str) -> Result<Point> {
        Ok(Point::new(self.int(field)?, self.int(field)?))
    }

    /// Integer field restricted to the values `convert` accepts
    fn coded<T>(&mut self, field: &'static str, convert: fn(i32) -> Option<T>) -> Result<T> {
        let value = self.int(field)?;
        convert(value).ok_or(FigError::InvalidValue {
            field,
            value: value.to_string(),
        })
    }
}

/// Style fields shared by arcs, ellipses, polylines and splines, in file order
fn read_common(fields: &mut Fields<'_>, common: &mut ObjectCommon) -> Result<()> {
    common.line_style = fields.coded("line style", LineStyle::from_value)?;
    common.line_width = fields.int("line width")?;
    common.pen_color = Color::from_index(fields.int("pen color")?);
    common.fill_color = Color::from_index(fields.int("fill color")?);
    common.depth = fields.int("depth")?;
    common.pen_style = fields.int("pen style")?;
    common.fill_style = FillStyle(fields.int("area fill")?);
    common.style_value = fields.float("style value")?;
    Ok(())
}

fn read_arrow(tokens: &[&str]) -> Result<Arrow> {
    let mut fields = Fields::new(tokens);
    Ok(Arrow {
        arrow_type: ArrowType(fields.int("arrow type")?),
        style: fields.coded("arrow style", ArrowStyle::from_value)?,
        thickness: fields.float("arrow thickness")?,
        width: fields.float("arrow width")?,
        height: fields.float("arrow height")?,
    })
}

/// Problems that do not abort the read
enum Issue {
    /// Data beyond what the record declared; an error in strict mode
    Excess(String),
    Warning(String),
}

enum PendingShape {
    Arc(Arc),
    Polyline(Polyline),
    Spline(Spline),
}

/// A multi-line record waiting for its continuation lines
struct PendingRecord {
    shape: PendingShape,
    forward_arrow: bool,
    backward_arrow: bool,
    declared_points: usize,
    coords: Vec<i32>,
    shape_factors: Vec<f64>,
    line: usize,
    text: String,
}

impl PendingRecord {
    fn new(shape: PendingShape, arrows: (bool, bool), declared_points: usize) -> Self {
        PendingRecord {
            shape,
            forward_arrow: arrows.0,
            backward_arrow: arrows.1,
            declared_points,
            coords: Vec::new(),
            shape_factors: Vec::new(),
            line: 0,
            text: String::new(),
        }
    }

    fn common_mut(&mut self) -> &mut ObjectCommon {
        match &mut self.shape {
            PendingShape::Arc(a) => &mut a.common,
            PendingShape::Polyline(p) => &mut p.common,
            PendingShape::Spline(s) => &mut s.common,
        }
    }

    fn awaits_picture(&self) -> bool {
        matches!(&self.shape, PendingShape::Polyline(p)
            if p.kind == PolylineKind::PictureBBox && p.filename.is_none())
    }

    fn points_complete(&self) -> bool {
        self.coords.len() >= self.declared_points * 2
    }

    fn is_complete(&self) -> bool {
        if self.forward_arrow || self.backward_arrow || self.awaits_picture() {
            return false;
        }
        match self.shape {
            PendingShape::Arc(_) => true,
            PendingShape::Polyline(_) => self.points_complete(),
            PendingShape::Spline(_) => {
                self.points_complete() && self.shape_factors.len() >= self.declared_points
            }
        }
    }

    /// Consume one continuation line
    fn consume(&mut self, tokens: &[&str], issues: &mut Vec<Issue>) -> Result<()> {
        if self.forward_arrow {
            self.common_mut().forward_arrow = Some(read_arrow(tokens)?);
            self.forward_arrow = false;
            return Ok(());
        }
        if self.backward_arrow {
            self.common_mut().backward_arrow = Some(read_arrow(tokens)?);
            self.backward_arrow = false;
            return Ok(());
        }
        if self.awaits_picture() {
            let mut fields = Fields::new(tokens);
            let flipped = fields.flag("picture flipped")?;
            let filename = tokens.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();
            if let PendingShape::Polyline(p) = &mut self.shape {
                p.flipped = flipped;
                p.filename = Some(filename);
            }
            return Ok(());
        }
        if let PendingShape::Arc(_) = self.shape {
            issues.push(Issue::Excess("unexpected continuation line after arc".to_string()));
            return Ok(());
        }

        if !self.points_complete() {
            let mut tokens = tokens;
            if tokens.len() % 2 == 1 {
                issues.push(Issue::Warning(format!(
                    "odd number of coordinates ({}), last one ignored",
                    tokens.len()
                )));
                tokens = &tokens[..tokens.len() - 1];
            }
            let mut fields = Fields::new(tokens);
            for _ in 0..tokens.len() {
                self.coords.push(fields.int("coordinate")?);
            }
            let limit = self.declared_points * 2;
            if self.coords.len() > limit {
                issues.push(Issue::Excess(format!(
                    "{} points found, {} declared",
                    self.coords.len() / 2,
                    self.declared_points
                )));
                self.coords.truncate(limit);
            }
            return Ok(());
        }

        // only splines get here: shape factors
        let mut fields = Fields::new(tokens);
        for _ in 0..tokens.len() {
            self.shape_factors.push(fields.float("shape factor")?);
        }
        if self.shape_factors.len() > self.declared_points {
            issues.push(Issue::Excess(format!(
                "{} shape factors found, {} declared",
                self.shape_factors.len(),
                self.declared_points
            )));
            self.shape_factors.truncate(self.declared_points);
        }
        Ok(())
    }

    fn finish(self, issues: &mut Vec<Issue>) -> EntityType {
        let points: Vec<Point> = self
            .coords
            .chunks_exact(2)
            .map(|c| Point::new(c[0], c[1]))
            .collect();
        match self.shape {
            PendingShape::Arc(arc) => arc.into(),
            PendingShape::Polyline(mut polyline) => {
                polyline.points = points;
                if polyline.is_closed() && polyline.points.len() >= 2 {
                    if polyline.points.first() == polyline.points.last() {
                        polyline.points.pop();
                    } else {
                        issues.push(Issue::Warning(
                            "closed polyline does not repeat its first point, kept as is"
                                .to_string(),
                        ));
                    }
                }
                polyline.into()
            }
            PendingShape::Spline(mut spline) => {
                spline.points = points;
                spline.shape_factors = self.shape_factors;
                spline.normalize_closing_point();
                spline.into()
            }
        }
    }
}

/// A compound that has been opened but not closed yet
struct OpenCompound {
    compound: Compound,
    line: usize,
    text: String,
}

/// State machine fed with one physical line at a time
pub struct RecordReader<'a> {
    document: &'a mut FigDocument,
    source_name: String,
    strict: bool,
    header_lines: usize,
    comment: Vec<String>,
    pending: Option<PendingRecord>,
    stack: Vec<OpenCompound>,
    last_line: usize,
}

impl<'a> RecordReader<'a> {
    pub fn new(document: &'a mut FigDocument, source_name: impl Into<String>, strict: bool) -> Self {
        RecordReader {
            document,
            source_name: source_name.into(),
            strict,
            header_lines: 0,
            comment: Vec::new(),
            pending: None,
            stack: Vec::new(),
            last_line: 0,
        }
    }

    /// True until the first header data line has been read
    pub fn in_preamble(&self) -> bool {
        self.header_lines == 0
    }

    /// Process one physical line
    pub fn feed(&mut self, line_number: usize, line: &str) -> Result<()> {
        self.last_line = line_number;
        self.process(line_number, line)
            .map_err(|e| e.at_line(&self.source_name, line_number, line))
    }

    /// Check for unterminated constructs and keep trailing comments
    pub fn finish(mut self) -> Result<()> {
        if self.header_lines < HEADER_LINES {
            return Err(FigError::UnexpectedEof(format!(
                "header ended after {} of {} lines",
                self.header_lines, HEADER_LINES
            ))
            .at_line(&self.source_name, self.last_line, ""));
        }
        if let Some(pending) = self.pending.take() {
            return Err(FigError::UnexpectedEof(
                "record is missing continuation lines".to_string(),
            )
            .at_line(&self.source_name, pending.line, &pending.text));
        }
        if let Some(open) = self.stack.last() {
            return Err(FigError::UnbalancedCompound(format!(
                "{} compound(s) still open at end of input",
                self.stack.len()
            ))
            .at_line(&self.source_name, open.line, &open.text));
        }
        self.document.trailing_comment = self.take_comment();
        Ok(())
    }

    fn process(&mut self, line_number: usize, line: &str) -> Result<()> {
        if let Some(comment) = line.strip_prefix('#') {
            if self.in_preamble() {
                self.read_preamble_comment(line_number, line);
            } else {
                self.comment.push(comment.to_string());
            }
            return Ok(());
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        if self.header_lines < HEADER_LINES {
            self.read_header_line(line_number, trimmed)?;
            self.header_lines += 1;
            return Ok(());
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        match self.pending.take() {
            Some(mut pending) => {
                let mut issues = Vec::new();
                pending.consume(&tokens, &mut issues)?;
                self.report(line_number, issues)?;
                self.complete_or_keep(pending)
            }
            None => self.read_record(line_number, trimmed, &tokens),
        }
    }

    fn read_preamble_comment(&mut self, line_number: usize, line: &str) {
        let Some(rest) = line.strip_prefix(FIG_MAGIC) else {
            return;
        };
        let version = rest.split_whitespace().next().unwrap_or_default();
        self.document.version = version.to_string();
        if version != FIG_VERSION {
            self.notify(
                NotificationType::NotSupported,
                line_number,
                format!("format version '{}' read as {}", version, FIG_VERSION),
            );
        }
    }

    fn read_header_line(&mut self, line_number: usize, line: &str) -> Result<()> {
        let page = &mut self.document.page;
        match self.header_lines {
            0 => page.orientation = Orientation::from_header(line),
            1 => page.justification = Justification::from_header(line),
            2 => page.units = Units::from_header(line),
            3 => {
                page.paper_size = PaperSize::from_name(line);
                if !page.paper_size.is_known() {
                    self.notify(
                        NotificationType::NotSupported,
                        line_number,
                        format!("unknown paper size '{}'", line),
                    );
                }
            }
            4 => {
                page.magnification = line.parse().map_err(|_| FigError::InvalidValue {
                    field: "magnification",
                    value: line.to_string(),
                })?
            }
            5 => page.pagination = Pagination::from_header(line),
            6 => {
                page.transparent_color = line.parse().map_err(|_| FigError::InvalidValue {
                    field: "transparent color",
                    value: line.to_string(),
                })?
            }
            _ => {
                let tokens: Vec<&str> = line.split_whitespace().collect();
                let mut fields = Fields::new(&tokens);
                page.resolution = fields.int("resolution")?;
                page.coordinate_system = fields.int("coordinate system")?;
                self.document.comment = self.take_comment();
            }
        }
        Ok(())
    }

    fn read_record(&mut self, line_number: usize, line: &str, tokens: &[&str]) -> Result<()> {
        let mut fields = Fields::new(tokens);
        let code = fields.int("object code")?;
        let code = RecordCode::from_value(code).ok_or_else(|| FigError::InvalidValue {
            field: "object code",
            value: code.to_string(),
        })?;
        tracing::trace!(line = line_number, ?code, "record");

        match code {
            RecordCode::CustomColor => {
                let index = fields.int("color number")?;
                let hex = fields.token("color value")?;
                self.document.colors.insert(CustomColor::new(index, hex)?)?;
            }
            RecordCode::Ellipse => {
                let mut ellipse = read_ellipse(&mut fields)?;
                ellipse.common.comment = self.take_comment();
                self.complete(ellipse.into());
            }
            RecordCode::Text => {
                let mut text = read_text(line, &mut fields)?;
                text.common.comment = self.take_comment();
                self.complete(text.into());
            }
            RecordCode::Arc | RecordCode::Polyline | RecordCode::Spline => {
                let mut pending = match code {
                    RecordCode::Arc => read_arc(&mut fields)?,
                    RecordCode::Polyline => read_polyline(&mut fields)?,
                    _ => read_spline(&mut fields)?,
                };
                pending.common_mut().comment = self.take_comment();
                pending.line = line_number;
                pending.text = line.to_string();
                self.complete_or_keep(pending)?;
            }
            RecordCode::CompoundBegin => {
                // stored bounds are recomputed on output
                let mut compound = Compound::new();
                compound.comment = self.take_comment();
                self.stack.push(OpenCompound {
                    compound,
                    line: line_number,
                    text: line.to_string(),
                });
            }
            RecordCode::CompoundEnd => {
                let open = self.stack.pop().ok_or_else(|| {
                    FigError::UnbalancedCompound("compound end without begin".to_string())
                })?;
                self.complete(open.compound.into());
            }
        }
        Ok(())
    }

    fn complete_or_keep(&mut self, pending: PendingRecord) -> Result<()> {
        if pending.is_complete() {
            let line = pending.line;
            let mut issues = Vec::new();
            let entity = pending.finish(&mut issues);
            self.report(line, issues)?;
            self.complete(entity);
        } else {
            self.pending = Some(pending);
        }
        Ok(())
    }

    fn complete(&mut self, entity: EntityType) {
        match self.stack.last_mut() {
            Some(open) => open.compound.push(entity),
            None => {
                self.document.append(entity);
            }
        }
    }

    fn take_comment(&mut self) -> Option<String> {
        if self.comment.is_empty() {
            return None;
        }
        let comment = self.comment.join("\n");
        self.comment.clear();
        Some(comment)
    }

    fn report(&mut self, line: usize, issues: Vec<Issue>) -> Result<()> {
        for issue in issues {
            match issue {
                Issue::Excess(message) if self.strict => return Err(FigError::Custom(message)),
                Issue::Excess(message) | Issue::Warning(message) => self.warn(line, message),
            }
        }
        Ok(())
    }

    fn warn(&mut self, line: usize, message: String) {
        self.notify(NotificationType::Warning, line, message);
    }

    fn notify(&mut self, kind: NotificationType, line: usize, message: String) {
        tracing::warn!(source = %self.source_name, line, %kind, "{}", message);
        self.document.notifications.notify_at(kind, line, message);
    }
}

/// `1 sub ls lw pen fill depth ps fs sv dir angle cx cy rx ry sx sy ex ey`
fn read_ellipse(fields: &mut Fields<'_>) -> Result<Ellipse> {
    let mut ellipse = Ellipse::ellipse(Point::ORIGIN, 0, 0, 0.0);
    ellipse.change_type(fields.int("ellipse type")?)?;
    read_common(fields, &mut ellipse.common)?;
    fields.int("direction")?;
    ellipse.angle = fields.float("angle")?;
    ellipse.center = fields.point("center")?;
    ellipse.radius_x = fields.int("radius")?;
    ellipse.radius_y = fields.int("radius")?;
    ellipse.start = fields.point("start")?;
    ellipse.end = fields.point("end")?;
    Ok(ellipse)
}

/// `4 align pen depth ps font size angle flags height length x y text\001`
fn read_text(line: &str, fields: &mut Fields<'_>) -> Result<Text> {
    let payload = text_payload(line)
        .and_then(|p| p.strip_suffix(TEXT_TERMINATOR))
        .ok_or_else(|| FigError::Custom("text record without \\001 terminator".to_string()))?;

    let mut text = Text::new(Point::ORIGIN, unescape_text(payload));
    text.alignment = fields.coded("alignment", Alignment::from_value)?;
    text.common.pen_color = Color::from_index(fields.int("pen color")?);
    text.common.depth = fields.int("depth")?;
    text.common.pen_style = fields.int("pen style")?;
    let font = Font(fields.int("font")?);
    text.font_size = fields.float("font size")?;
    text.angle = fields.float("angle")?;
    text.font_flags = FontFlags::from_bits_retain(fields.int("font flags")?);
    // -1 only means "default" for PostScript fonts
    let postscript = text.font_flags.contains(FontFlags::POSTSCRIPT);
    text.font = Some(font).filter(|font| *font != Font::DEFAULT || !postscript);
    text.approximate_height = fields.float("height")?;
    text.approximate_length = fields.float("length")?;
    text.position = fields.point("position")?;
    Ok(text)
}

/// Everything after the 13th token and one separator character
fn text_payload(line: &str) -> Option<&str> {
    let mut rest = line;
    for _ in 0..13 {
        rest = rest.trim_start();
        let end = rest.find(char::is_whitespace)?;
        rest = &rest[end..];
    }
    let mut chars = rest.chars();
    chars.next()?;
    Some(chars.as_str())
}

/// `5 sub ls lw pen fill depth ps fs sv cap dir fwd bwd cx cy x1 y1 x2 y2 x3 y3`
fn read_arc(fields: &mut Fields<'_>) -> Result<PendingRecord> {
    let mut arc = Arc::default();
    arc.kind = fields.coded("arc type", ArcKind::from_value)?;
    read_common(fields, &mut arc.common)?;
    arc.common.cap_style = fields.coded("cap style", CapStyle::from_value)?;
    arc.direction = fields.coded("direction", ArcDirection::from_value)?;
    let arrows = (fields.flag("forward arrow")?, fields.flag("backward arrow")?);
    arc.center = Vector2::new(fields.float("center x")?, fields.float("center y")?);
    for point in arc.points.iter_mut() {
        *point = fields.point("arc point")?;
    }
    Ok(PendingRecord::new(PendingShape::Arc(arc), arrows, 0))
}

/// `2 sub ls lw pen fill depth ps fs sv join cap radius fwd bwd npoints`
fn read_polyline(fields: &mut Fields<'_>) -> Result<PendingRecord> {
    let kind = fields.coded("polyline type", PolylineKind::from_value)?;
    let mut polyline = Polyline::new(kind, Vec::new());
    read_common(fields, &mut polyline.common)?;
    polyline.common.join_style = fields.coded("join style", JoinStyle::from_value)?;
    polyline.common.cap_style = fields.coded("cap style", CapStyle::from_value)?;
    polyline.corner_radius = fields.int("radius")?;
    let arrows = (fields.flag("forward arrow")?, fields.flag("backward arrow")?);
    let declared = declared_count(fields.int("point count")?)?;
    Ok(PendingRecord::new(PendingShape::Polyline(polyline), arrows, declared))
}

/// `3 sub ls lw pen fill depth ps fs sv cap fwd bwd npoints`
fn read_spline(fields: &mut Fields<'_>) -> Result<PendingRecord> {
    let mut spline = Spline::new(SplineKind::Approximated, false, Vec::new());
    spline.change_type(fields.int("spline type")?)?;
    read_common(fields, &mut spline.common)?;
    spline.common.cap_style = fields.coded("cap style", CapStyle::from_value)?;
    let arrows = (fields.flag("forward arrow")?, fields.flag("backward arrow")?);
    let declared = declared_count(fields.int("point count")?)?;
    Ok(PendingRecord::new(PendingShape::Spline(spline), arrows, declared))
}

fn declared_count(value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| FigError::InvalidValue {
        field: "point count",
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "#FIG 3.2\nLandscape\nFlush Left\nInches\nLetter\n50.0\nMultiple\n-1\n1200 2\n";

    fn read(text: &str) -> Result<FigDocument> {
        let mut document = FigDocument::new();
        let mut reader = RecordReader::new(&mut document, "<test>", false);
        for (i, line) in text.lines().enumerate() {
            reader.feed(i + 1, line)?;
        }
        reader.finish()?;
        Ok(document)
    }

    #[test]
    fn test_header() {
        let doc = read(HEADER).unwrap();
        assert_eq!(doc.page.orientation, Orientation::Landscape);
        assert_eq!(doc.page.justification, Justification::FlushLeft);
        assert_eq!(doc.page.units, Units::Inches);
        assert_eq!(doc.page.paper_size, PaperSize::Letter);
        assert_eq!(doc.page.magnification, 50.0);
        assert_eq!(doc.page.pagination, Pagination::Multiple);
        assert_eq!(doc.page.transparent_color, -1);
        assert!(doc.notifications.is_empty());
    }

    #[test]
    fn test_truncated_header() {
        let err = read("#FIG 3.2\nPortrait\nCenter\n").unwrap_err();
        assert!(err.to_string().contains("header ended after 2 of 8 lines"));
    }

    #[test]
    fn test_text_payload() {
        let line = "4 0 0 50 -1 0 12 0.0 4 135 360 1000 2000  two spaces\\001";
        assert_eq!(text_payload(line), Some(" two spaces\\001"));
        assert_eq!(text_payload("4 0 0 50"), None);
    }

    #[test]
    fn test_polyline_with_arrow_and_comment() {
        let text = format!(
            "{}# the arrow\n2 1 0 1 0 7 50 -1 -1 0.000 0 0 -1 1 0 2\n\t1 1 1.00 60.00 120.00\n\t0 0 100 100\n",
            HEADER
        );
        let doc = read(&text).unwrap();
        let EntityType::Polyline(p) = &doc.entities()[0] else {
            panic!("expected a polyline");
        };
        assert_eq!(p.points, vec![Point::new(0, 0), Point::new(100, 100)]);
        assert_eq!(p.common.comment.as_deref(), Some(" the arrow"));
        let arrow = p.common.forward_arrow.unwrap();
        assert_eq!(arrow.arrow_type, ArrowType::CLOSED);
        assert_eq!(arrow.style, ArrowStyle::Filled);
        assert!(p.common.backward_arrow.is_none());
    }

    #[test]
    fn test_excess_points_warn_or_fail() {
        let text = format!("{}2 1 0 1 0 7 50 -1 -1 0.000 0 0 -1 0 0 2\n\t0 0 10 10 20 20\n", HEADER);
        let doc = read(&text).unwrap();
        assert_eq!(doc.notifications.len(), 1);
        let EntityType::Polyline(p) = &doc.entities()[0] else {
            panic!("expected a polyline");
        };
        assert_eq!(p.points.len(), 2);

        let mut document = FigDocument::new();
        let mut strict = RecordReader::new(&mut document, "<test>", true);
        let result: Result<()> = text
            .lines()
            .enumerate()
            .try_for_each(|(i, line)| strict.feed(i + 1, line));
        assert_eq!(result.unwrap_err().line(), Some(11));
    }

    #[test]
    fn test_unterminated_record() {
        let text = format!("{}2 1 0 1 0 7 50 -1 -1 0.000 0 0 -1 0 0 4\n\t0 0 10 10\n", HEADER);
        let err = read(&text).unwrap_err();
        assert!(matches!(err, FigError::Parse { line: 10, .. }));
    }
}
