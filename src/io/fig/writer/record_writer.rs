//! Object records

use super::field_writer::{format_number, FieldWriter};
use super::FigWriterConfiguration;
use crate::entities::{
    Arc, Compound, Ellipse, Entity, EntityType, ObjectCommon, Polyline, PolylineKind, Spline,
    Text,
};
use crate::io::fig::codes::RecordCode;
use crate::io::fig::escape::escape_text;
use crate::types::{Arrow, Point};

/// Writes drawing objects, recursing into compounds
pub struct RecordWriter<'c> {
    fields: FieldWriter,
    config: &'c FigWriterConfiguration,
    records: usize,
}

impl<'c> RecordWriter<'c> {
    pub fn new(config: &'c FigWriterConfiguration) -> Self {
        Self {
            fields: FieldWriter::new(config.continuation_indent.clone()),
            config,
            records: 0,
        }
    }

    pub fn fields(&mut self) -> &mut FieldWriter {
        &mut self.fields
    }

    /// Number of object records written so far
    pub fn record_count(&self) -> usize {
        self.records
    }

    pub fn into_string(self) -> String {
        self.fields.into_string()
    }

    pub fn write_entity(&mut self, entity: &EntityType) {
        match entity {
            EntityType::Arc(arc) => self.write_arc(arc),
            EntityType::Ellipse(ellipse) => self.write_ellipse(ellipse),
            EntityType::Polyline(polyline) => self.write_polyline(polyline),
            EntityType::Spline(spline) => self.write_spline(spline),
            EntityType::Text(text) => self.write_text(text),
            EntityType::Compound(compound) => self.write_compound(compound),
        }
    }

    /// Line style through style value, common to all shapes but text
    fn write_style(&mut self, common: &ObjectCommon) {
        self.fields
            .int(common.line_style.to_value())
            .int(common.line_width)
            .int(common.pen_color.index())
            .int(common.fill_color.index())
            .int(common.depth)
            .int(common.pen_style)
            .int(common.fill_style.0)
            .float(common.style_value);
    }

    fn write_arrow_flags(&mut self, common: &ObjectCommon) {
        self.fields
            .flag(common.forward_arrow.is_some())
            .flag(common.backward_arrow.is_some());
    }

    fn write_arrows(&mut self, common: &ObjectCommon) {
        for arrow in [&common.forward_arrow, &common.backward_arrow]
            .into_iter()
            .flatten()
        {
            self.write_arrow(arrow);
        }
    }

    fn write_arrow(&mut self, arrow: &Arrow) {
        self.fields
            .begin_continuation()
            .int(arrow.arrow_type.0)
            .int(arrow.style.to_value())
            .float(arrow.thickness)
            .float(arrow.width)
            .float(arrow.height);
    }

    fn write_points(&mut self, points: impl Iterator<Item = Point>) {
        let per_line = self.config.points_per_line.max(1);
        for (i, point) in points.enumerate() {
            if i % per_line == 0 {
                self.fields.begin_continuation();
            }
            self.fields.int(point.x).int(point.y);
        }
        self.fields.end_line();
    }

    fn begin_record(&mut self, comment: Option<&str>, code: RecordCode) {
        self.records += 1;
        self.fields.comment(comment);
        self.fields.begin_line().int(code.to_value());
    }

    fn write_arc(&mut self, arc: &Arc) {
        self.begin_record(arc.common.comment.as_deref(), RecordCode::Arc);
        self.fields.int(arc.kind.to_value());
        self.write_style(&arc.common);
        self.fields
            .int(arc.common.cap_style.to_value())
            .int(arc.direction.to_value());
        self.write_arrow_flags(&arc.common);
        self.fields.float(arc.center.x).float(arc.center.y);
        for point in &arc.points {
            self.fields.int(point.x).int(point.y);
        }
        self.write_arrows(&arc.common);
        self.fields.end_line();
    }

    fn write_ellipse(&mut self, ellipse: &Ellipse) {
        self.begin_record(ellipse.common.comment.as_deref(), RecordCode::Ellipse);
        self.fields.int(ellipse.sub_type());
        self.write_style(&ellipse.common);
        self.fields
            .int(1)
            .float(ellipse.normalized_angle())
            .int(ellipse.center.x)
            .int(ellipse.center.y)
            .int(ellipse.radius_x)
            .int(ellipse.radius_y)
            .int(ellipse.start.x)
            .int(ellipse.start.y)
            .int(ellipse.end.x)
            .int(ellipse.end.y);
        self.fields.end_line();
    }

    fn write_polyline(&mut self, polyline: &Polyline) {
        let point_count = polyline.output_points().count();
        self.begin_record(polyline.common.comment.as_deref(), RecordCode::Polyline);
        self.fields.int(polyline.kind.to_value());
        self.write_style(&polyline.common);
        self.fields
            .int(polyline.common.join_style.to_value())
            .int(polyline.common.cap_style.to_value())
            .int(polyline.corner_radius);
        self.write_arrow_flags(&polyline.common);
        self.fields.raw(&point_count.to_string());
        self.write_arrows(&polyline.common);
        if polyline.kind == PolylineKind::PictureBBox {
            self.fields
                .begin_continuation()
                .flag(polyline.flipped)
                .raw(polyline.filename.as_deref().unwrap_or_default());
        }
        self.write_points(polyline.output_points());
    }

    fn write_spline(&mut self, spline: &Spline) {
        self.begin_record(spline.common.comment.as_deref(), RecordCode::Spline);
        self.fields.int(spline.sub_type());
        self.write_style(&spline.common);
        self.fields.int(spline.common.cap_style.to_value());
        self.write_arrow_flags(&spline.common);
        self.fields.raw(&spline.points.len().to_string());
        self.write_arrows(&spline.common);
        self.write_points(spline.points.iter().copied());

        let per_line = self.config.shape_factors_per_line.max(1);
        for chunk in spline.shape_factors.chunks(per_line) {
            self.fields.begin_continuation();
            for factor in chunk {
                self.fields.float(*factor);
            }
        }
        self.fields.end_line();
    }

    fn write_text(&mut self, text: &Text) {
        self.begin_record(text.common.comment.as_deref(), RecordCode::Text);
        self.fields
            .int(text.alignment.to_value())
            .int(text.common.pen_color.index())
            .int(text.common.depth)
            .int(text.common.pen_style)
            .int(text.resolved_font().0)
            .raw(&format_number(text.font_size))
            .float(text.angle)
            .int(text.font_flags.bits())
            .rounded(text.approximate_height)
            .rounded(text.approximate_length)
            .int(text.position.x)
            .int(text.position.y);
        let payload = escape_text(&format!("{}\x01", text.text));
        self.fields.append(" ").append(&payload);
        self.fields.end_line();
    }

    /// Compounds without geometry get zero bounds
    fn write_compound(&mut self, compound: &Compound) {
        let (min, max) = compound
            .bounding_box()
            .map(|b| b.to_points())
            .unwrap_or((Point::ORIGIN, Point::ORIGIN));
        self.begin_record(compound.comment.as_deref(), RecordCode::CompoundBegin);
        self.fields.int(min.x).int(min.y).int(max.x).int(max.y);
        for child in &compound.children {
            self.write_entity(child);
        }
        self.fields.begin_line().int(RecordCode::CompoundEnd.to_value());
        self.fields.end_line();
    }
}
