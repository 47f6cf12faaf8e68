//! Integration tests for fig reading

mod common;

use common::{kind_names, object_count, read, read_strict, with_header, MINIMAL, SAMPLE};
use figrust::entities::{EllipseShape, EntityType, PolylineKind, SplineKind};
use figrust::types::{Alignment, ArrowStyle, ArrowType, Font, Vector2};
use figrust::{
    Container, FigDocument, FigError, FigReader, NotificationType, Orientation, PaperSize,
};
use std::io::Write;

const OPEN_LINE: &str = "2 1 0 1 0 7 50 -1 -1 0.000 0 0 -1 0 0 2\n\t0 0 10 10\n";

#[test]
fn test_reader_from_nonexistent_file() {
    let result = FigReader::from_file("nonexistent.fig");
    assert!(matches!(result, Err(FigError::Io(_))));
}

#[test]
fn test_read_minimal() {
    let doc = read(MINIMAL);
    assert_eq!(doc.entity_count(), 0);
    assert_eq!(doc.page, FigDocument::new().page);
    assert!(doc.comment.is_none());
    assert!(doc.trailing_comment.is_none());
}

#[test]
fn test_read_sample_structure() {
    let doc = read(SAMPLE);
    assert_eq!(doc.version, "3.2");
    assert_eq!(doc.page.orientation, Orientation::Landscape);
    assert_eq!(doc.page.paper_size, PaperSize::A4);
    assert_eq!(doc.comment.as_deref(), Some(" drawing comment"));
    assert_eq!(doc.trailing_comment.as_deref(), Some(" end of file"));
    assert_eq!(doc.colors.len(), 2);
    assert_eq!(doc.colors.get(33).unwrap().hex_code(), "#ff8000");
    assert!(doc.notifications.is_empty());

    assert_eq!(doc.entity_count(), 6);
    assert_eq!(object_count(&doc), 7);
    assert_eq!(
        kind_names(&doc),
        vec![
            "compound", "polyline", "text", "polyline", "ellipse", "arc", "spline", "polyline"
        ]
    );
    assert_eq!(doc.layers(), vec![40, 50, 60]);
}

#[test]
fn test_read_sample_objects() {
    let doc = read(SAMPLE);
    let entities = doc.entities();

    let EntityType::Compound(group) = &entities[0] else {
        panic!("expected a compound");
    };
    let EntityType::Text(text) = &group.children()[1] else {
        panic!("expected text inside the compound");
    };
    assert_eq!(text.text, "Hello");
    assert_eq!(text.alignment, Alignment::Center);
    assert_eq!(text.font, Some(Font::HELVETICA));
    assert_eq!(text.font_size, 12.0);
    assert_eq!(text.common.depth, 40);

    let EntityType::Polyline(polygon) = &entities[1] else {
        panic!("expected the polygon");
    };
    assert_eq!(polygon.kind, PolylineKind::Polygon);
    assert_eq!(polygon.points.len(), 3);
    assert_eq!(polygon.common.comment.as_deref(), Some(" closed polygon"));
    assert_eq!(polygon.common.pen_color.index(), 33);
    assert_eq!(polygon.common.line_width, 2);

    let EntityType::Ellipse(circle) = &entities[2] else {
        panic!("expected the circle");
    };
    assert_eq!(circle.shape, EllipseShape::Circle);
    assert_eq!((circle.radius_x, circle.radius_y), (300, 300));
    assert_eq!(circle.sub_type(), 3);

    let EntityType::Arc(arc) = &entities[3] else {
        panic!("expected the arc");
    };
    assert_eq!(arc.center, Vector2::new(6000.0, 1000.0));
    let arrow = arc.common.forward_arrow.unwrap();
    assert_eq!(arrow.arrow_type, ArrowType::CLOSED);
    assert_eq!(arrow.style, ArrowStyle::Filled);
    assert_eq!(arrow.height, 120.0);
    assert!(arc.common.backward_arrow.is_none());

    let EntityType::Spline(spline) = &entities[4] else {
        panic!("expected the spline");
    };
    assert_eq!(spline.kind, SplineKind::Interpolated);
    assert!(!spline.closed);
    assert_eq!(spline.shape_factors, vec![0.0, -1.0, 0.0]);

    let EntityType::Polyline(picture) = &entities[5] else {
        panic!("expected the picture");
    };
    assert_eq!(picture.kind, PolylineKind::PictureBBox);
    assert_eq!(picture.filename.as_deref(), Some("photo.png"));
    assert!(!picture.flipped);
    assert_eq!(picture.points.len(), 4);
}

#[test]
fn test_handles_are_unique() {
    let doc = read(SAMPLE);
    let mut handles: Vec<u64> = doc.all_objects(true).map(|e| e.handle().value()).collect();
    assert!(handles.iter().all(|h| *h != 0));
    let count = handles.len();
    handles.sort_unstable();
    handles.dedup();
    assert_eq!(handles.len(), count);
}

#[test]
fn test_unknown_object_code_reports_physical_line() {
    // comment lines count towards the line number
    let text = with_header("# first\n# second\n99 1 2\n");
    let err = FigReader::from_text(&text).read().unwrap_err();
    assert_eq!(err.line(), Some(12));
    let message = err.to_string();
    assert!(message.contains("line 12"));
    assert!(message.contains("99 1 2"));
}

#[test]
fn test_invalid_field_value() {
    let text = with_header("2 1 0 one 0 7 50 -1 -1 0.000 0 0 -1 0 0 2\n\t0 0 10 10\n");
    let err = FigReader::from_text(&text).read().unwrap_err();
    assert_eq!(err.line(), Some(10));
    assert!(err.to_string().contains("line width"));
}

#[test]
fn test_compound_end_without_begin() {
    let err = FigReader::from_text(&with_header("-6\n")).read().unwrap_err();
    assert_eq!(err.line(), Some(10));
    assert!(err.to_string().contains("Unbalanced compound"));
}

#[test]
fn test_unclosed_compound() {
    let text = with_header(&format!("6 0 0 10 10\n{}", OPEN_LINE));
    let err = FigReader::from_text(&text).read().unwrap_err();
    assert_eq!(err.line(), Some(10));
    assert!(err.to_string().contains("still open"));
}

#[test]
fn test_nested_compounds() {
    let text = with_header(&format!("6 0 0 0 0\n6 0 0 0 0\n{}-6\n{}-6\n", OPEN_LINE, OPEN_LINE));
    let doc = read(&text);
    assert_eq!(doc.entity_count(), 1);
    let outer = doc.entities()[0].as_compound().unwrap();
    assert_eq!(outer.len(), 2);
    let inner = outer.children()[0].as_compound().unwrap();
    assert_eq!(inner.len(), 1);
    assert_eq!(
        kind_names(&doc),
        vec!["compound", "compound", "polyline", "polyline"]
    );
}

#[test]
fn test_missing_continuation_lines() {
    let text = with_header("3 0 0 1 0 7 50 -1 -1 0.000 0 0 0 2\n\t0 0 10 10\n");
    let err = FigReader::from_text(&text).read().unwrap_err();
    assert!(matches!(err, FigError::Parse { line: 10, .. }));
}

#[test]
fn test_truncated_header() {
    let err = FigReader::from_text("#FIG 3.2\nPortrait\nCenter\nMetric\n")
        .read()
        .unwrap_err();
    assert!(err.to_string().contains("header ended after 3 of 8 lines"));
}

#[test]
fn test_other_version_is_read_with_notification() {
    let text = MINIMAL.replacen("3.2", "3.1", 1);
    let doc = read(&text);
    assert_eq!(doc.version, "3.1");
    assert_eq!(doc.notifications.len(), 1);
    assert!(doc.notifications.has_type(NotificationType::NotSupported));
    assert!(!doc.notifications.has_type(NotificationType::Warning));
    assert_eq!(doc.notifications.iter().next().unwrap().line, Some(1));
}

#[test]
fn test_unknown_paper_size_is_kept() {
    let text = MINIMAL.replacen("A4", "Folio", 1);
    let doc = read(&text);
    assert_eq!(doc.page.paper_size.name(), "Folio");
    let notification = doc.notifications.iter().next().unwrap();
    assert_eq!(notification.notification_type, NotificationType::NotSupported);
    assert_eq!(notification.line, Some(5));
    assert!(doc.to_fig_string().unwrap().contains("\nFolio\n"));
}

#[test]
fn test_odd_coordinate_count_warns() {
    let text = with_header("2 1 0 1 0 7 50 -1 -1 0.000 0 0 -1 0 0 2\n\t0 0 10 10 5\n");
    let doc = read(&text);
    assert_eq!(doc.notifications.len(), 1);
    let EntityType::Polyline(p) = &doc.entities()[0] else {
        panic!("expected a polyline");
    };
    assert_eq!(p.points.len(), 2);
}

#[test]
fn test_polygon_without_closing_point_is_kept() {
    let text = with_header("2 3 0 1 0 7 50 -1 -1 0.000 0 0 -1 0 0 3\n\t0 0 10 0 10 10\n");
    let doc = read(&text);
    assert_eq!(doc.notifications.len(), 1);
    let EntityType::Polyline(p) = &doc.entities()[0] else {
        panic!("expected a polyline");
    };
    assert_eq!(p.points.len(), 3);
}

#[test]
fn test_closed_spline_duplicate_is_dropped() {
    let text = with_header("3 1 0 1 0 7 50 -1 -1 0.000 0 0 0 4\n\t0 0 10 0 10 10 0 0\n\t1.0 1.0 1.0 1.0\n");
    let doc = read(&text);
    let EntityType::Spline(s) = &doc.entities()[0] else {
        panic!("expected a spline");
    };
    assert!(s.closed);
    assert_eq!(s.points.len(), 3);
    assert_eq!(s.shape_factors.len(), 3);
    assert!(s.validate().is_ok());
}

#[test]
fn test_strict_mode_rejects_extra_shape_factors() {
    let text = with_header("3 0 0 1 0 7 50 -1 -1 0.000 0 0 0 2\n\t0 0 10 10\n\t0.0 0.0 0.0\n");
    assert_eq!(read(&text).notifications.len(), 1);
    let err = read_strict(&text).unwrap_err();
    assert_eq!(err.line(), Some(12));
}

#[test]
fn test_crlf_and_blank_lines() {
    let text = with_header(OPEN_LINE).replace('\n', "\r\n") + "\r\n\r\n";
    let doc = read(&text);
    assert_eq!(doc.entity_count(), 1);
}

#[test]
fn test_read_file_remembers_name() {
    let mut file = tempfile::Builder::new().suffix(".fig").tempfile().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    let doc = FigDocument::read_file(file.path()).unwrap();
    assert_eq!(doc.filename.as_deref(), Some(file.path()));
    assert_eq!(doc.entity_count(), 6);
}

#[test]
fn test_file_errors_name_the_file() {
    let mut file = tempfile::Builder::new().suffix(".fig").tempfile().unwrap();
    file.write_all(with_header("7 0 0\n").as_bytes()).unwrap();
    let err = FigDocument::read_file(file.path()).unwrap_err();
    let name = file.path().display().to_string();
    assert!(err.to_string().contains(&name));
}

#[test]
fn test_parse_via_from_str() {
    let doc: FigDocument = SAMPLE.parse().unwrap();
    assert_eq!(doc.entity_count(), 6);
    assert!("not a fig file".parse::<FigDocument>().is_err());
}
