//! Property tests for escaping and object round trips

mod common;

use common::read;
use figrust::entities::{EntityType, Polyline, PolylineKind, Text};
use figrust::io::fig::{escape_text, unescape_text};
use figrust::types::Point;
use figrust::FigDocument;
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point> {
    (-20000i32..20000, -20000i32..20000).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn escape_round_trips(text in any::<String>()) {
        prop_assert_eq!(unescape_text(&escape_text(&text)), text);
    }

    #[test]
    fn escaped_text_is_single_line_printable(text in "[\\x00-\\x08\\x0a-\\x7f\\u{80}-\\u{ff}]{0,40}") {
        let escaped = escape_text(&text);
        prop_assert!(escaped.chars().all(|c| (' '..='~').contains(&c)));
    }

    #[test]
    fn text_object_round_trips(text in "[ -~\\t\\n\\r\\u{a1}-\\u{17f}]{0,40}", x in -5000i32..5000, y in -5000i32..5000) {
        let mut doc = FigDocument::new();
        doc.append(Text::new(Point::new(x, y), text.clone()));
        let again = read(&doc.to_fig_string().unwrap());
        let EntityType::Text(t) = &again.entities()[0] else {
            panic!("expected text");
        };
        prop_assert_eq!(&t.text, &text);
        prop_assert_eq!(t.position, Point::new(x, y));
    }

    #[test]
    fn polyline_round_trips(
        points in prop::collection::vec(point(), 1..40),
        closed in any::<bool>(),
        depth in 0i32..1000,
        width in 0i32..20,
    ) {
        prop_assume!(!closed || points.len() < 2 || points.first() != points.last());
        let kind = if closed { PolylineKind::Polygon } else { PolylineKind::Polyline };
        let mut polyline = Polyline::new(kind, points);
        polyline.common.depth = depth;
        polyline.common.line_width = width;

        let mut doc = FigDocument::new();
        doc.append(polyline);
        let again = read(&doc.to_fig_string().unwrap());
        prop_assert_eq!(again.entities(), doc.entities());
    }
}
