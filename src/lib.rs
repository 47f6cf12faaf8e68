//! # figrust
//!
//! A pure Rust library for reading, editing and writing XFig drawings
//! (`.fig` format, version 3.2).
//!
//! ## Features
//!
//! - Read and write `.fig` 3.2 files, keeping comments and custom colors
//! - Typed drawing objects: arcs, ellipses and circles, the polyline family
//!   (boxes, polygons, pictures), splines, text and nested compounds
//! - Custom color table with lookup by hex code or by similarity
//! - Queries over the object tree with bulk attribute changes and removal
//! - Export through `fig2dev`
//!
//! ## Quick Start
//!
//! ```rust
//! use figrust::{Container, FigDocument, ObjectFilter, Attribute};
//! use figrust::entities::Polyline;
//! use figrust::types::Color;
//!
//! let mut doc = FigDocument::new();
//! doc.append(Polyline::rect(0, 0, 1200, 600));
//!
//! let boxes = doc.find_objects(&ObjectFilter::new().depth(50));
//! boxes.set(&mut doc, Attribute::PenColor(Color::RED));
//!
//! let text = doc.to_fig_string()?;
//! let again: FigDocument = text.parse()?;
//! assert_eq!(again.entity_count(), 1);
//! # Ok::<(), figrust::FigError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`FigDocument`] - page settings, color table and the object tree
//! - [`entities::EntityType`] - one variant per object family
//! - [`Container`] - iteration and queries shared by documents and compounds
//! - [`io::fig`] - the record reader and writer

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod export;
pub mod io;
pub mod notification;
pub mod query;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use document::{
    FigDocument, Justification, Orientation, PageSettings, Pagination, PaperSize, Units,
    FIG_VERSION,
};
pub use error::{FigError, Result};
pub use export::{ExportOutcome, Exporter, Fig2Dev};
pub use io::{FigReader, FigReaderConfiguration, FigWriter, FigWriterConfiguration};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use query::{Attribute, AttributeKey, Container, ObjectFilter, ObjectSelection};
pub use tables::{ColorSpec, ColorTable, CustomColor};
pub use types::{BoundingBox2D, Color, Handle, Point, Vector2};

// Re-export entity types
pub use entities::{
    Arc, ArcKind, Compound, Ellipse, EllipseShape, Entity, EntityType, ObjectKind, Polyline,
    PolylineKind, Spline, SplineKind, Text,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_document_creation() {
        let doc = FigDocument::new();
        assert_eq!(doc.version, FIG_VERSION);
        assert_eq!(doc.entity_count(), 0);
        assert!(doc.colors.is_empty());
    }
}
