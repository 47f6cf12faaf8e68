//! Fig document structure

use crate::entities::{Entity, EntityType};
use crate::error::{FigError, Result};
use crate::io::fig::{FigReader, FigWriter};
use crate::notification::NotificationCollection;
use crate::query::{find_in_mut, remove_from, Container};
use crate::tables::{ColorSpec, ColorTable, CustomColor};
use crate::types::{Color, Handle};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Format version written by this crate
pub const FIG_VERSION: &str = "3.2";

/// Page orientation header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Landscape,
    #[default]
    Portrait,
}

impl Orientation {
    /// Anything not starting with "landscape" (case-insensitive) is portrait
    pub fn from_header(line: &str) -> Self {
        if line.to_ascii_lowercase().starts_with("landscape") {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "Landscape",
            Orientation::Portrait => "Portrait",
        }
    }
}

/// Justification header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    #[default]
    Center,
    FlushLeft,
}

impl Justification {
    pub fn from_header(line: &str) -> Self {
        if line.to_ascii_lowercase().starts_with("center") {
            Justification::Center
        } else {
            Justification::FlushLeft
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Justification::Center => "Center",
            Justification::FlushLeft => "Flush Left",
        }
    }
}

/// Units header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Inches,
}

impl Units {
    pub fn from_header(line: &str) -> Self {
        if line.to_ascii_lowercase().starts_with("metric") {
            Units::Metric
        } else {
            Units::Inches
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "Metric",
            Units::Inches => "Inches",
        }
    }
}

/// Multiple-page header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pagination {
    #[default]
    Single,
    Multiple,
}

impl Pagination {
    pub fn from_header(line: &str) -> Self {
        if line.to_ascii_lowercase().starts_with("single") {
            Pagination::Single
        } else {
            Pagination::Multiple
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pagination::Single => "Single",
            Pagination::Multiple => "Multiple",
        }
    }
}

/// Paper size names known to xfig
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaperSize {
    Letter,
    Legal,
    Ledger,
    Tabloid,
    A,
    B,
    C,
    D,
    E,
    #[default]
    A4,
    A3,
    A2,
    A1,
    A0,
    B5,
    /// Unrecognized name, kept verbatim
    Other(String),
}

impl PaperSize {
    const KNOWN: [(&'static str, PaperSize); 15] = [
        ("Letter", PaperSize::Letter),
        ("Legal", PaperSize::Legal),
        ("Ledger", PaperSize::Ledger),
        ("Tabloid", PaperSize::Tabloid),
        ("A", PaperSize::A),
        ("B", PaperSize::B),
        ("C", PaperSize::C),
        ("D", PaperSize::D),
        ("E", PaperSize::E),
        ("A4", PaperSize::A4),
        ("A3", PaperSize::A3),
        ("A2", PaperSize::A2),
        ("A1", PaperSize::A1),
        ("A0", PaperSize::A0),
        ("B5", PaperSize::B5),
    ];

    pub fn from_name(name: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, size)| size.clone())
            .unwrap_or_else(|| PaperSize::Other(name.to_string()))
    }

    pub fn name(&self) -> &str {
        match self {
            PaperSize::Other(name) => name,
            known => Self::KNOWN
                .iter()
                .find(|(_, size)| size == known)
                .map(|(n, _)| *n)
                .unwrap_or_default(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PaperSize::Other(_))
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Global settings from the eight header lines
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    pub orientation: Orientation,
    pub justification: Justification,
    pub units: Units,
    pub paper_size: PaperSize,
    /// Export magnification in percent
    pub magnification: f64,
    pub pagination: Pagination,
    /// -2 none, -1 background, otherwise a color number
    pub transparent_color: i32,
    /// Fig units per inch
    pub resolution: i32,
    /// Always 2 (origin upper left) in practice
    pub coordinate_system: i32,
}

impl Default for PageSettings {
    fn default() -> Self {
        PageSettings {
            orientation: Orientation::Portrait,
            justification: Justification::Center,
            units: Units::Metric,
            paper_size: PaperSize::A4,
            magnification: 100.0,
            pagination: Pagination::Single,
            transparent_color: -2,
            resolution: 1200,
            coordinate_system: 2,
        }
    }
}

/// An XFig document
#[derive(Debug, Clone)]
pub struct FigDocument {
    pub page: PageSettings,
    /// Version token of the `#FIG` line
    pub version: String,
    /// Written in front of the resolution line
    pub comment: Option<String>,
    /// Comment lines following the last record
    pub trailing_comment: Option<String>,
    pub colors: ColorTable,
    /// File this document was read from or last saved to
    pub filename: Option<PathBuf>,
    /// Non-fatal issues found by the last read
    pub notifications: NotificationCollection,

    entities: Vec<EntityType>,
    next_handle: u64,
}

impl FigDocument {
    pub fn new() -> Self {
        FigDocument {
            page: PageSettings::default(),
            version: FIG_VERSION.to_string(),
            comment: None,
            trailing_comment: None,
            colors: ColorTable::new(),
            filename: None,
            notifications: NotificationCollection::new(),
            entities: Vec::new(),
            next_handle: 1,
        }
    }

    /// Read a `.fig` file
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        FigReader::from_file(path)?.read()
    }

    fn allocate_handle(&mut self) -> Handle {
        let handle = Handle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// Give `entity` and all its descendants fresh handles
    fn assign_handles(&mut self, entity: &mut EntityType) -> Handle {
        let handle = self.allocate_handle();
        entity.as_entity_mut().set_handle(handle);
        if let EntityType::Compound(compound) = entity {
            for child in &mut compound.children {
                self.assign_handles(child);
            }
        }
        handle
    }

    /// Append a top-level object; returns its new handle
    pub fn append(&mut self, entity: impl Into<EntityType>) -> Handle {
        let mut entity = entity.into();
        let handle = self.assign_handles(&mut entity);
        self.entities.push(entity);
        handle
    }

    /// Append into the compound identified by `parent`
    pub fn append_to(&mut self, parent: Handle, entity: impl Into<EntityType>) -> Result<Handle> {
        let mut entity = entity.into();
        if self.find(parent).and_then(|p| p.as_compound()).is_none() {
            return Err(FigError::ObjectNotFound(parent.value()));
        }
        let handle = self.assign_handles(&mut entity);
        self.find_mut(parent)
            .and_then(|p| p.as_compound_mut())
            .ok_or(FigError::ObjectNotFound(parent.value()))?
            .push(entity);
        Ok(handle)
    }

    /// Top-level objects in file order
    pub fn entities(&self) -> &[EntityType] {
        &self.entities
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Add a custom color by `#rrggbb`
    pub fn add_color(&mut self, hex: &str) -> Result<CustomColor> {
        self.colors.add(hex)
    }

    /// Find or add a custom color, see [`ColorTable::get_color`]
    pub fn get_color(&mut self, spec: impl Into<ColorSpec>, similarity: Option<f64>) -> Result<Color> {
        self.colors
            .get_color(&spec.into(), similarity)
            .map(|c| c.color())
    }

    /// Custom color for a gray level in 0.0..=1.0
    pub fn gray(&mut self, level: f64) -> Result<Color> {
        self.get_color(ColorSpec::gray(level), None)
    }

    /// RGB of a standard or custom color
    pub fn color_rgb(&self, color: Color) -> Result<(u8, u8, u8)> {
        self.colors.color_rgb(color.index())
    }

    /// Copy all objects of `other` into this document.
    ///
    /// Custom colors are looked up (or added) here by hex code and the
    /// copies are recolored accordingly. Returns the new handles.
    pub fn import_objects(&mut self, other: &FigDocument) -> Result<Vec<Handle>> {
        let mut color_map = HashMap::new();
        for color in other.colors.iter() {
            let local = self
                .colors
                .get_color(&ColorSpec::from(color), None)?
                .color();
            color_map.insert(color.color(), local);
        }

        let mut handles = Vec::with_capacity(other.entities.len());
        for entity in &other.entities {
            let mut copy = entity.clone();
            copy.map_colors(&mut |c| color_map.get(&c).copied().unwrap_or(c));
            handles.push(self.append(copy));
        }
        Ok(handles)
    }

    /// Render the complete file text
    pub fn to_fig_string(&self) -> Result<String> {
        FigWriter::new(self).write_to_string()
    }

    /// Save to `path`, appending `.fig` when missing.
    ///
    /// The file is only created once the whole text has been rendered, so a
    /// validation error leaves any existing file untouched. Returns the
    /// path written.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<PathBuf> {
        let mut path = path.as_ref().to_path_buf();
        if path.extension().map_or(true, |ext| ext != "fig") {
            let mut name = path.into_os_string();
            name.push(".fig");
            path = PathBuf::from(name);
        }
        let text = self.to_fig_string()?;
        std::fs::write(&path, text)?;
        tracing::debug!(path = %path.display(), "saved fig document");
        self.filename = Some(path.clone());
        Ok(path)
    }

    /// Save again to the file this document came from
    pub fn save_in_place(&mut self) -> Result<PathBuf> {
        let path = self
            .filename
            .clone()
            .ok_or_else(|| FigError::Custom("document has no file name".to_string()))?;
        self.save(path)
    }
}

impl Default for FigDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Container for FigDocument {
    fn children(&self) -> &[EntityType] {
        &self.entities
    }

    fn find_mut(&mut self, handle: Handle) -> Option<&mut EntityType> {
        find_in_mut(&mut self.entities, handle)
    }

    fn remove(&mut self, handle: Handle) -> Option<EntityType> {
        remove_from(&mut self.entities, handle)
    }
}

impl FromStr for FigDocument {
    type Err = FigError;

    fn from_str(text: &str) -> Result<Self> {
        FigReader::from_text(text).read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Compound, Polyline, Text};
    use crate::types::Point;

    #[test]
    fn test_defaults() {
        let doc = FigDocument::new();
        assert_eq!(doc.page.orientation, Orientation::Portrait);
        assert_eq!(doc.page.justification, Justification::Center);
        assert_eq!(doc.page.units, Units::Metric);
        assert_eq!(doc.page.paper_size, PaperSize::A4);
        assert_eq!(doc.page.magnification, 100.0);
        assert_eq!(doc.page.pagination, Pagination::Single);
        assert_eq!(doc.page.transparent_color, -2);
        assert_eq!(doc.page.resolution, 1200);
        assert_eq!(doc.version, "3.2");
    }

    #[test]
    fn test_header_keywords() {
        assert_eq!(Orientation::from_header("landscape"), Orientation::Landscape);
        assert_eq!(Justification::from_header("Flush left"), Justification::FlushLeft);
        assert_eq!(Units::from_header("Inches"), Units::Inches);
        assert_eq!(Pagination::from_header("Multiple"), Pagination::Multiple);
        assert_eq!(PaperSize::from_name("Letter"), PaperSize::Letter);
        assert_eq!(PaperSize::from_name("A4").name(), "A4");
        let odd = PaperSize::from_name("Folio");
        assert!(!odd.is_known());
        assert_eq!(odd.to_string(), "Folio");
    }

    #[test]
    fn test_append_assigns_handles_recursively() {
        let mut doc = FigDocument::new();
        let group = Compound::with_children(vec![
            Polyline::rect(0, 0, 1, 1).into(),
            Text::new(Point::new(0, 0), "t").into(),
        ]);
        let g = doc.append(group);
        let r = doc.append(Polyline::rect(5, 5, 6, 6));
        assert_ne!(g, r);
        let handles: Vec<_> = doc.all_objects(true).map(|e| e.handle()).collect();
        assert_eq!(handles.len(), 4);
        assert!(handles.iter().all(|h| !h.is_null()));
        let mut unique: Vec<u64> = handles.iter().map(|h| h.value()).collect();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_append_to_compound() {
        let mut doc = FigDocument::new();
        let g = doc.append(Compound::new());
        let child = doc.append_to(g, Polyline::rect(0, 0, 2, 2)).unwrap();
        assert!(doc.find(child).is_some());
        assert_eq!(doc.entity_count(), 1);

        let not_compound = doc.append(Polyline::rect(0, 0, 1, 1));
        assert!(doc.append_to(not_compound, Compound::new()).is_err());
    }

    #[test]
    fn test_import_objects_remaps_colors() {
        let mut source = FigDocument::new();
        source.add_color("#000001").unwrap();
        let orange = source.get_color("#ff8000", None).unwrap();
        let mut rect = Polyline::rect(0, 0, 10, 10);
        rect.common.pen_color = orange;
        source.append(rect);

        let mut target = FigDocument::new();
        target.add_color("#ff8000").unwrap();
        target.import_objects(&source).unwrap();

        let copied = &target.entities()[0];
        assert_eq!(copied.common().unwrap().pen_color, Color::Custom(32));
        assert_eq!(target.colors.len(), 2);
    }

    #[test]
    fn test_gray_and_color_rgb() {
        let mut doc = FigDocument::new();
        let gray = doc.gray(0.5).unwrap();
        assert_eq!(doc.color_rgb(gray).unwrap(), (128, 128, 128));
        assert_eq!(doc.color_rgb(Color::RED).unwrap(), (255, 0, 0));
        assert!(doc.color_rgb(Color::Default).is_err());
    }
}
