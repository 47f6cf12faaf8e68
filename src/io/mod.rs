//! I/O module for reading and writing XFig files

pub mod fig;

pub use fig::{FigReader, FigReaderConfiguration, FigWriter, FigWriterConfiguration};
