//! XFig `.fig` 3.2 reading and writing

pub mod codes;
pub mod escape;
pub mod reader;
pub mod writer;

pub use codes::RecordCode;
pub use escape::{escape_text, unescape_text};
pub use reader::{FigLineReader, FigReader, FigReaderConfiguration};
pub use writer::{FigWriter, FigWriterConfiguration};
