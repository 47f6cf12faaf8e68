//! Shared test utilities for figrust integration tests.
//!
//! Sample documents and read/write helpers that all test crates import via
//! `mod common;`.

#![allow(dead_code)]

use figrust::{Container, FigDocument, FigReader, FigReaderConfiguration};

// ===========================================================================
// Sample documents
// ===========================================================================

/// Header of an empty document with default page settings
pub const MINIMAL: &str = "#FIG 3.2\nPortrait\nCenter\nMetric\nA4\n100.00\nSingle\n-2\n1200 2\n";

/// A drawing as xfig writes it: comments, custom colors, a group, one
/// object of every other family, an arrow and a picture.
///
/// Physical line numbers: the compound begins on line 13, the polygon
/// record is on line 19 and the picture record on line 27.
pub const SAMPLE: &str = "\
#FIG 3.2  Produced by xfig version 3.2.5c
Landscape
Center
Metric
A4
100.00
Single
-2
# drawing comment
1200 2
0 32 #c0c0c0
0 33 #ff8000
6 1000 1000 4000 3000
2 2 0 1 0 32 50 -1 20 0.000 0 0 -1 0 0 5
\t 1000 1000 4000 1000 4000 3000 1000 3000 1000 1000
4 1 0 40 -1 16 12 0.0000 4 150 600 2500 2000 Hello\\001
-6
# closed polygon
2 3 0 2 33 7 60 -1 -1 0.000 0 0 -1 0 0 4
\t 0 0 600 0 300 500 0 0
1 3 0 1 0 7 50 -1 -1 0.000 1 0.0000 5000 5000 300 300 5000 5000 5300 5000
5 1 0 1 0 7 50 -1 -1 0.000 0 0 1 0 6000.000 1000.000 5500 1000 6000 500 6500 1000
\t1 1 1.00 60.00 120.00
3 2 0 1 0 7 50 -1 -1 0.000 0 0 0 3
\t 100 100 200 300 400 100
\t 0.000 -1.000 0.000
2 5 0 1 0 -1 50 -1 -1 0.000 0 0 -1 0 0 5
\t0 photo.png
\t 0 4000 1200 4000 1200 5000 0 5000 0 4000
# end of file
";

/// `MINIMAL` followed by `body`
pub fn with_header(body: &str) -> String {
    format!("{}{}", MINIMAL, body)
}

// ===========================================================================
// Read helpers
// ===========================================================================

/// Parse text, panicking with the error on failure.
pub fn read(text: &str) -> FigDocument {
    FigReader::from_text(text)
        .read()
        .unwrap_or_else(|e| panic!("Failed to read fig text: {e}"))
}

/// Parse text in strict mode.
pub fn read_strict(text: &str) -> figrust::Result<FigDocument> {
    let config = FigReaderConfiguration {
        strict: true,
        ..Default::default()
    };
    FigReader::from_text(text).with_configuration(config).read()
}

/// Write, read back and write again; both outputs must agree.
pub fn roundtrip(doc: &FigDocument) -> (String, FigDocument) {
    let text = doc
        .to_fig_string()
        .unwrap_or_else(|e| panic!("Failed to write document: {e}"));
    let again = read(&text);
    let text_again = again
        .to_fig_string()
        .unwrap_or_else(|e| panic!("Failed to write document again: {e}"));
    assert_eq!(text, text_again, "output changed after a round trip");
    (text, again)
}

// ===========================================================================
// Entity utilities
// ===========================================================================

/// Kind names of all objects, compounds included, in depth-first order.
pub fn kind_names(doc: &FigDocument) -> Vec<String> {
    doc.all_objects(true).map(|e| e.kind().to_string()).collect()
}

/// Count all drawing objects below the document, compounds excluded.
pub fn object_count(doc: &FigDocument) -> usize {
    doc.all_objects(false).count()
}
