//! Citation marker resolution for generated answers

pub mod marker;
pub mod parser;
pub mod registry;

pub use marker::{footnote_token, scan_markers, Marker};
pub use parser::{parse_answer, parse_answer_json};
pub use registry::FootnoteRegistry;
