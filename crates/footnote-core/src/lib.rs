//! footnote-core: citation marker resolution for generated answers
//!
//! Answers produced by a retrieval-augmented backend reference their sources
//! with inline `[docN]` markers. This crate rewrites those markers into
//! sequential ` ^k^ ` footnotes, merges markers that point at the same source
//! chunk, and returns the citation list in footnote order for display.

pub mod answer;
pub mod config;
pub mod error;
pub mod types;

pub use answer::{parse_answer, parse_answer_json};
pub use config::{FootnoteConfig, LabelOptions};
pub use error::{Error, Result};
pub use types::{
    citation::Citation,
    response::{AskResponse, ParsedAnswer},
};
