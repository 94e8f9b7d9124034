//! Core types for answers and citations

pub mod citation;
pub mod response;

pub use citation::Citation;
pub use response::{AskResponse, ParsedAnswer};
