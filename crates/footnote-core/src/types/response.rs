//! Answer types consumed and produced by the resolver

use serde::{Deserialize, Serialize};

use super::citation::Citation;

/// Answer returned by the backend, before marker resolution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    /// Generated answer containing `[docN]` markers
    pub answer: String,
    /// Citations referenced by marker number (1-based); `null` slots are kept
    #[serde(default)]
    pub citations: Option<Vec<Option<Citation>>>,
}

impl AskResponse {
    /// Create a response where every citation slot is present
    pub fn new(answer: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            answer: answer.into(),
            citations: Some(citations.into_iter().map(Some).collect()),
        }
    }
}

/// Answer text with footnotes, plus the citations those footnotes point at
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedAnswer {
    /// Deduplicated citations in footnote order
    pub citations: Vec<Citation>,
    /// Answer text with ` ^N^ ` footnote tokens
    #[serde(rename = "markdownFormatText")]
    pub markdown_format_text: String,
}
