//! Citation records attached to an answer

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::config::LabelOptions;

/// Citation from a source document, as returned by the answering backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Stable content identifier of the source document (required)
    pub id: String,
    /// Chunk identifier within the source document
    #[serde(default)]
    pub chunk_id: Option<String>,
    /// Source text of the chunk
    #[serde(default)]
    pub content: String,
    /// Document title
    #[serde(default)]
    pub title: Option<String>,
    /// Path of the source file
    #[serde(default)]
    pub filepath: Option<String>,
    /// Link to the source document
    #[serde(default)]
    pub url: Option<String>,
    /// Opaque backend metadata
    #[serde(default)]
    pub metadata: Option<String>,
    /// Part number of the chunk within its file (if the backend reports it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_index: Option<u64>,
    /// Footnote number assigned by the resolver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reindex_id: Option<String>,
    /// Any other fields, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Citation {
    /// Create a citation with just its identity fields set
    pub fn new(id: impl Into<String>, chunk_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            chunk_id: Some(chunk_id.into()),
            ..Self::default()
        }
    }

    /// Whether both citations point at the same source chunk
    pub fn same_source(&self, other: &Citation) -> bool {
        self.id == other.id && self.chunk_id == other.chunk_id
    }

    /// Part number shown next to the file path.
    ///
    /// Falls back to the numeric chunk id (0-based) plus one.
    pub fn part_number(&self) -> Option<u64> {
        self.part_index.or_else(|| {
            self.chunk_id
                .as_deref()?
                .trim()
                .parse::<u64>()
                .ok()
                .and_then(|n| n.checked_add(1))
        })
    }

    /// Label for the citation panel.
    ///
    /// `index` is the 1-based position used when the citation has neither a
    /// file path nor a url.
    pub fn display_label(&self, index: usize, options: &LabelOptions) -> String {
        if let Some(filepath) = self.filepath.as_deref().filter(|p| !p.is_empty()) {
            let part = self
                .part_number()
                .map(|p| p.to_string())
                .unwrap_or_default();
            let shown = if options.truncate {
                shorten_path(filepath, options)
            } else {
                Cow::Borrowed(filepath)
            };
            return format!("{} - Part {}", shown, part);
        }

        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            return url.to_string();
        }

        format!("Citation {}", index)
    }
}

/// Keep both ends of a long path, counted in characters
fn shorten_path<'a>(path: &'a str, options: &LabelOptions) -> Cow<'a, str> {
    let len = path.chars().count();
    if len <= options.truncation_limit {
        return Cow::Borrowed(path);
    }

    let head: String = path.chars().take(options.keep).collect();
    let tail: String = path.chars().skip(len.saturating_sub(options.keep)).collect();
    Cow::Owned(format!("{}...{}", head, tail))
}
