//! First-seen citation registry

use crate::types::Citation;

/// Deduplicated citations in the order their first marker appeared.
///
/// Built fresh for every resolved answer.
#[derive(Debug, Default)]
pub struct FootnoteRegistry {
    citations: Vec<Citation>,
}

impl FootnoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.citations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }

    /// Footnote number for `citation`, registering a copy if its source is new
    pub fn footnote_for(&mut self, citation: &Citation) -> &str {
        let existing = self.citations.iter().position(|c| c.same_source(citation));
        let pos = match existing {
            Some(pos) => pos,
            None => {
                let mut registered = citation.clone();
                registered.reindex_id = Some((self.citations.len() + 1).to_string());
                self.citations.push(registered);
                self.citations.len() - 1
            }
        };
        self.citations[pos].reindex_id.as_deref().unwrap_or_default()
    }

    pub fn into_citations(self) -> Vec<Citation> {
        self.citations
    }
}
