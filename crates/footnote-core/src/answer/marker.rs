//! `[docN]` marker scanning

use once_cell::sync::Lazy;
use regex::Regex;

/// `[doc` + 1 to 3 ASCII digits + `]`
static MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[doc([0-9]{1,3})\]").expect("MARKER_PATTERN: hardcoded regex is valid")
});

/// A citation marker found in answer text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Exact marker text, e.g. `[doc3]`
    pub text: &'a str,
    /// Citation number, 1-based
    pub number: usize,
}

impl Marker<'_> {
    /// 0-based position in the citation list (`None` for `[doc0]`)
    pub fn slot(&self) -> Option<usize> {
        self.number.checked_sub(1)
    }
}

/// Find all markers in source order, repeats included
pub fn scan_markers(text: &str) -> Vec<Marker<'_>> {
    MARKER_PATTERN
        .captures_iter(text)
        .filter_map(|cap| {
            let text = cap.get(0)?.as_str();
            let number = cap.get(1)?.as_str().parse().ok()?;
            Some(Marker { text, number })
        })
        .collect()
}

/// Footnote token that replaces a marker
pub fn footnote_token(reindex_id: &str) -> String {
    format!(" ^{}^ ", reindex_id)
}
