//! Marker resolution: `[docN]` markers to deduplicated ` ^k^ ` footnotes

use crate::error::Result;
use crate::types::{AskResponse, ParsedAnswer};

use super::marker::{footnote_token, scan_markers};
use super::registry::FootnoteRegistry;

/// Rewrite the citation markers of an answer into sequential footnotes.
///
/// Every occurrence of a marker string is replaced the first time that
/// string is seen. Markers pointing at the same source (`id` + `chunk_id`)
/// share one footnote number and one output citation. Markers with no
/// citation behind them are removed from the text and logged.
///
/// Answers without markers or without citations come back unchanged.
pub fn parse_answer(answer: &AskResponse) -> ParsedAnswer {
    let markers = scan_markers(&answer.answer);

    let citations = match answer.citations.as_deref() {
        Some(citations) if !citations.is_empty() && !markers.is_empty() => citations,
        _ => {
            return ParsedAnswer {
                citations: answer.citations.iter().flatten().flatten().cloned().collect(),
                markdown_format_text: answer.answer.clone(),
            };
        }
    };

    let mut text = answer.answer.clone();
    let mut registry = FootnoteRegistry::new();

    for marker in &markers {
        match marker.slot().and_then(|slot| citations.get(slot)) {
            Some(Some(citation)) => {
                let token = footnote_token(registry.footnote_for(citation));
                text = text.replace(marker.text, &token);
            }
            Some(None) => {
                tracing::warn!("Citation at index {} is undefined", marker.number);
                text = text.replace(marker.text, "");
            }
            None => {
                tracing::warn!(
                    "Invalid citation index: {}, citations length: {}",
                    marker.number,
                    citations.len()
                );
                text = text.replace(marker.text, "");
            }
        }
    }

    tracing::debug!(
        "Resolved {} markers into {} footnotes",
        markers.len(),
        registry.len()
    );

    ParsedAnswer {
        citations: registry.into_citations(),
        markdown_format_text: text,
    }
}

/// Decode an [`AskResponse`] JSON document and resolve it
pub fn parse_answer_json(raw: &str) -> Result<ParsedAnswer> {
    let answer: AskResponse = serde_json::from_str(raw)?;
    Ok(parse_answer(&answer))
}
