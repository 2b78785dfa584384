//! Structured question/answer blocks: `qa_block:{...}` embedded in a paragraph.

mod payload;
mod scan;

use super::inline::tokenize_inline;
use super::markers::QA_BLOCK_MARKER;
use super::nodes::{QaBlock, QaOption};
use super::options::QaShape;

/// A paragraph split around its first QA block.
///
/// When no block was extracted, `before` and `after` are contiguous and
/// together cover the whole paragraph.
#[derive(Debug)]
pub(crate) struct Extraction<'a> {
    pub before: &'a str,
    pub block: Option<QaBlock>,
    pub after: &'a str,
    /// Offset just past a balanced payload that failed to decode. Text from
    /// there on may still hold further blocks.
    pub skip_to: Option<usize>,
}

impl<'a> Extraction<'a> {
    fn literal(paragraph: &'a str, marker: usize) -> Self {
        Self {
            before: &paragraph[..marker],
            block: None,
            after: &paragraph[marker..],
            skip_to: None,
        }
    }
}

/// Extract the first QA block of `paragraph`. Missing braces, unbalanced
/// braces and undecodable payloads all degrade to literal text.
pub(crate) fn extract_qa_block(paragraph: &str, shape: QaShape) -> Extraction<'_> {
    let Some(marker) = paragraph.find(QA_BLOCK_MARKER) else {
        return Extraction {
            before: paragraph,
            block: None,
            after: "",
            skip_to: None,
        };
    };
    let search_from = marker + QA_BLOCK_MARKER.len();
    let Some(open) = paragraph[search_from..].find('{').map(|i| search_from + i) else {
        log::debug!("qa_block marker at {} has no opening brace", marker);
        return Extraction::literal(paragraph, marker);
    };
    let Some(end) = scan::find_block_end(paragraph, open) else {
        log::debug!("qa_block payload at {} is not balanced", open);
        return Extraction::literal(paragraph, marker);
    };

    let json = scan::sanitize_backslashes(&paragraph[open..end]);
    match payload::parse_payload(&json, shape) {
        Ok(raw) => Extraction {
            before: &paragraph[..marker],
            block: Some(into_block(raw)),
            after: &paragraph[end..],
            skip_to: None,
        },
        Err(e) => {
            log::warn!(
                "Error parsing qa_block: {}; original text: {}",
                e,
                &paragraph[marker..end]
            );
            Extraction {
                skip_to: Some(end),
                ..Extraction::literal(paragraph, marker)
            }
        }
    }
}

fn into_block(raw: payload::RawQa) -> QaBlock {
    QaBlock {
        question: tokenize_inline(&raw.question),
        options: raw
            .options
            .into_iter()
            .map(|(label, text)| QaOption {
                label,
                text: tokenize_inline(&text),
            })
            .collect(),
    }
}
