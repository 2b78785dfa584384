//! Chat message formatting: raw tutor text to typed, renderable nodes.
//!
//! Stages run in a fixed order: currency escaping (assistant messages only),
//! math tag normalization, paragraph split, then per paragraph QA block
//! extraction and inline tokenization. Malformed markup never fails a render;
//! it falls back to literal text.

mod inline;
pub mod markers;
mod math;
mod nodes;
mod options;
mod paragraph;
mod qa_block;

pub use nodes::{
    ContentNode, MathDisplay, Paragraph, QaBlock, QaOption, RawMessage, RenderResult, TextStyle,
};
pub use options::{FormatOptions, QaShape};

use qa_block::{Extraction, extract_qa_block};

/// Formats messages with a fixed set of options. Holds no per-message state.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn format(&self, message: &RawMessage) -> RenderResult {
        self.format_str(&message.content, message.is_user_authored)
    }

    pub fn format_str(&self, content: &str, is_user_authored: bool) -> RenderResult {
        let normalized = if !is_user_authored && self.options.escape_currency {
            math::normalize_math_tags(&math::escape_currency(
                content,
                &self.options.currency_replacement,
            ))
        } else {
            math::normalize_math_tags(content)
        };
        let paragraphs: Vec<Paragraph> = paragraph::split_paragraphs(&normalized)
            .into_iter()
            .map(|p| self.format_paragraph(p))
            .collect();
        log::debug!(
            "Formatted message ({} bytes) into {} paragraphs",
            content.len(),
            paragraphs.len()
        );
        RenderResult { paragraphs }
    }

    fn format_paragraph(&self, paragraph: &str) -> Paragraph {
        let mut nodes = Vec::new();
        // text from `start` is not yet tokenized; extraction resumes at `pos`
        let mut start = 0;
        let mut pos = 0;
        loop {
            let Extraction {
                before,
                block,
                after,
                skip_to,
            } = extract_qa_block(&paragraph[pos..], self.options.qa_shape);
            match block {
                Some(block) => {
                    let block_start = pos + before.len();
                    nodes.extend(inline::tokenize_inline(&paragraph[start..block_start]));
                    nodes.push(ContentNode::QaBlock(block));
                    start = paragraph.len() - after.len();
                    if !self.options.all_blocks {
                        break;
                    }
                    pos = start;
                }
                // undecodable payloads stay literal; later blocks are still extracted
                None => match skip_to {
                    Some(end) if self.options.all_blocks => pos += end,
                    _ => break,
                },
            }
        }
        nodes.extend(inline::tokenize_inline(&paragraph[start..]));
        nodes
    }
}

/// Format a message with default options.
pub fn format_message(content: &str, is_user_authored: bool) -> RenderResult {
    Formatter::default().format_str(content, is_user_authored)
}
