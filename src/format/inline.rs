//! Inline tokenization: math, bold, italic and plain spans.

use super::markers::{BLOCK_MATH_DELIM, BOLD_DELIM, INLINE_MATH_DELIM, ITALIC_DELIM, SURVEY_REMINDER};
use super::nodes::{ContentNode, MathDisplay, TextStyle};

/// Collects nodes, merging consecutive plain text into one span.
#[derive(Default)]
struct SpanBuilder {
    nodes: Vec<ContentNode>,
    plain: String,
}

impl SpanBuilder {
    fn push_plain(&mut self, s: &str) {
        self.plain.push_str(s);
    }

    fn push_node(&mut self, node: ContentNode) {
        self.flush_plain();
        self.nodes.push(node);
    }

    /// Emit pending plain text, splitting out bare survey reminders.
    fn flush_plain(&mut self) {
        if self.plain.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.plain);
        let mut rest = text.as_str();
        while let Some(idx) = rest.find(SURVEY_REMINDER) {
            if idx > 0 {
                self.nodes.push(ContentNode::plain(&rest[..idx]));
            }
            self.nodes.push(ContentNode::styled(
                SURVEY_REMINDER,
                TextStyle::CallToAction,
            ));
            rest = &rest[idx + SURVEY_REMINDER.len()..];
        }
        if !rest.is_empty() {
            self.nodes.push(ContentNode::plain(rest));
        }
    }

    fn finish(mut self) -> Vec<ContentNode> {
        self.flush_plain();
        self.nodes
    }
}

/// Find the closing `delim` for a span opened at the start of `after_open`.
/// Returns the enclosed text, or None when unclosed, empty, or crossing a
/// newline (unless `multiline`).
fn enclosed<'a>(after_open: &'a str, delim: &str, multiline: bool) -> Option<&'a str> {
    let end = after_open.find(delim)?;
    let inner = &after_open[..end];
    if inner.is_empty() || (!multiline && inner.contains('\n')) {
        return None;
    }
    Some(inner)
}

/// Try the delimiters in priority order at the start of `rest`.
/// Returns the node and the number of bytes consumed, or the literal
/// delimiter length when the opener is unpaired.
fn match_span(rest: &str) -> Result<(ContentNode, usize), usize> {
    if let Some(after) = rest.strip_prefix(BLOCK_MATH_DELIM) {
        return enclosed(after, BLOCK_MATH_DELIM, true)
            .map(|latex| {
                let consumed = 2 * BLOCK_MATH_DELIM.len() + latex.len();
                (ContentNode::math(latex, MathDisplay::Block), consumed)
            })
            .ok_or(BLOCK_MATH_DELIM.len());
    }
    if let Some(after) = rest.strip_prefix(INLINE_MATH_DELIM) {
        return enclosed(after, INLINE_MATH_DELIM, false)
            .map(|latex| {
                let consumed = 2 * INLINE_MATH_DELIM.len() + latex.len();
                (ContentNode::math(latex, MathDisplay::Inline), consumed)
            })
            .ok_or(INLINE_MATH_DELIM.len());
    }
    if let Some(after) = rest.strip_prefix(BOLD_DELIM) {
        return enclosed(after, BOLD_DELIM, false)
            .map(|text| {
                let style = if text == SURVEY_REMINDER {
                    TextStyle::CallToAction
                } else {
                    TextStyle::Bold
                };
                let consumed = 2 * BOLD_DELIM.len() + text.len();
                (ContentNode::styled(text, style), consumed)
            })
            .ok_or(BOLD_DELIM.len());
    }
    if let Some(after) = rest.strip_prefix(ITALIC_DELIM) {
        return enclosed(after, ITALIC_DELIM, false)
            .map(|text| {
                let consumed = 2 * ITALIC_DELIM.len() + text.len();
                (ContentNode::styled(text, TextStyle::Italic), consumed)
            })
            .ok_or(ITALIC_DELIM.len());
    }
    Err(0)
}

/// Tokenize residual prose into spans. Unpaired delimiters stay as literal
/// text; no input character is dropped except the delimiters of matched pairs.
pub(crate) fn tokenize_inline(s: &str) -> Vec<ContentNode> {
    let mut builder = SpanBuilder::default();
    let mut rest = s;
    while !rest.is_empty() {
        let Some(pos) = rest.find(['$', '*']) else {
            builder.push_plain(rest);
            break;
        };
        builder.push_plain(&rest[..pos]);
        rest = &rest[pos..];
        match match_span(rest) {
            Ok((node, consumed)) => {
                builder.push_node(node);
                rest = &rest[consumed..];
            }
            Err(literal_len) => {
                // find() stopped on a delimiter char, so at least one byte is literal
                let literal_len = literal_len.max(1);
                builder.push_plain(&rest[..literal_len]);
                rest = &rest[literal_len..];
            }
        }
    }
    builder.finish()
}
