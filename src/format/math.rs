//! Math tag normalization and currency escaping.

use super::markers::{
    BLOCK_MATH_CLOSE, BLOCK_MATH_DELIM, BLOCK_MATH_OPEN, INLINE_MATH_CLOSE, INLINE_MATH_DELIM,
    INLINE_MATH_OPEN,
};

/// Rewrite `<blockmath>`/`<math>` tag pairs into `$$`/`$`.
/// Plain substring replacement: an unclosed tag leaves an unterminated delimiter.
pub(crate) fn normalize_math_tags(s: &str) -> String {
    s.replace(BLOCK_MATH_OPEN, BLOCK_MATH_DELIM)
        .replace(BLOCK_MATH_CLOSE, BLOCK_MATH_DELIM)
        .replace(INLINE_MATH_OPEN, INLINE_MATH_DELIM)
        .replace(INLINE_MATH_CLOSE, INLINE_MATH_DELIM)
}

/// Replace literal dollar signs so prices in assistant prose never open math.
/// Must run before [`normalize_math_tags`].
pub(crate) fn escape_currency(s: &str, replacement: &str) -> String {
    s.replace(INLINE_MATH_DELIM, replacement)
}
