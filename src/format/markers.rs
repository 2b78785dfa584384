//! Literal markers recognized in message text.

/// Block math tags emitted by the tutor prompt.
pub const BLOCK_MATH_OPEN: &str = "<blockmath>";
pub const BLOCK_MATH_CLOSE: &str = "</blockmath>";

/// Inline math tags emitted by the tutor prompt.
pub const INLINE_MATH_OPEN: &str = "<math>";
pub const INLINE_MATH_CLOSE: &str = "</math>";

/// Canonical delimiters after normalization.
pub const BLOCK_MATH_DELIM: &str = "$$";
pub const INLINE_MATH_DELIM: &str = "$";

pub const BOLD_DELIM: &str = "**";
pub const ITALIC_DELIM: &str = "*";

/// Prefix of an embedded question/answer payload.
pub const QA_BLOCK_MARKER: &str = "qa_block:";

/// End-of-session survey reminder, rendered as a call to action.
pub const SURVEY_REMINDER: &str =
    "[Before you exit, please take the survey by clicking the button below.]";

pub const PARAGRAPH_BREAK: &str = "\n\n";
