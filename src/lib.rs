//! # tutor-chat-format
//!
//! Formatting pipeline for tutor chat messages: turns raw assistant or student
//! text (bold/italic markup, math tags, embedded `qa_block:` questions) into
//! ordered paragraphs of typed nodes for a presentation layer.
//!
//! ```
//! use tutor_chat_format::{ContentNode, MathDisplay, format_message};
//!
//! let result = format_message("Area: <math>x^2</math>", false);
//! assert_eq!(result.paragraphs[0][1], ContentNode::math("x^2", MathDisplay::Inline));
//! ```

pub mod core;
pub mod format;
pub mod preview;

pub use format::{
    ContentNode, FormatOptions, Formatter, MathDisplay, Paragraph, QaBlock, QaOption, QaShape,
    RawMessage, RenderResult, TextStyle, format_message,
};
