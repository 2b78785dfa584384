//! Content nodes produced by the formatting pipeline.

use serde::Serialize;

/// A chat message as received: full content plus who wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub content: String,
    pub is_user_authored: bool,
}

impl RawMessage {
    pub fn new(content: impl Into<String>, is_user_authored: bool) -> Self {
        Self {
            content: content.into(),
            is_user_authored,
        }
    }
}

/// Visual treatment of a text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Plain,
    Bold,
    Italic,
    /// The end-of-session survey reminder.
    CallToAction,
}

/// Whether a math span is rendered inline or as a display block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MathDisplay {
    Inline,
    Block,
}

/// One labeled answer option of a QA block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaOption {
    pub label: String,
    pub text: Vec<ContentNode>,
}

/// A multiple-choice question embedded in the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaBlock {
    pub question: Vec<ContentNode>,
    /// Source order; labels may repeat.
    pub options: Vec<QaOption>,
}

/// A renderable piece of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentNode {
    Text { text: String, style: TextStyle },
    Math { latex: String, display: MathDisplay },
    QaBlock(QaBlock),
}

impl ContentNode {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: TextStyle::Plain,
        }
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self::Text {
            text: text.into(),
            style,
        }
    }

    pub fn math(latex: impl Into<String>, display: MathDisplay) -> Self {
        Self::Math {
            latex: latex.into(),
            display,
        }
    }

    /// Literal text this node carries, without delimiters. QA blocks yield the
    /// question followed by each label and option text.
    pub fn literal_text(&self) -> String {
        match self {
            Self::Text { text, .. } => text.clone(),
            Self::Math { latex, .. } => latex.clone(),
            Self::QaBlock(block) => {
                let mut out: String = block.question.iter().map(Self::literal_text).collect();
                for option in &block.options {
                    out.push_str(&option.label);
                    out.extend(option.text.iter().map(Self::literal_text));
                }
                out
            }
        }
    }
}

/// Nodes of one blank-line-delimited paragraph, in input order.
pub type Paragraph = Vec<ContentNode>;

/// Output of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderResult {
    pub paragraphs: Vec<Paragraph>,
}

impl RenderResult {
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(Vec::is_empty)
    }

    /// Iterate every node of every paragraph in order.
    pub fn nodes(&self) -> impl Iterator<Item = &ContentNode> {
        self.paragraphs.iter().flatten()
    }
}
