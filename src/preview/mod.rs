//! Terminal presentation of a [`RenderResult`]: styled preview and plain outline.

mod outline;
mod wrap;

pub use outline::render_outline;

use crossterm::style::{Color, ContentStyle, Stylize};

use crate::core::script_loader::{MATH_RENDERER_SRC, ScriptLoader};
use crate::format::{ContentNode, MathDisplay, QaBlock, RenderResult, TextStyle};

/// Accent green (#98FB98) for QA labels.
const ACCENT: Color = Color::Rgb {
    r: 152,
    g: 251,
    b: 152,
};

/// Soft cyan (#7EC8E3) for rendered math.
const MATH_COLOR: Color = Color::Rgb {
    r: 126,
    g: 200,
    b: 227,
};

#[derive(Debug, Clone, Copy)]
pub struct PreviewOptions {
    /// Wrap width in columns; 0 disables wrapping.
    pub width: usize,
    /// Emit ANSI styling.
    pub color: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            width: 80,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunStyle {
    Plain,
    Bold,
    Italic,
    Alert,
    Math,
    Label,
}

impl From<TextStyle> for RunStyle {
    fn from(style: TextStyle) -> Self {
        match style {
            TextStyle::Plain => Self::Plain,
            TextStyle::Bold => Self::Bold,
            TextStyle::Italic => Self::Italic,
            TextStyle::CallToAction => Self::Alert,
        }
    }
}

/// Text with a single style.
#[derive(Debug, Clone)]
pub(crate) struct Run {
    pub text: String,
    pub style: RunStyle,
}

/// Lines of runs for one paragraph, before wrapping.
#[derive(Default)]
struct LineBuilder {
    lines: Vec<Vec<Run>>,
    current: Vec<Run>,
    /// Drop leading spaces of the next text after a structural break.
    trim_next: bool,
}

impl LineBuilder {
    fn push(&mut self, text: &str, style: RunStyle) {
        let mut parts = text.split('\n');
        if let Some(first) = parts.next() {
            self.push_run(first, style);
        }
        for part in parts {
            self.hard_break();
            self.push_run(part, style);
        }
    }

    fn push_run(&mut self, text: &str, style: RunStyle) {
        let text = if self.trim_next {
            text.trim_start_matches(' ')
        } else {
            text
        };
        if !text.is_empty() {
            self.trim_next = false;
            self.current.push(Run {
                text: text.to_string(),
                style,
            });
        }
    }

    fn indent(&mut self) {
        self.current.push(Run {
            text: "  ".to_string(),
            style: RunStyle::Plain,
        });
    }

    fn hard_break(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
    }

    /// Start a new line unless the current one is still empty.
    fn ensure_line_start(&mut self) {
        if !self.current.is_empty() {
            self.hard_break();
        }
        self.trim_next = true;
    }

    fn finish(mut self) -> Vec<Vec<Run>> {
        if !self.current.is_empty() {
            self.lines.push(self.current);
        }
        self.lines
    }
}

fn push_nodes(builder: &mut LineBuilder, nodes: &[ContentNode], math_ready: bool) {
    for node in nodes {
        match node {
            ContentNode::Text { text, style } => builder.push(text, (*style).into()),
            ContentNode::Math { latex, display } => match (display, math_ready) {
                (MathDisplay::Inline, true) => builder.push(latex, RunStyle::Math),
                (MathDisplay::Block, true) => {
                    builder.ensure_line_start();
                    builder.indent();
                    builder.push(latex, RunStyle::Math);
                    builder.ensure_line_start();
                }
                (MathDisplay::Inline, false) => builder.push(&format!("${}$", latex), RunStyle::Plain),
                (MathDisplay::Block, false) => {
                    builder.push(&format!("$${}$$", latex), RunStyle::Plain)
                }
            },
            ContentNode::QaBlock(block) => push_qa_block(builder, block, math_ready),
        }
    }
}

fn push_qa_block(builder: &mut LineBuilder, block: &QaBlock, math_ready: bool) {
    builder.ensure_line_start();
    builder.push("Question: ", RunStyle::Label);
    push_nodes(builder, &block.question, math_ready);
    for option in &block.options {
        builder.ensure_line_start();
        builder.push(&format!("{}: ", option.label), RunStyle::Label);
        push_nodes(builder, &option.text, math_ready);
    }
    builder.ensure_line_start();
}

fn paint(text: &str, style: RunStyle, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    let content_style = match style {
        RunStyle::Plain => return text.to_string(),
        RunStyle::Bold => ContentStyle::new().bold(),
        RunStyle::Italic => ContentStyle::new().italic(),
        RunStyle::Alert => ContentStyle::new().bold().red(),
        RunStyle::Math => ContentStyle::new().with(MATH_COLOR),
        RunStyle::Label => ContentStyle::new().bold().with(ACCENT),
    };
    content_style.apply(text).to_string()
}

fn render_line(line: &[wrap::Word<'_>], color: bool) -> String {
    let mut out = String::new();
    for (i, word) in line.iter().enumerate() {
        out.push_str(&paint(word.text, word.style, color));
        if i + 1 < line.len() {
            out.push_str(&" ".repeat(word.whitespace));
        }
    }
    out
}

/// Render for a terminal. Math is drawn through the math style only once the
/// renderer script is ready in `loader`; otherwise it shows its delimiters.
pub fn render_preview(result: &RenderResult, loader: &ScriptLoader, opts: &PreviewOptions) -> String {
    let math_ready = loader.is_ready(MATH_RENDERER_SRC);
    let mut out: Vec<String> = Vec::new();
    for (i, paragraph) in result.paragraphs.iter().enumerate() {
        if i > 0 {
            out.push(String::new());
        }
        let mut builder = LineBuilder::default();
        push_nodes(&mut builder, paragraph, math_ready);
        for line in builder.finish() {
            let words = wrap::split_words(&line);
            let wrapped = wrap::wrap_words(&words, opts.width);
            if wrapped.is_empty() {
                out.push(String::new());
            }
            for chunk in wrapped {
                out.push(render_line(chunk, opts.color));
            }
        }
    }
    out.join("\n")
}
