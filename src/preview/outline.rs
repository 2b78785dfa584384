//! Plain-text outline of the node tree, one node per line.

use std::fmt::Write;

use crate::format::{ContentNode, MathDisplay, RenderResult, TextStyle};

fn style_name(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Plain => "plain",
        TextStyle::Bold => "bold",
        TextStyle::Italic => "italic",
        TextStyle::CallToAction => "call_to_action",
    }
}

fn write_nodes(out: &mut String, nodes: &[ContentNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match node {
            ContentNode::Text { text, style } => {
                let _ = writeln!(out, "{}text({}) {:?}", indent, style_name(*style), text);
            }
            ContentNode::Math { latex, display } => {
                let kind = match display {
                    MathDisplay::Inline => "inline",
                    MathDisplay::Block => "block",
                };
                let _ = writeln!(out, "{}math({}) {:?}", indent, kind, latex);
            }
            ContentNode::QaBlock(block) => {
                let _ = writeln!(out, "{}qa_block", indent);
                let _ = writeln!(out, "{}  question", indent);
                write_nodes(out, &block.question, depth + 2);
                for option in &block.options {
                    let _ = writeln!(out, "{}  option {:?}", indent, option.label);
                    write_nodes(out, &option.text, depth + 2);
                }
            }
        }
    }
}

/// Outline every paragraph; empty paragraphs are listed so spacing is visible.
pub fn render_outline(result: &RenderResult) -> String {
    let mut out = String::new();
    for (i, paragraph) in result.paragraphs.iter().enumerate() {
        if paragraph.is_empty() {
            let _ = writeln!(out, "paragraph {} (empty)", i + 1);
            continue;
        }
        let _ = writeln!(out, "paragraph {}", i + 1);
        write_nodes(&mut out, paragraph, 1);
    }
    out
}
