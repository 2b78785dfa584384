//! Paragraph segmentation on blank lines.

use super::markers::PARAGRAPH_BREAK;

/// Split on `\n\n`. Empty paragraphs are kept so spacing stays stable;
/// single newlines remain inside the paragraph text.
pub(crate) fn split_paragraphs(s: &str) -> Vec<&str> {
    s.split(PARAGRAPH_BREAK).collect()
}

#[cfg(test)]
mod tests {
    use super::split_paragraphs;

    #[test]
    fn split_three_paragraphs() {
        assert_eq!(split_paragraphs("a\n\nb\n\nc"), ["a", "b", "c"]);
    }

    #[test]
    fn split_keeps_single_newlines() {
        assert_eq!(split_paragraphs("line1\nline2\n\nnext"), ["line1\nline2", "next"]);
    }

    #[test]
    fn split_keeps_empty_paragraphs() {
        assert_eq!(split_paragraphs("a\n\n\n\nb"), ["a", "", "b"]);
    }

    #[test]
    fn split_odd_newline_run_leaves_leading_newline() {
        assert_eq!(split_paragraphs("a\n\n\nb"), ["a", "\nb"]);
    }

    #[test]
    fn split_empty_input_is_one_empty_paragraph() {
        assert_eq!(split_paragraphs(""), [""]);
    }
}
