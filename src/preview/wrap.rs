//! Wrapping of styled runs. Uses textwrap's first-fit algorithm for correct UTF-8 widths.

use textwrap::core::{Fragment, display_width};
use textwrap::wrap_algorithms::wrap_first_fit;

use super::{Run, RunStyle};

/// A word of one run plus the spaces that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Word<'a> {
    pub text: &'a str,
    pub style: RunStyle,
    pub whitespace: usize,
}

impl Fragment for Word<'_> {
    fn width(&self) -> f64 {
        display_width(self.text) as f64
    }

    fn whitespace_width(&self) -> f64 {
        self.whitespace as f64
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// Split runs into words. Spaces become trailing whitespace of the previous
/// word; leading spaces of a line are kept as their own word.
pub(super) fn split_words(runs: &[Run]) -> Vec<Word<'_>> {
    let mut words: Vec<Word<'_>> = Vec::new();
    for run in runs {
        let mut rest = run.text.as_str();
        while !rest.is_empty() {
            let trimmed = rest.trim_start_matches(' ');
            let spaces = rest.len() - trimmed.len();
            if spaces > 0 {
                match words.last_mut() {
                    Some(last) => last.whitespace += spaces,
                    None => words.push(Word {
                        text: &rest[..spaces],
                        style: RunStyle::Plain,
                        whitespace: 0,
                    }),
                }
            }
            if trimmed.is_empty() {
                break;
            }
            let end = trimmed.find(' ').unwrap_or(trimmed.len());
            words.push(Word {
                text: &trimmed[..end],
                style: run.style,
                whitespace: 0,
            });
            rest = &trimmed[end..];
        }
    }
    words
}

/// Wrap words into lines of at most `width` columns (0 disables wrapping).
pub(super) fn wrap_words<'a, 'w>(words: &'w [Word<'a>], width: usize) -> Vec<&'w [Word<'a>]> {
    if words.is_empty() {
        return Vec::new();
    }
    if width == 0 {
        return vec![words];
    }
    wrap_first_fit(words, &[width as f64])
}
