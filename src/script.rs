//! Script: the immutable text payload the typewriter reveals.
//!
//! Lines are split into extended grapheme clusters once, at construction,
//! so the engine can reveal "one character" at a time without ever cutting
//! a combining sequence or a multi-byte scalar in half.

use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// One source line plus the byte offset where each grapheme ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    text: String,
    /// `ends[i]` is the byte length of the first `i + 1` graphemes.
    ends: Vec<usize>,
}

impl ScriptLine {
    /// Split a line into graphemes.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let ends = text
            .grapheme_indices(true)
            .map(|(start, g)| start + g.len())
            .collect();
        Self { text, ends }
    }

    /// The full line text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of graphemes in the line.
    #[inline]
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Whether the line has no graphemes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// The first `count` graphemes (clamped to the line length).
    pub fn prefix(&self, count: usize) -> &str {
        match count.min(self.len()) {
            0 => "",
            n => &self.text[..self.ends[n - 1]],
        }
    }

    /// The grapheme at `index`, if any.
    pub fn grapheme(&self, index: usize) -> Option<&str> {
        let end = *self.ends.get(index)?;
        let start = if index == 0 { 0 } else { self.ends[index - 1] };
        Some(&self.text[start..end])
    }

    /// Number of leading space characters (the indentation depth).
    pub fn indent(&self) -> usize {
        self.text.chars().take_while(|&c| c == ' ').count()
    }
}

/// An ordered, immutable list of lines.
///
/// Cloning is cheap: the lines are shared behind an `Arc`, which lets the
/// engine hand out frames that reference the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    lines: Arc<[ScriptLine]>,
}

impl Script {
    /// Build a script from any sequence of lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(ScriptLine::new).collect(),
        }
    }

    /// Number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the script has no lines at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at `index`.
    #[inline]
    pub fn line(&self, index: usize) -> Option<&ScriptLine> {
        self.lines.get(index)
    }

    /// Iterate over the lines.
    pub fn iter(&self) -> std::slice::Iter<'_, ScriptLine> {
        self.lines.iter()
    }

    /// Total number of graphemes across all lines.
    pub fn grapheme_count(&self) -> usize {
        self.lines.iter().map(ScriptLine::len).sum()
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a ScriptLine;
    type IntoIter = std::slice::Iter<'a, ScriptLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Script {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
