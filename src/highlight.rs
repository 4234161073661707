//! Highlighter: stateless syntax colouring for partially typed code.
//!
//! Classification looks only at the line text and a grapheme offset, so a
//! character keeps the same category whether it was revealed a second ago
//! or a whole cycle ago. There is no tokenizer state to carry between calls.

use crate::script::ScriptLine;

/// Visual category of one grapheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxCategory {
    /// Declaration keywords (`const` by default).
    KeywordPrimary,
    /// Well-known identifiers of the payload.
    KeywordSecondary,
    /// Inside a double-quoted string.
    String,
    /// Directly after an opening or closing bracket.
    Bracket,
    /// Separators: `:`, `=`, `,`, `;`.
    Punctuation,
    /// Everything else.
    Default,
}

/// Keyword-driven classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    primary: Vec<String>,
    secondary: Vec<String>,
}

impl Default for Highlighter {
    /// The keyword sets of the hero card payload.
    fn default() -> Self {
        Self::with_keywords(["const"], ["developer", "name", "role", "skills"])
    }
}

impl Highlighter {
    /// Build a highlighter with caller-supplied keyword sets.
    pub fn with_keywords<P, S>(primary: P, secondary: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            primary: primary.into_iter().map(Into::into).collect(),
            secondary: secondary.into_iter().map(Into::into).collect(),
        }
    }

    /// Primary keywords.
    pub fn primary(&self) -> &[String] {
        &self.primary
    }

    /// Secondary keywords.
    pub fn secondary(&self) -> &[String] {
        &self.secondary
    }

    /// Classify the grapheme at `offset` of `line`.
    ///
    /// Offsets past the end of the line are [`SyntaxCategory::Default`].
    pub fn classify(&self, line: &ScriptLine, offset: usize) -> SyntaxCategory {
        let Some(grapheme) = line.grapheme(offset) else {
            return SyntaxCategory::Default;
        };
        let text = line.text();
        let before = line.prefix(offset);
        let in_string = inside_string(before);

        let word = word_at(text, before.len());
        // A keyword only "ends" before a non-identifier character.
        let ended = word.is_none().then_some(before);
        let word = if in_string { None } else { word };

        if matches_keyword(&self.primary, word, ended) {
            return SyntaxCategory::KeywordPrimary;
        }
        if matches_keyword(&self.secondary, word, ended) {
            return SyntaxCategory::KeywordSecondary;
        }
        if in_string {
            return SyntaxCategory::String;
        }
        if before.ends_with(['{', '}', '[', ']']) {
            return SyntaxCategory::Bracket;
        }
        if matches!(grapheme, ":" | "=" | "," | ";") {
            return SyntaxCategory::Punctuation;
        }
        SyntaxCategory::Default
    }

    /// Categories for the first `count` graphemes of `line`.
    pub fn classify_prefix(&self, line: &ScriptLine, count: usize) -> Vec<SyntaxCategory> {
        (0..count.min(line.len()))
            .map(|offset| self.classify(line, offset))
            .collect()
    }
}

fn matches_keyword(keywords: &[String], word: Option<&str>, before: Option<&str>) -> bool {
    keywords.iter().any(|kw| {
        word == Some(kw.as_str()) || before.is_some_and(|text| ends_with_word(text, kw))
    })
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// `text` ends with `word`, and `word` is not the tail of a longer identifier.
fn ends_with_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    text.strip_suffix(word)
        .is_some_and(|head| !head.chars().next_back().is_some_and(is_word_char))
}

/// The identifier covering byte position `at`, if the character there is
/// part of one.
fn word_at(text: &str, at: usize) -> Option<&str> {
    let c = text[at..].chars().next()?;
    if !is_word_char(c) {
        return None;
    }
    let start = text[..at]
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_word_char(c))
        .last()
        .map_or(at, |(i, _)| i);
    let end = text[at..]
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(text.len(), |(i, _)| at + i);
    Some(&text[start..end])
}

/// Odd number of unescaped double quotes.
fn inside_string(text: &str) -> bool {
    let mut open = false;
    let mut escaped = false;
    for c in text.chars() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => open = !open,
            _ => {}
        }
    }
    open
}
