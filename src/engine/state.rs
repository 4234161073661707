//! Reveal state and the frames derived from it.

use crate::script::{Script, ScriptLine};
use std::time::Duration;

/// Mutable progress of the typing animation.
///
/// `revealed[i]` is a grapheme count into `script.line(i)` rather than a
/// copied string, so every revealed line is a prefix of its source by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealState {
    /// Revealed grapheme count per line. Empty until the first start.
    revealed: Vec<usize>,
    /// Line currently being typed.
    line_index: usize,
    /// Next grapheme to reveal in the current line.
    char_index: usize,
    /// Whether the reveal loop is running.
    active: bool,
}

impl RevealState {
    /// Fresh state: nothing revealed, inactive.
    pub const fn new() -> Self {
        Self {
            revealed: Vec::new(),
            line_index: 0,
            char_index: 0,
            active: false,
        }
    }

    /// Current line cursor.
    #[inline]
    pub const fn line_index(&self) -> usize {
        self.line_index
    }

    /// Current grapheme cursor within the line.
    #[inline]
    pub const fn char_index(&self) -> usize {
        self.char_index
    }

    /// Whether the reveal loop is running.
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Revealed grapheme counts, one per line once started.
    #[inline]
    pub fn revealed_counts(&self) -> &[usize] {
        &self.revealed
    }

    /// Revealed grapheme count of one line (0 before the first start).
    #[inline]
    pub fn revealed_len(&self, line: usize) -> usize {
        self.revealed.get(line).copied().unwrap_or(0)
    }

    /// Whether every line has been passed.
    #[inline]
    pub fn is_complete(&self, script: &Script) -> bool {
        self.line_index >= script.len()
    }

    pub(crate) fn activate(&mut self, script: &Script) {
        if self.revealed.len() != script.len() {
            self.revealed = vec![0; script.len()];
        }
        self.active = true;
    }

    /// Reveal one grapheme of the current line. Returns `false` if the line
    /// has nothing left to reveal.
    pub(crate) fn reveal_next(&mut self, script: &Script) -> bool {
        let Some(line) = script.line(self.line_index) else {
            return false;
        };
        if self.char_index >= line.len() {
            return false;
        }
        self.char_index += 1;
        self.revealed[self.line_index] = self.char_index;
        true
    }

    pub(crate) fn next_line(&mut self) {
        self.line_index += 1;
        self.char_index = 0;
    }

    /// Clear every line and go inactive, keeping one slot per line.
    pub(crate) fn reset(&mut self) {
        self.revealed.fill(0);
        self.line_index = 0;
        self.char_index = 0;
        self.active = false;
    }

    /// Whether the caret belongs on `line`.
    pub fn shows_caret(&self, script: &Script, line: usize) -> bool {
        self.active
            && line == self.line_index
            && script
                .line(line)
                .is_some_and(|source| self.revealed_len(line) < source.len())
    }
}

/// One line of a [`Frame`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    /// Source line.
    pub source: ScriptLine,
    /// Graphemes revealed so far.
    pub revealed: usize,
    /// Whether the caret is drawn after the revealed prefix.
    pub caret: bool,
}

impl FrameLine {
    /// The revealed prefix text.
    pub fn text(&self) -> &str {
        self.source.prefix(self.revealed)
    }

    /// Whether the whole line is visible.
    pub fn is_complete(&self) -> bool {
        self.revealed >= self.source.len()
    }
}

/// An owned snapshot of the engine, ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Per-line view. Empty until the engine first starts.
    pub lines: Vec<FrameLine>,
    /// Line cursor at snapshot time.
    pub line_index: usize,
    /// Grapheme cursor at snapshot time.
    pub char_index: usize,
    /// Whether the reveal loop was running.
    pub active: bool,
    /// Completed cycles so far.
    pub cycle: u64,
    /// Engine clock at snapshot time.
    pub elapsed: Duration,
}

impl Frame {
    pub(crate) fn capture(
        script: &Script,
        state: &RevealState,
        cycle: u64,
        elapsed: Duration,
    ) -> Self {
        let lines = (0..state.revealed_counts().len())
            .filter_map(|i| {
                script.line(i).map(|source| FrameLine {
                    source: source.clone(),
                    revealed: state.revealed_len(i),
                    caret: state.shows_caret(script, i),
                })
            })
            .collect();
        Self {
            lines,
            line_index: state.line_index(),
            char_index: state.char_index(),
            active: state.is_active(),
            cycle,
            elapsed,
        }
    }

    /// Revealed text of each line.
    pub fn revealed(&self) -> Vec<&str> {
        self.lines.iter().map(FrameLine::text).collect()
    }

    /// The line carrying the caret, if any.
    pub fn caret_line(&self) -> Option<usize> {
        self.lines.iter().position(|line| line.caret)
    }

    /// Whether every line has been typed out in this cycle.
    pub fn is_complete(&self) -> bool {
        !self.lines.is_empty() && self.line_index >= self.lines.len()
    }

    /// Editor-style cursor position, 1-based `(line, column)`.
    ///
    /// Once the cycle is complete the cursor rests after the last line.
    pub fn cursor(&self) -> (usize, usize) {
        match self.lines.last() {
            Some(last) if self.is_complete() => (self.lines.len(), last.revealed + 1),
            _ => (self.line_index + 1, self.char_index + 1),
        }
    }
}
