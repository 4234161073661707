//! Status Bar Widget: editor status line at the bottom of the card.
//!
//! Left section shows the cursor position and indentation, right section a
//! coloured dot with `Ready` or `Typing`.

use super::traits::Widget;
use crate::buffer::{Buffer, Cell, Rgb, Style};
use crate::engine::Frame;
use crate::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Configuration for the status bar widget.
#[derive(Debug, Clone)]
pub struct StatusBarConfig {
    /// Background color.
    pub bg: Rgb,
    /// Text color.
    pub fg: Rgb,
    /// Dot color while idle.
    pub ready: Rgb,
    /// Dot color while typing.
    pub typing: Rgb,
    /// Indentation width shown as `Spaces: n`.
    pub indent_width: usize,
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        let bg = Rgb::hex(0x0F172A);
        Self {
            bg,
            fg: Rgb::hex(0xE2E8F0).blend(bg, 153),
            ready: Rgb::hex(0x22C55E),
            typing: Rgb::hex(0xF59E0B),
            indent_width: 2,
        }
    }
}

/// Editor mode shown on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Nothing is being typed.
    Ready,
    /// The typewriter is revealing lines.
    Typing,
}

impl EditorMode {
    /// Label shown after the dot.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Typing => "Typing",
        }
    }
}

/// The status line.
#[derive(Debug)]
pub struct StatusBar {
    /// 1-based cursor line.
    line: usize,
    /// 1-based cursor column.
    column: usize,
    mode: EditorMode,
    /// Widget bounds.
    bounds: Rect,
    /// Configuration.
    config: StatusBarConfig,
    /// Needs redraw flag.
    dirty: bool,
}

impl StatusBar {
    /// Create a new status bar with the given bounds.
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, StatusBarConfig::default())
    }

    /// Create a new status bar with custom configuration.
    pub const fn with_config(bounds: Rect, config: StatusBarConfig) -> Self {
        Self {
            line: 1,
            column: 1,
            mode: EditorMode::Ready,
            bounds,
            config,
            dirty: true,
        }
    }

    /// Follow an engine frame.
    pub fn set_frame(&mut self, frame: &Frame) {
        let (line, column) = frame.cursor();
        let mode = if frame.active && !frame.is_complete() {
            EditorMode::Typing
        } else {
            EditorMode::Ready
        };
        if (line, column, mode) != (self.line, self.column, self.mode) {
            self.line = line;
            self.column = column;
            self.mode = mode;
            self.dirty = true;
        }
    }

    /// Current mode.
    pub const fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Left section text.
    pub fn left(&self) -> String {
        format!(
            "Ln {}, Col {}  Spaces: {}",
            self.line, self.column, self.config.indent_width
        )
    }

    /// Right section text, without the dot.
    pub const fn right(&self) -> &'static str {
        self.mode.label()
    }
}

impl Widget for StatusBar {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        if self.bounds.is_empty() {
            return;
        }
        let x = self.bounds.x;
        let y = self.bounds.y;
        let text = Style::new(self.config.fg, self.config.bg);

        // Clear the line with background
        let row = Rect::new(x, y, self.bounds.width, 1);
        buffer.fill(row, Cell::new(' ').with_bg(self.config.bg));

        buffer.put_str(x, y, &self.left(), text, row);

        // Right-aligned "● Ready"; dropped when it would overlap the left text.
        let label = self.right();
        #[allow(clippy::cast_possible_truncation)]
        let right_width = (label.width() + 2) as u16;
        #[allow(clippy::cast_possible_truncation)]
        let left_width = self.left().width() as u16;
        if left_width + 1 + right_width > self.bounds.width {
            return;
        }
        let start = self.bounds.right() - right_width;
        let dot = match self.mode {
            EditorMode::Ready => self.config.ready,
            EditorMode::Typing => self.config.typing,
        };
        buffer.put_char(start, y, '●', Style::new(dot, self.config.bg), row);
        buffer.put_str(start + 2, y, label, text, row);
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TypewriterConfig;
    use crate::engine::{FixedDelay, Typewriter};
    use crate::script::Script;
    use std::time::Duration;

    fn engine() -> Typewriter<FixedDelay> {
        let script = Script::new(["ab", "c"]);
        let mut tw = Typewriter::with_delays(script, TypewriterConfig::uniform(10), FixedDelay);
        tw.start(Duration::ZERO);
        tw
    }

    #[test]
    fn test_status_bar_idle() {
        let mut bar = StatusBar::new(Rect::new(0, 0, 40, 1));
        let mut buffer = Buffer::new(40, 1);
        bar.render(&mut buffer);
        let row = buffer.row_text(0);
        assert!(row.starts_with("Ln 1, Col 1  Spaces: 2"));
        assert!(row.ends_with("● Ready"));
        bar.clear_redraw();
        assert!(!bar.needs_redraw());
    }

    #[test]
    fn test_status_bar_follows_typing() {
        let mut tw = engine();
        let mut bar = StatusBar::new(Rect::new(0, 0, 40, 1));
        tw.step(); // Started
        tw.step(); // "a"
        bar.set_frame(&tw.frame());
        assert_eq!(bar.mode(), EditorMode::Typing);
        assert_eq!(bar.left(), "Ln 1, Col 2  Spaces: 2");

        while !tw.frame().is_complete() {
            tw.step();
        }
        bar.set_frame(&tw.frame());
        assert_eq!(bar.mode(), EditorMode::Ready);
        assert_eq!(bar.left(), "Ln 2, Col 2  Spaces: 2");
    }

    #[test]
    fn test_unchanged_frame_is_clean() {
        let tw = engine();
        let mut bar = StatusBar::new(Rect::new(0, 0, 40, 1));
        bar.set_frame(&tw.frame());
        bar.clear_redraw();
        bar.set_frame(&tw.frame());
        assert!(!bar.needs_redraw());
    }

    #[test]
    fn test_narrow_bar_drops_indicator() {
        let bar = StatusBar::new(Rect::new(0, 0, 24, 1));
        let mut buffer = Buffer::new(24, 1);
        bar.render(&mut buffer);
        assert!(!buffer.row_text(0).contains("Ready"));
    }
}
