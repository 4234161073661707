//! Diffing: turn the change between two buffers into minimal ANSI output.
//!
//! While the typewriter runs, a frame usually differs from the previous one
//! by a single glyph and the caret, so the diff path emits a handful of
//! bytes per frame. Cursor position and SGR state are tracked across cells
//! to skip redundant moves and color changes.

use super::{Buffer, Cell, Modifiers, Rgb};
use crate::terminal::OutputBuffer;

/// Terminal state as last left by the renderer.
#[derive(Debug, Clone, Default)]
pub struct DiffState {
    /// Where the terminal cursor is, if known.
    cursor: Option<(u16, u16)>,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    modifiers: Option<Modifiers>,
}

impl DiffState {
    /// Unknown terminal state.
    pub const fn new() -> Self {
        Self {
            cursor: None,
            fg: None,
            bg: None,
            modifiers: None,
        }
    }

    /// Forget everything, e.g. after a raw write or a full redraw.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn emit_cell(&mut self, x: u16, y: u16, cell: &Cell, out: &mut OutputBuffer) -> DiffResult {
        let mut result = DiffResult {
            cells_changed: 1,
            ..DiffResult::default()
        };

        if self.cursor != Some((x, y)) {
            out.cursor_move(x, y);
            result.cursor_moves += 1;
        }

        // Turning a modifier off needs a full SGR reset, which also drops colors.
        let current = self.modifiers.unwrap_or_default();
        if !current.difference(cell.modifiers()).is_empty() {
            out.reset_attrs();
            self.fg = None;
            self.bg = None;
            self.modifiers = Some(Modifiers::empty());
        }
        if self.fg != Some(cell.fg()) {
            out.set_fg(cell.fg());
            self.fg = Some(cell.fg());
            result.color_changes += 1;
        }
        if self.bg != Some(cell.bg()) {
            out.set_bg(cell.bg());
            self.bg = Some(cell.bg());
            result.color_changes += 1;
        }
        if self.modifiers != Some(cell.modifiers()) {
            let added = cell.modifiers().difference(self.modifiers.unwrap_or_default());
            out.set_modifiers(added);
            self.modifiers = Some(cell.modifiers());
        }

        out.push_char(cell.glyph());
        self.cursor = Some((x + u16::from(cell.width()), y));
        result
    }
}

/// Statistics about one diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Cells written.
    pub cells_changed: usize,
    /// Cursor move sequences emitted.
    pub cursor_moves: usize,
    /// Color sequences emitted.
    pub color_changes: usize,
}

impl std::ops::AddAssign for DiffResult {
    fn add_assign(&mut self, rhs: Self) {
        self.cells_changed += rhs.cells_changed;
        self.cursor_moves += rhs.cursor_moves;
        self.color_changes += rhs.color_changes;
    }
}

/// Emit the cells of `next` that differ from `current`.
///
/// Both buffers must have the same dimensions. When the glyph half of a
/// wide character changes, the glyph is re-emitted and its continuation is
/// skipped.
pub fn render_diff(
    current: &Buffer,
    next: &Buffer,
    out: &mut OutputBuffer,
    state: &mut DiffState,
) -> DiffResult {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    let width = usize::from(next.width());
    let mut result = DiffResult::default();

    for (idx, (old, new)) in current.cells().iter().zip(next.cells()).enumerate() {
        if old == new || new.is_continuation() {
            continue;
        }
        let x = (idx % width) as u16;
        let y = (idx / width) as u16;
        result += state.emit_cell(x, y, new, out);
    }

    result
}

/// Emit every cell of `buffer`, starting from a cleared screen.
pub fn render_full(buffer: &Buffer, out: &mut OutputBuffer, state: &mut DiffState) {
    state.reset();
    out.cursor_hide();
    out.reset_attrs();
    out.clear_screen();
    state.modifiers = Some(Modifiers::empty());

    let width = usize::from(buffer.width());
    for (idx, cell) in buffer.cells().iter().enumerate() {
        if cell.is_continuation() {
            continue;
        }
        let x = (idx % width) as u16;
        let y = (idx / width) as u16;
        state.emit_cell(x, y, cell, out);
    }
    out.reset_attrs();
    state.fg = None;
    state.bg = None;
    state.modifiers = Some(Modifiers::empty());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Style;

    fn screen_of(bytes: &[u8], width: u16, height: u16) -> vt100::Parser {
        let mut parser = vt100::Parser::new(height, width, 0);
        parser.process(bytes);
        parser
    }

    #[test]
    fn test_diff_identical_buffers() {
        let a = Buffer::new(10, 5);
        let b = a.clone();
        let mut out = OutputBuffer::default();
        let result = render_diff(&a, &b, &mut out, &mut DiffState::new());
        assert_eq!(result.cells_changed, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_diff_adjacent_cells_single_move() {
        let a = Buffer::new(10, 5);
        let mut b = a.clone();
        let area = b.area();
        b.put_str(2, 1, "abc", Style::new(Rgb::WHITE, Rgb::BLACK), area);

        let mut out = OutputBuffer::default();
        let result = render_diff(&a, &b, &mut out, &mut DiffState::new());
        assert_eq!(result.cells_changed, 3);
        assert_eq!(result.cursor_moves, 1);
        // fg and bg once, then reused
        assert_eq!(result.color_changes, 2);
    }

    #[test]
    fn test_appending_one_glyph_is_cheap() {
        let style = Style::new(Rgb::hex(0x60A5FA), Rgb::BLACK);
        let mut a = Buffer::new(40, 3);
        let area = a.area();
        a.put_str(0, 0, "const", style, area);
        let mut b = a.clone();
        b.put_str(5, 0, " ", style, area);

        let mut out = OutputBuffer::default();
        let result = render_diff(&a, &b, &mut out, &mut DiffState::new());
        assert_eq!(result.cells_changed, 1);
        assert!(out.len() < 64);
    }

    #[test]
    fn test_diff_applied_on_screen() {
        let style = Style::new(Rgb::WHITE, Rgb::BLACK);
        let mut state = DiffState::new();
        let mut out = OutputBuffer::default();

        let mut a = Buffer::new(20, 4);
        let area = a.area();
        a.put_str(0, 0, "const", style, area);
        render_full(&a, &mut out, &mut state);

        let mut b = a.clone();
        b.put_str(0, 1, "  name: 日本", style, area);
        render_diff(&a, &b, &mut out, &mut state);

        let parser = screen_of(out.as_bytes(), 20, 4);
        let screen = parser.screen();
        assert_eq!(screen.contents_between(0, 0, 0, 20).trim_end(), "const");
        assert_eq!(screen.contents_between(1, 0, 1, 20).trim_end(), "  name: 日本");
    }

    #[test]
    fn test_modifier_removal_resets_colors() {
        let style = Style::new(Rgb::WHITE, Rgb::BLACK);
        let a = Buffer::new(4, 1);
        let mut b = a.clone();
        let area = b.area();
        b.put_str(0, 0, "a", style.with_modifiers(Modifiers::BOLD), area);
        b.put_str(1, 0, "b", style, area);

        let mut out = OutputBuffer::default();
        let result = render_diff(&a, &b, &mut out, &mut DiffState::new());
        // fg+bg for 'a', then again after the reset for 'b'
        assert_eq!(result.color_changes, 4);

        let parser = screen_of(out.as_bytes(), 4, 1);
        assert!(parser.screen().cell(0, 0).unwrap().bold());
        assert!(!parser.screen().cell(0, 1).unwrap().bold());
    }
}
