//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use crate::buffer::{Modifiers, Rgb};
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output for a frame is accumulated here, then flushed in a single
/// `write()` so the terminal never shows a half-drawn card.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create an output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Buffer length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a character.
    #[inline]
    pub fn push_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }

    /// Move the cursor to (x, y), using the shortest sequence available.
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        let (row, col) = (u32::from(y) + 1, u32::from(x) + 1);
        if row == 1 && col == 1 {
            self.data.extend_from_slice(b"\x1b[H");
        } else if col == 1 {
            let _ = write!(self.data, "\x1b[{row}H");
        } else {
            let _ = write!(self.data, "\x1b[{row};{col}H");
        }
    }

    /// Hide the cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show the cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Set foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Set background color (true color).
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Emit SGR sequences switching on `modifiers`.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        for (flag, code) in [
            (Modifiers::BOLD, b"\x1b[1m"),
            (Modifiers::DIM, b"\x1b[2m"),
            (Modifiers::ITALIC, b"\x1b[3m"),
            (Modifiers::UNDERLINE, b"\x1b[4m"),
        ] {
            if modifiers.contains(flag) {
                self.data.extend_from_slice(code);
            }
        }
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_move_optimization() {
        let mut out = OutputBuffer::default();
        out.cursor_move(0, 0);
        assert_eq!(out.as_bytes(), b"\x1b[H");

        out.clear();
        out.cursor_move(0, 5);
        assert_eq!(out.as_bytes(), b"\x1b[6H");

        out.clear();
        out.cursor_move(10, 5);
        assert_eq!(out.as_bytes(), b"\x1b[6;11H");
    }

    #[test]
    fn test_modifiers_sequence() {
        let mut out = OutputBuffer::default();
        out.set_modifiers(Modifiers::BOLD | Modifiers::ITALIC);
        assert_eq!(out.as_bytes(), b"\x1b[1m\x1b[3m");
    }

    #[test]
    fn test_flush_to_writer() {
        let mut out = OutputBuffer::with_capacity(16);
        out.push_char('日');
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, "日".as_bytes());
    }
}
