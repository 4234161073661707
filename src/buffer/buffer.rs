//! Buffer: the grid the widgets draw into.
//!
//! Cells are stored row-major in one contiguous `Vec`. Writes outside the
//! grid are silently clipped, so widgets can draw against their bounds
//! without checking the terminal size first.

use super::cell::{Cell, Modifiers, Rgb};
use crate::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;

/// Foreground, background and modifiers applied to written text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Style modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// Plain style with the given colors.
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            modifiers: Modifiers::empty(),
        }
    }

    /// Add modifiers (builder pattern).
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    fn apply(self, cell: Cell) -> Cell {
        cell.with_fg(self.fg)
            .with_bg(self.bg)
            .with_modifiers(self.modifiers)
    }
}

/// A grid of cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Buffer {
    /// Create a blank buffer.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Buffer dimensions must be non-zero");
        Self {
            cells: vec![Cell::EMPTY; usize::from(width) * usize::from(height)],
            width,
            height,
        }
    }

    /// Buffer width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a rectangle.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Overwrite the cell at (x, y). Returns `false` if out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        match self.index_of(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Write one glyph, adding a continuation cell for wide glyphs.
    ///
    /// A wide glyph that would straddle the right edge of `clip` is replaced
    /// by a space so nothing spills outside. Returns the columns used.
    pub fn put_char(&mut self, x: u16, y: u16, glyph: char, style: Style, clip: Rect) -> u16 {
        if !clip.contains(x, y) {
            return 0;
        }
        let mut cell = style.apply(Cell::new(glyph));
        if cell.width() == 2 && x + 1 >= clip.right() {
            cell = style.apply(Cell::new(' '));
        }
        self.set(x, y, cell);
        if cell.width() == 2 {
            self.set(x + 1, y, Cell::continuation(style.bg));
        }
        u16::from(cell.width())
    }

    /// Write a string from (x, y), clipped to `clip`.
    ///
    /// Every grapheme takes the column(s) of its base character, so runs of
    /// spaces keep their width. Returns the columns used.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: Style, clip: Rect) -> u16 {
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let Some(base) = grapheme.chars().next() else {
                continue;
            };
            let used = self.put_char(col, y, base, style, clip);
            if used == 0 {
                break;
            }
            col += used;
        }
        col - x
    }

    /// Fill a rectangle with one cell.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let rect = rect.intersection(&self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Reset every cell to [`Cell::EMPTY`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Resize, keeping the top-left content that still fits.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        let mut next = Self::new(width, height);
        let keep_w = usize::from(self.width.min(width));
        for (old_row, new_row) in self
            .cells
            .chunks(usize::from(self.width))
            .zip(next.cells.chunks_mut(usize::from(width)))
        {
            new_row[..keep_w].copy_from_slice(&old_row[..keep_w]);
        }
        *self = next;
    }

    /// Text of one row with continuation cells dropped and trailing blanks
    /// trimmed. Mostly useful in tests.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = usize::from(y) * usize::from(self.width);
        let row = &self.cells[start..start + usize::from(self.width)];
        let text: String = row
            .iter()
            .filter(|c| !c.is_continuation())
            .map(Cell::glyph)
            .collect();
        text.trim_end().to_string()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
