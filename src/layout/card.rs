//! Card layout: the code-editor window that hosts the typewriter.
//!
//! ```text
//! ╭────────────────────────────────╮  <- frame
//! │ ● ● ●  developer.js            │  <- title
//! ├────────────────────────────────┤
//! │  1  const developer = {        │  <- gutter | code
//! │  2    name: "…",               │
//! ├────────────────────────────────┤
//! │ Ln 2, Col 9  Spaces: 2 ● Ready │  <- status
//! ╰────────────────────────────────╯
//! ```
//!
//! Computed once per resize; widgets only read the resulting rectangles.

use super::Rect;
use crate::error::{Result, TypewriterError};

/// Rows taken by chrome: top border, title, separator, separator, status, bottom border.
const CHROME_ROWS: u16 = 6;
/// Columns taken by the two side borders and one column of padding each side.
const CHROME_COLS: u16 = 4;
/// Gap between the line numbers and the code.
const GUTTER_GAP: u16 = 2;

/// Smallest card that still shows one line of code.
pub const MIN_CARD_WIDTH: u16 = 24;
/// Smallest card height.
pub const MIN_CARD_HEIGHT: u16 = CHROME_ROWS + 1;

/// Pre-computed rectangles of the code card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    /// Outer frame, borders included.
    pub frame: Rect,
    /// Title row (window dots and file name).
    pub title: Rect,
    /// Line-number column.
    pub gutter: Rect,
    /// Typed code area.
    pub code: Rect,
    /// Status row.
    pub status: Rect,
}

impl CardLayout {
    /// Center a card for `lines` lines of at most `max_line_width` columns
    /// inside `area`.
    ///
    /// The card shrinks to fit small terminals; code that does not fit is
    /// clipped by the widgets.
    pub fn compute(area: Rect, lines: usize, max_line_width: u16) -> Result<Self> {
        if area.width < MIN_CARD_WIDTH || area.height < MIN_CARD_HEIGHT {
            return Err(TypewriterError::TooSmall {
                width: area.width,
                height: area.height,
                min_width: MIN_CARD_WIDTH,
                min_height: MIN_CARD_HEIGHT,
            });
        }
        let lines = u16::try_from(lines.max(1)).unwrap_or(u16::MAX);
        let gutter_width = gutter_width(lines) + GUTTER_GAP;

        // Leave room for the caret after the longest line.
        let want_width = max_line_width
            .saturating_add(gutter_width)
            .saturating_add(CHROME_COLS + 1)
            .max(MIN_CARD_WIDTH);
        let want_height = lines.saturating_add(CHROME_ROWS);

        Ok(Self::from_frame(area.centered(want_width, want_height), usize::from(lines)))
    }

    /// Split an already placed frame into its regions.
    ///
    /// Regions of a frame smaller than the chrome come out empty.
    pub fn from_frame(frame: Rect, lines: usize) -> Self {
        let lines = u16::try_from(lines.max(1)).unwrap_or(u16::MAX);
        let inner = frame.inset(2, 1);
        let (title, rest) = inner.split_top(1);
        let (_, rest) = rest.split_top(1);
        let (rest, status) = rest.split_bottom(1);
        let (body, _) = rest.split_bottom(1);
        let (gutter, code) = body.split_left(gutter_width(lines) + GUTTER_GAP);

        Self {
            frame,
            title,
            gutter,
            code,
            status,
        }
    }

    /// Row of the separator under the title.
    pub const fn title_separator_row(&self) -> u16 {
        self.title.y + 1
    }

    /// Row of the separator above the status bar.
    pub const fn status_separator_row(&self) -> u16 {
        self.status.y.saturating_sub(1)
    }
}

/// Digits needed to number `lines` lines.
pub fn gutter_width(lines: u16) -> u16 {
    let mut n = lines.max(1);
    let mut digits = 0;
    while n > 0 {
        digits += 1;
        n /= 10;
    }
    digits
}
