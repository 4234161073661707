//! Cell: one terminal column of the code card.
//!
//! A cell stores a single `char` rather than a full grapheme cluster. The
//! card only ever draws source code, box-drawing glyphs and the caret, so
//! combining sequences are folded onto their base character when written
//! (see [`Buffer::put_str`](super::Buffer::put_str)).

use bitflags::bitflags;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., `0x60A5FA`).
    #[inline]
    pub const fn hex(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Linear blend towards `other`; `alpha` is the weight of `self` in 0..=255.
    ///
    /// Used to emulate translucent foregrounds (`text-foreground/60`) on a
    /// known background.
    pub fn blend(self, other: Self, alpha: u8) -> Self {
        let mix = |a: u8, b: u8| {
            let a = u16::from(a);
            let b = u16::from(b);
            let w = u16::from(alpha);
            ((a * w + b * (255 - w)) / 255) as u8
        };
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::hex(hex)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// ```
    /// use typewriter::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::ITALIC;
    /// assert!(style.contains(Modifiers::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
    }
}

/// A single terminal cell.
///
/// Wide glyphs (CJK, most emoji) occupy two columns: the glyph cell with
/// `width == 2` followed by a continuation cell with `width == 0` that the
/// renderer skips.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    glyph: char,
    width: u8,
    fg: Rgb,
    bg: Rgb,
    modifiers: Modifiers,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// A blank cell: space, white on black.
    pub const EMPTY: Self = Self {
        glyph: ' ',
        width: 1,
        fg: Rgb::WHITE,
        bg: Rgb::BLACK,
        modifiers: Modifiers::empty(),
    };

    /// Create a cell for `glyph` with its terminal display width.
    ///
    /// Control and zero-width characters get width 1 so they still occupy
    /// (and clear) a column.
    #[inline]
    pub fn new(glyph: char) -> Self {
        let width = unicode_width::UnicodeWidthChar::width(glyph).unwrap_or(1).clamp(1, 2);
        Self {
            glyph,
            width: width as u8,
            ..Self::EMPTY
        }
    }

    /// The continuation half of a wide glyph.
    #[inline]
    pub const fn continuation(bg: Rgb) -> Self {
        Self {
            glyph: ' ',
            width: 0,
            fg: Rgb::WHITE,
            bg,
            modifiers: Modifiers::empty(),
        }
    }

    /// The character drawn in this cell.
    #[inline]
    pub const fn glyph(&self) -> char {
        self.glyph
    }

    /// Display width (0 for continuations, 1 or 2 otherwise).
    #[inline]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Whether this is the right half of a wide glyph.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.width == 0
    }

    /// Foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Style modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("glyph", &self.glyph)
            .field("width", &self.width)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}
