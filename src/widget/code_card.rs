//! Code Card Widget: an editor window that shows the typed code.
//!
//! Draws the frame, the title row with window dots and file name, the
//! line-number gutter and every revealed line with syntax colours. The
//! status row inside the frame is left to [`StatusBar`](super::StatusBar).

use super::caret::Caret;
use super::traits::Widget;
use crate::buffer::{Buffer, Cell, Rgb, Style};
use crate::engine::{Frame, FrameLine};
use crate::highlight::{Highlighter, SyntaxCategory};
use crate::layout::{gutter_width, CardLayout, Rect};
use unicode_segmentation::UnicodeSegmentation;

/// Colours of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Card background.
    pub background: Rgb,
    /// Border and separators.
    pub border: Rgb,
    /// Plain code text.
    pub foreground: Rgb,
    /// File name in the title row.
    pub title: Rgb,
    /// Line numbers.
    pub gutter: Rgb,
    /// Close, minimize and zoom dots.
    pub dots: [Rgb; 3],
    /// [`SyntaxCategory::KeywordPrimary`].
    pub keyword_primary: Rgb,
    /// [`SyntaxCategory::KeywordSecondary`].
    pub keyword_secondary: Rgb,
    /// [`SyntaxCategory::String`].
    pub string: Rgb,
    /// [`SyntaxCategory::Bracket`].
    pub bracket: Rgb,
    /// [`SyntaxCategory::Punctuation`].
    pub punctuation: Rgb,
    /// Caret bar.
    pub caret: Rgb,
}

impl Palette {
    /// Foreground colour for a syntax category.
    pub const fn color(&self, category: SyntaxCategory) -> Rgb {
        match category {
            SyntaxCategory::KeywordPrimary => self.keyword_primary,
            SyntaxCategory::KeywordSecondary => self.keyword_secondary,
            SyntaxCategory::String => self.string,
            SyntaxCategory::Bracket => self.bracket,
            SyntaxCategory::Punctuation => self.punctuation,
            SyntaxCategory::Default => self.foreground,
        }
    }
}

impl Default for Palette {
    /// Dark editor theme.
    fn default() -> Self {
        let background = Rgb::hex(0x0F172A);
        let foreground = Rgb::hex(0xE2E8F0);
        Self {
            background,
            border: Rgb::hex(0x334155),
            foreground,
            title: foreground.blend(background, 153),
            gutter: foreground.blend(background, 77),
            dots: [Rgb::hex(0xEF4444), Rgb::hex(0xEAB308), Rgb::hex(0x22C55E)],
            keyword_primary: Rgb::hex(0x60A5FA),
            keyword_secondary: Rgb::hex(0xC084FC),
            string: Rgb::hex(0x34D399),
            bracket: Rgb::hex(0x34D399),
            punctuation: foreground.blend(background, 153),
            caret: Rgb::hex(0x3B82F6),
        }
    }
}

/// Configuration for the code card widget.
#[derive(Debug, Clone)]
pub struct CodeCardConfig {
    /// Name shown in the title row.
    pub file_name: String,
    /// Colours.
    pub palette: Palette,
    /// Syntax classifier.
    pub highlighter: Highlighter,
}

impl Default for CodeCardConfig {
    fn default() -> Self {
        Self {
            file_name: "developer.js".to_string(),
            palette: Palette::default(),
            highlighter: Highlighter::default(),
        }
    }
}

/// The editor window widget.
#[derive(Debug)]
pub struct CodeCard {
    layout: CardLayout,
    /// Number of script lines, for the gutter.
    line_count: usize,
    config: CodeCardConfig,
    frame: Option<Frame>,
    caret_visible: bool,
    dirty: bool,
}

impl CodeCard {
    /// Create a card for a script of `line_count` lines.
    pub fn new(bounds: Rect, line_count: usize) -> Self {
        Self::with_config(bounds, line_count, CodeCardConfig::default())
    }

    /// Create a card with custom configuration.
    pub fn with_config(bounds: Rect, line_count: usize, config: CodeCardConfig) -> Self {
        Self {
            layout: CardLayout::from_frame(bounds, line_count),
            line_count,
            config,
            frame: None,
            caret_visible: true,
            dirty: true,
        }
    }

    /// Regions of the card.
    pub const fn layout(&self) -> &CardLayout {
        &self.layout
    }

    /// Show a new engine frame.
    pub fn set_frame(&mut self, frame: Frame) {
        if self.frame.as_ref() != Some(&frame) {
            self.frame = Some(frame);
            self.dirty = true;
        }
    }

    /// Latest frame, if any.
    pub const fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Set the caret blink phase.
    pub fn set_caret_visible(&mut self, visible: bool) {
        if self.caret_visible != visible {
            self.caret_visible = visible;
            // Only matters while some line carries the caret.
            self.dirty |= self.frame.as_ref().is_some_and(|f| f.caret_line().is_some());
        }
    }

    fn style(&self, fg: Rgb) -> Style {
        Style::new(fg, self.config.palette.background)
    }

    fn render_chrome(&self, buffer: &mut Buffer) {
        let palette = &self.config.palette;
        let frame = self.layout.frame;
        let clip = frame;
        let border = self.style(palette.border);

        buffer.fill(frame, Cell::new(' ').with_bg(palette.background));

        let last_x = frame.right() - 1;
        let last_y = frame.bottom() - 1;
        for x in frame.x..frame.right() {
            buffer.put_char(x, frame.y, '─', border, clip);
            buffer.put_char(x, last_y, '─', border, clip);
        }
        for y in frame.y..frame.bottom() {
            buffer.put_char(frame.x, y, '│', border, clip);
            buffer.put_char(last_x, y, '│', border, clip);
        }
        buffer.put_char(frame.x, frame.y, '╭', border, clip);
        buffer.put_char(last_x, frame.y, '╮', border, clip);
        buffer.put_char(frame.x, last_y, '╰', border, clip);
        buffer.put_char(last_x, last_y, '╯', border, clip);

        for row in [self.layout.title_separator_row(), self.layout.status_separator_row()] {
            if row <= frame.y || row >= last_y {
                continue;
            }
            buffer.put_char(frame.x, row, '├', border, clip);
            for x in frame.x + 1..last_x {
                buffer.put_char(x, row, '─', border, clip);
            }
            buffer.put_char(last_x, row, '┤', border, clip);
        }

        // Title: three dots, then the file name.
        let title = self.layout.title;
        let mut x = title.x;
        for dot in palette.dots {
            x += buffer.put_char(x, title.y, '●', self.style(dot), title);
            x += buffer.put_char(x, title.y, ' ', self.style(dot), title);
        }
        x += 1;
        buffer.put_str(x, title.y, &self.config.file_name, self.style(palette.title), title);
    }

    fn render_gutter(&self, buffer: &mut Buffer) {
        let gutter = self.layout.gutter;
        let digits = usize::from(gutter_width(u16::try_from(self.line_count).unwrap_or(u16::MAX)));
        let style = self.style(self.config.palette.gutter);
        for (i, y) in (gutter.y..gutter.bottom()).enumerate().take(self.line_count) {
            let number = format!("{:>digits$}", i + 1);
            buffer.put_str(gutter.x, y, &number, style, gutter);
        }
    }

    fn render_line(&self, buffer: &mut Buffer, line: &FrameLine, y: u16) {
        let code = self.layout.code;
        let palette = &self.config.palette;
        let categories = self.config.highlighter.classify_prefix(&line.source, line.revealed);

        let mut x = code.x;
        for (grapheme, category) in line.text().graphemes(true).zip(categories) {
            let used = buffer.put_str(x, y, grapheme, self.style(palette.color(category)), code);
            if used == 0 {
                return;
            }
            x += used;
        }
        if line.caret && self.caret_visible {
            buffer.put_char(x, y, Caret::GLYPH, self.style(palette.caret), code);
        }
    }
}

impl Widget for CodeCard {
    fn bounds(&self) -> Rect {
        self.layout.frame
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.layout = CardLayout::from_frame(bounds, self.line_count);
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        if self.layout.frame.width < 2 || self.layout.frame.height < 2 {
            return;
        }
        self.render_chrome(buffer);
        self.render_gutter(buffer);

        let Some(frame) = &self.frame else {
            return;
        };
        let code = self.layout.code;
        for (line, y) in frame.lines.iter().zip(code.y..code.bottom()) {
            self.render_line(buffer, line, y);
        }
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

    fn typewriter(lines: &[&str]) -> Typewriter<FixedDelay> {
        let mut tw = Typewriter::with_delays(
            Script::new(lines.iter().copied()),
            TypewriterConfig::uniform(10),
            FixedDelay,
        );
        tw.start(Duration::ZERO);
        tw
    }

    fn card_for(tw: &Typewriter<FixedDelay>, area: Rect) -> (CodeCard, Buffer) {
        let layout = CardLayout::compute(area, tw.script().len(), 30).unwrap();
        let mut card = CodeCard::new(layout.frame, tw.script().len());
        card.set_frame(tw.frame());
        (card, Buffer::new(area.width, area.height))
    }

    fn code_text(card: &CodeCard, buffer: &Buffer, line: u16) -> String {
        let code = card.layout().code;
        buffer
            .row_text(code.y + line)
            .chars()
            .skip(usize::from(code.x))
            .take(usize::from(code.width))
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_renders_chrome() {
        let tw = typewriter(&["const a = 1;"]);
        let (card, mut buffer) = card_for(&tw, Rect::from_size(60, 12));
        card.render(&mut buffer);

        let title = buffer.row_text(card.layout().title.y);
        assert!(title.contains("● ● ●"));
        assert!(title.contains("developer.js"));
        let frame = card.layout().frame;
        assert_eq!(buffer.get(frame.x, frame.y).unwrap().glyph(), '╭');
        assert_eq!(buffer.get(frame.right() - 1, frame.bottom() - 1).unwrap().glyph(), '╯');
    }

    #[test]
    fn test_gutter_numbers_every_line() {
        let lines = ["a"; 11];
        let tw = typewriter(&lines);
        let (card, mut buffer) = card_for(&tw, Rect::from_size(60, 24));
        card.render(&mut buffer);

        let gutter = card.layout().gutter;
        let number = |y: u16| -> String {
            buffer.row_text(y).chars().skip(usize::from(gutter.x)).take(2).collect()
        };
        assert_eq!(number(gutter.y), " 1");
        assert_eq!(number(gutter.y + 10), "11");
    }

    #[test]
    fn test_keeps_indentation_and_colours() {
        let mut tw = typewriter(&["const developer = {", "  name: \"x\","]);
        while tw.frame().revealed() != vec!["const developer = {", "  name: \"x\","] {
            tw.step();
        }
        let (card, mut buffer) = card_for(&tw, Rect::from_size(60, 12));
        card.render(&mut buffer);

        assert_eq!(code_text(&card, &buffer, 0), "const developer = {");
        assert_eq!(code_text(&card, &buffer, 1), "  name: \"x\",");

        let palette = Palette::default();
        let code = card.layout().code;
        let fg = |x: u16, y: u16| buffer.get(code.x + x, code.y + y).unwrap().fg();
        assert_eq!(fg(0, 0), palette.keyword_primary);
        assert_eq!(fg(16, 0), palette.punctuation);
        assert_eq!(fg(2, 1), palette.keyword_secondary);
        assert_eq!(fg(9, 1), palette.string);
    }

    #[test]
    fn test_caret_follows_reveal_and_blinks() {
        let mut tw = typewriter(&["abc"]);
        tw.step(); // Started
        tw.step(); // "a"
        let (mut card, mut buffer) = card_for(&tw, Rect::from_size(60, 12));
        card.render(&mut buffer);
        let code = card.layout().code;
        assert_eq!(buffer.get(code.x + 1, code.y).unwrap().glyph(), Caret::GLYPH);

        card.clear_redraw();
        card.set_caret_visible(false);
        assert!(card.needs_redraw());
        let mut buffer = Buffer::new(60, 12);
        card.render(&mut buffer);
        assert_eq!(buffer.get(code.x + 1, code.y).unwrap().glyph(), ' ');
    }

    #[test]
    fn test_no_caret_after_line_complete() {
        let mut tw = typewriter(&["ab"]);
        for _ in 0..3 {
            tw.step();
        }
        assert_eq!(tw.frame().revealed(), vec!["ab"]);
        let (mut card, mut buffer) = card_for(&tw, Rect::from_size(60, 12));
        card.render(&mut buffer);
        let code = card.layout().code;
        assert_eq!(buffer.get(code.x + 2, code.y).unwrap().glyph(), ' ');

        card.clear_redraw();
        card.set_caret_visible(false);
        assert!(!card.needs_redraw());
    }

    #[test]
    fn test_same_frame_is_not_dirty() {
        let tw = typewriter(&["ab"]);
        let (mut card, _) = card_for(&tw, Rect::from_size(60, 12));
        card.clear_redraw();
        card.set_frame(tw.frame());
        assert!(!card.needs_redraw());
    }

    #[test]
    fn test_long_lines_are_clipped() {
        let long = "x".repeat(100);
        let mut tw = typewriter(&[long.as_str()]);
        while tw.frame().lines.first().map_or(0, |line| line.revealed) < 100 {
            tw.step();
        }
        let (card, mut buffer) = card_for(&tw, Rect::from_size(40, 10));
        card.render(&mut buffer);
        let frame = card.layout().frame;
        let code = card.layout().code;
        assert_eq!(buffer.get(frame.right() - 1, code.y).unwrap().glyph(), '│');
    }
}
