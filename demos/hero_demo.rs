//! Hero Demo: the typewriter code card in a terminal.
//!
//! Types out a small `developer.js` object line by line, holds it for a few
//! seconds, clears it and starts over.
//!
//! Press 'q', Escape or Ctrl+C to quit.
//!
//! Logging is off by default so the alternate screen stays clean. Set
//! `TYPEWRITER_LOG_FILE=/tmp/typewriter.log` (and optionally
//! `TYPEWRITER_LOG=debug`) to capture engine events.

use crossbeam_channel::{select, tick};
use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use typewriter::payload::{hero_script, HERO_FILE_NAME, HERO_START_DELAY};
use typewriter::{
    Buffer, Caret, CardLayout, CodeCard, CodeCardConfig, InputEvent, Rect, Rgb, Script, Stage,
    StatusBar, Style, Typewriter, TypewriterConfig, TypewriterError, TypistActor, TypistEvent,
    Widget,
};
use unicode_width::UnicodeWidthStr;

/// Blink phase is re-checked this often.
const BLINK_POLL: Duration = Duration::from_millis(50);

fn init_logging() {
    let Some(path) = std::env::var_os("TYPEWRITER_LOG_FILE") else {
        return;
    };
    let Ok(file) = File::create(&path) else {
        return;
    };
    let filter =
        EnvFilter::try_from_env("TYPEWRITER_LOG").unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_thread_names(true)
        .try_init();
}

/// The card widgets laid out for one terminal size.
struct Card {
    code: CodeCard,
    status: StatusBar,
}

impl Card {
    fn layout(script: &Script, width: u16, height: u16) -> Result<Self, TypewriterError> {
        let max_width = script
            .iter()
            .map(|line| line.text().width())
            .max()
            .unwrap_or(0);
        let max_width = u16::try_from(max_width).unwrap_or(u16::MAX);
        let layout = CardLayout::compute(Rect::from_size(width, height), script.len(), max_width)?;

        let config = CodeCardConfig {
            file_name: HERO_FILE_NAME.to_string(),
            ..CodeCardConfig::default()
        };
        Ok(Self {
            code: CodeCard::with_config(layout.frame, script.len(), config),
            status: StatusBar::new(layout.status),
        })
    }

    fn needs_redraw(&self) -> bool {
        self.code.needs_redraw() || self.status.needs_redraw()
    }

    fn render(&mut self, buffer: &mut Buffer) {
        self.code.render(buffer);
        self.status.render(buffer);
        self.code.clear_redraw();
        self.status.clear_redraw();
    }
}

fn draw_too_small(buffer: &mut Buffer, error: &TypewriterError) {
    buffer.clear();
    let area = buffer.area();
    buffer.put_str(0, 0, &error.to_string(), Style::new(Rgb::hex(0xF59E0B), Rgb::BLACK), area);
}

fn main() -> typewriter::Result<()> {
    init_logging();

    let script = hero_script();
    let config = TypewriterConfig::default();
    let caret = Caret::new(config.caret_blink);

    let mut stage = Stage::new()?;
    let mut card = Card::layout(&script, stage.width(), stage.height());
    if let Err(e) = &card {
        draw_too_small(stage.buffer_mut(), e);
    }
    stage.request_redraw();

    let typist = TypistActor::spawn(Typewriter::new(script.clone(), config), HERO_START_DELAY)?;
    let frames = typist.receiver().clone();
    let input = stage.input_receiver().clone();
    let blink = tick(BLINK_POLL);
    let started = Instant::now();
    let mut last_frame = None;

    while stage.is_running() {
        select! {
            recv(frames) -> event => match event {
                Ok(TypistEvent::Frame(frame)) => {
                    if let Ok(card) = &mut card {
                        card.status.set_frame(&frame);
                        card.code.set_frame(frame.clone());
                    }
                    last_frame = Some(frame);
                }
                Ok(TypistEvent::Stopped) | Err(_) => stage.stop(),
            },
            recv(input) -> event => match event {
                Ok(event) if event.is_quit() => stage.stop(),
                Ok(InputEvent::Resize { width, height }) => {
                    stage.handle_resize(width, height);
                    stage.buffer_mut().clear();
                    card = Card::layout(&script, stage.width(), stage.height());
                    match &mut card {
                        Ok(card) => {
                            if let Some(frame) = &last_frame {
                                card.status.set_frame(frame);
                                card.code.set_frame(frame.clone());
                            }
                            card.render(stage.buffer_mut());
                        }
                        Err(e) => draw_too_small(stage.buffer_mut(), e),
                    }
                    stage.request_redraw();
                }
                Ok(InputEvent::Error(message)) => tracing::warn!(%message, "input error"),
                Ok(_) => {}
                Err(_) => stage.stop(),
            },
            recv(blink) -> _ => {
                if let Ok(card) = &mut card {
                    card.code.set_caret_visible(caret.visible_at(started.elapsed()));
                }
            },
        }

        if let Ok(card) = &mut card {
            if card.needs_redraw() {
                stage.begin_frame();
                card.render(stage.buffer_mut());
                stage.end_frame();
            }
        }
    }

    typist.join();
    Ok(())
}
