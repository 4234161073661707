//! Message types for actor communication.
//!
//! These enums define the protocol between the typist, input and render
//! threads and the main loop.

use crate::buffer::Buffer;
use crate::engine::Frame;

/// Key codes the demo reacts to.
///
/// A small subset of crossterm's `KeyCode`; everything else is dropped at
/// the input thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };
}

/// Events from the input thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during keypress.
        modifiers: KeyModifiers,
    },

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

impl InputEvent {
    /// Whether this event asks the application to quit (`q`, `Esc`, `Ctrl+C`).
    pub const fn is_quit(&self) -> bool {
        matches!(
            self,
            Self::Key {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            } | Self::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers { control: true, .. },
            } | Self::Shutdown
        )
    }
}

/// Commands sent to the render thread.
#[derive(Debug)]
pub enum RenderCommand {
    /// Diff this buffer against what is on screen.
    Update(Box<Buffer>),

    /// Clear the screen and draw this buffer from scratch.
    FullRedraw(Box<Buffer>),

    /// The terminal changed size; the next frame is drawn in full.
    Resize {
        /// New width.
        width: u16,
        /// New height.
        height: u16,
    },

    /// Shutdown the render thread.
    Shutdown,
}

/// Events from the typist thread.
#[derive(Debug, Clone)]
pub enum TypistEvent {
    /// The reveal state changed.
    Frame(Frame),

    /// The typist thread has exited; no further frames follow.
    Stopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
        InputEvent::Key { code, modifiers }
    }

    #[test]
    fn test_quit_keys() {
        assert!(key(KeyCode::Char('q'), KeyModifiers::NONE).is_quit());
        assert!(key(KeyCode::Esc, KeyModifiers::NONE).is_quit());
        let ctrl = KeyModifiers {
            control: true,
            ..KeyModifiers::NONE
        };
        assert!(key(KeyCode::Char('c'), ctrl).is_quit());
        assert!(InputEvent::Shutdown.is_quit());
    }

    #[test]
    fn test_other_keys_do_not_quit() {
        assert!(!key(KeyCode::Char('c'), KeyModifiers::NONE).is_quit());
        assert!(!key(KeyCode::Enter, KeyModifiers::NONE).is_quit());
        assert!(!InputEvent::Resize { width: 80, height: 24 }.is_quit());
    }
}
