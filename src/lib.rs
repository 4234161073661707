//! # Typewriter
//!
//! A timer-driven typewriter effect that reveals lines of code one
//! character at a time, holds the finished text, clears it and starts over.
//!
//! The engine is a plain state machine on a virtual clock, so it can be
//! driven by tests, by a real-time thread or by any other host. A terminal
//! front end renders it as a flicker-free editor card.
//!
//! ## Core Concepts
//!
//! - **Engine**: [`Typewriter`] owns the [`Script`], the reveal state and a
//!   single pending timer; time only moves when the host advances it
//! - **Highlighting**: [`Highlighter`] colours any typed prefix statelessly
//! - **Actor model**: typist, input and render threads talk over channels
//! - **Double-buffered rendering**: frames are diffed into minimal ANSI
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use typewriter::{FixedDelay, Script, Typewriter, TypewriterConfig};
//!
//! let script = Script::new(["const x = 1;"]);
//! let mut tw = Typewriter::with_delays(script, TypewriterConfig::default(), FixedDelay);
//! tw.start(Duration::ZERO);
//!
//! tw.advance_by(Duration::from_millis(100));
//! assert_eq!(tw.frame().revealed(), vec!["co"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod config;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod layout;
pub mod payload;
pub mod script;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use actor::{
    InputEvent, KeyCode, KeyModifiers, RenderCommand, Stage, StageConfig, TypistActor, TypistEvent,
};
pub use buffer::{Buffer, Cell, Modifiers, Rgb, Style};
pub use config::TypewriterConfig;
pub use engine::{
    DelaySource, FixedDelay, Frame, FrameLine, RandomDelay, RevealState, Step, Typewriter,
};
pub use error::{Result, TypewriterError};
pub use highlight::{Highlighter, SyntaxCategory};
pub use layout::{CardLayout, Rect};
pub use script::{Script, ScriptLine};
pub use widget::{Caret, CodeCard, CodeCardConfig, Palette, StatusBar, StatusBarConfig, Widget};
