//! Actor Model: Message-passing concurrency for the card.
//!
//! Each concern runs on its own thread and talks over crossbeam channels:
//! - **Typist Actor**: drives the typewriter engine against the wall clock
//! - **Input Actor**: polls terminal events, forwards to the main loop
//! - **Render Actor**: receives frames, diffs and flushes
//! - **Main Loop**: draws widgets from the latest frame
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     TypistEvent     ┌──────────────┐
//! │Typist Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │              │
//! ┌──────────────┐     InputEvent      │  Main Loop   │
//! │ Input Thread │ ─────────────────▶  │   (Stage)    │
//! └──────────────┘                     │              │
//! ┌──────────────┐    RenderCommand    │              │
//! │Render Thread │ ◀───────────────── │              │
//! └──────────────┘                     └──────────────┘
//! ```

mod input;
mod messages;
mod renderer;
mod stage;
mod typist;

pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers, RenderCommand, TypistEvent};
pub use renderer::{RenderStats, RendererActor};
pub use stage::{Stage, StageConfig};
pub use typist::TypistActor;
