//! Engine: the typewriter state machine, independent of any renderer.
//!
//! - [`Typewriter`]: owns the script, the [`RevealState`] and one pending timer
//! - [`DelaySource`]: pluggable per-character jitter ([`RandomDelay`], [`FixedDelay`])
//! - [`Frame`]: owned snapshot handed to widgets and across threads

mod delay;
mod state;
mod timer;
mod typewriter;

pub use delay::{DelaySource, FixedDelay, RandomDelay};
pub use state::{Frame, FrameLine, RevealState};
pub use timer::{Timer, TimerKind, TimerSlot};
pub use typewriter::{Step, Typewriter};
