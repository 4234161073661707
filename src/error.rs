//! Error type for the terminal and thread plumbing.
//!
//! The typewriter engine itself cannot fail; only the surfaces that touch
//! the OS (raw mode, stdout, thread spawning) return [`TypewriterError`].

use std::io;
use thiserror::Error;

/// Errors raised while hosting the effect in a terminal.
#[derive(Error, Debug)]
pub enum TypewriterError {
    /// Terminal setup, teardown or output failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    /// The OS refused to spawn an actor thread.
    #[error("failed to spawn {name} thread: {source}")]
    Spawn {
        /// Thread name.
        name: &'static str,
        /// Underlying OS error.
        source: io::Error,
    },

    /// The terminal is too small to lay out the card.
    #[error("terminal too small: {width}x{height}, need at least {min_width}x{min_height}")]
    TooSmall {
        /// Current width.
        width: u16,
        /// Current height.
        height: u16,
        /// Required width.
        min_width: u16,
        /// Required height.
        min_height: u16,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TypewriterError>;
