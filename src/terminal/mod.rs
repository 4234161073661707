//! Terminal module: byte-level output helpers.

mod output;

pub use output::OutputBuffer;
