//! Buffer module: the cell grid widgets draw into, and the diff that
//! turns it into terminal output.
//!
//! - [`Cell`]: one column, with glyph, colors and modifiers
//! - [`Buffer`]: a grid of cells plus clipped text writing
//! - [`diff`]: minimal ANSI generation between two buffers

#[allow(clippy::module_inception)]
mod buffer;
mod cell;
pub mod diff;

pub use buffer::{Buffer, Style};
pub use cell::{Cell, Modifiers, Rgb};
