//! Layout module: rectangles and the pre-computed code card regions.
//!
//! Layouts are computed once at initialization or on terminal resize.
//! Widgets receive plain [`Rect`]s and never measure anything at render time.

mod card;
mod rect;

pub use card::{gutter_width, CardLayout, MIN_CARD_HEIGHT, MIN_CARD_WIDTH};
pub use rect::Rect;
