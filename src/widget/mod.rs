//! Widgets: the code card and its status line.
//!
//! Widgets are fed [`Frame`](crate::engine::Frame)s by the main loop and
//! draw into a [`Buffer`](crate::buffer::Buffer):
//!
//! ```rust,ignore
//! use typewriter::widget::{CodeCard, StatusBar, Widget};
//!
//! let mut card = CodeCard::new(layout.frame, script.len());
//! let mut status = StatusBar::new(layout.status);
//! card.set_frame(frame.clone());
//! status.set_frame(&frame);
//! card.render(stage.buffer_mut());
//! status.render(stage.buffer_mut());
//! ```

mod caret;
mod code_card;
mod status_bar;
mod traits;

pub use caret::Caret;
pub use code_card::{CodeCard, CodeCardConfig, Palette};
pub use status_bar::{EditorMode, StatusBar, StatusBarConfig};
pub use traits::Widget;
