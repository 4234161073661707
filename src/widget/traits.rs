//! Widget trait shared by the card's components.

use crate::buffer::Buffer;
use crate::layout::Rect;

/// A UI component that can be rendered to a buffer.
///
/// Widgets are fed state from the outside (a [`Frame`](crate::engine::Frame),
/// a blink phase) and only draw; they never read the clock themselves.
pub trait Widget {
    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this widget.
    ///
    /// Called when the layout changes (e.g., terminal resize).
    fn set_bounds(&mut self, bounds: Rect);

    /// Render this widget to the given buffer.
    ///
    /// The widget should only write to cells within its bounds.
    fn render(&self, buffer: &mut Buffer);

    /// Check if this widget needs to be redrawn.
    fn needs_redraw(&self) -> bool;

    /// Clear the redraw flag after rendering.
    fn clear_redraw(&mut self);
}
