//! Pointer input handling for the overlay window
//!
//! Models the transient drag/resize interaction state and the gesture
//! suppression counter that keeps the host page from scrolling or
//! pinch-zooming underneath an active manipulation.

mod resize;
mod session;
mod suppress;

pub use resize::apply_resize;
pub use session::{InteractionSession, PointerId, ResizeDirection};
pub use suppress::GestureSuppression;

use serde::{Deserialize, Serialize};

/// Result of input handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Event was consumed by the controller
    Handled,
    /// Event was not consumed
    Unhandled,
}

impl InputResult {
    /// Check if the event was consumed
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }
}
