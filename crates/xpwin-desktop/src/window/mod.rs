//! Overlay window state machine
//!
//! One draggable, resizable window surface with normal, maximized and
//! minimized display modes, z-order promotion, and state persistence.

mod controller;
mod mode;

pub use controller::WindowController;
pub use mode::Mode;
