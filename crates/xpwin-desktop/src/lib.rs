//! Overlay window for the XP Pool dashboard
//!
//! This crate provides the draggable, resizable application-window
//! overlay shown on top of the pool's web pages:
//!
//! - Window geometry with viewport-responsive minimum sizes
//! - Pointer-driven drag and resize (eight handles, edge-anchored)
//! - Normal / maximized / minimized display modes
//! - Z-order promotion on interaction
//! - Session-scoped persistence of the window layout
//! - Gesture suppression while a manipulation is in progress
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`)
//! - [`viewport`]: Responsive size floors and derived rectangles
//! - [`window`]: The window controller state machine
//! - [`input`]: Interaction sessions, resize math, gesture suppression
//! - [`persistence`]: Store abstraction and the saved-state codec
//!
//! ## Example
//!
//! ```rust
//! use xpwin_desktop::{MemoryStore, Vec2, Viewport, WindowController};
//!
//! let store = Box::new(MemoryStore::new());
//! let mut controller = WindowController::new(store, Viewport::new(1280.0, 720.0));
//!
//! controller.press_title_bar(Vec2::new(400.0, 20.0), 1, true);
//! controller.pointer_move(Vec2::new(430.0, 50.0), 1);
//! controller.pointer_up(1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: the state machine is testable without a browser
//! 2. **Injectable Store**: persistence runs against session storage in
//!    the browser and an in-memory fake in tests
//! 3. **Discrete Events**: every transition is a function of
//!    (state, event), never of ambient DOM state

pub mod error;
pub mod input;
pub mod math;
pub mod persistence;
pub mod viewport;
pub mod window;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use error::{OverlayError, OverlayResult};
pub use input::{
    apply_resize, GestureSuppression, InputResult, InteractionSession, PointerId, ResizeDirection,
};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use persistence::{MemoryStore, PersistedState, StateStore};
pub use viewport::Viewport;
pub use window::{Mode, WindowController};
