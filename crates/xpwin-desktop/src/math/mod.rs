//! Core geometry types for the overlay window
//!
//! These types provide basic 2D math for positioning and sizing in CSS
//! pixel space, which is why everything is `f64`.

mod vec2;
mod rect;
mod size;
mod style;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
