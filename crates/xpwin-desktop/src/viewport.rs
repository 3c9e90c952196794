//! Viewport-responsive size constraints
//!
//! The minimum window dimensions scale with the viewport between fixed
//! floors and caps. They are computed from the viewport on every call so a
//! resize or orientation change between calls is always picked up.

use crate::math::{Rect, Size, FRAME_STYLE};

/// Current viewport dimensions in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Minimum window width for this viewport
    #[inline]
    pub fn min_width(&self) -> f64 {
        (0.90 * self.width).clamp(280.0, 640.0)
    }

    /// Minimum window height for this viewport
    #[inline]
    pub fn min_height(&self) -> f64 {
        (0.55 * self.height).clamp(220.0, 520.0)
    }

    /// Minimum size pair for this viewport
    #[inline]
    pub fn min_size(&self) -> Size {
        Size::new(self.min_width(), self.min_height())
    }

    /// Floor a candidate rectangle at the current minimums
    ///
    /// Left/top pass through verbatim; width/height are widened to the
    /// responsive minimums. A rectangle persisted under a larger viewport
    /// is therefore silently widened on restore instead of coming back
    /// unusably small.
    pub fn floor_rect(&self, r: Rect) -> Rect {
        Rect::new(
            r.left,
            r.top,
            r.width.max(self.min_width()),
            r.height.max(self.min_height()),
        )
    }

    /// Default placement when no usable rectangle was persisted
    pub fn initial_rect(&self) -> Rect {
        let width = (0.8 * self.width).clamp(self.min_width(), 1000.0);
        let height = (0.6 * self.height).clamp(self.min_height(), 640.0);
        Rect::new((self.width - width) / 2.0, 64.0, width, height)
    }

    /// Rectangle filling the whole viewport
    #[inline]
    pub fn maximized_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Fixed dock rectangle anchored to the viewport's bottom-left
    pub fn dock_rect(&self) -> Rect {
        let height = FRAME_STYLE.dock_height();
        Rect::new(
            FRAME_STYLE.dock_margin,
            self.height - height - FRAME_STYLE.dock_margin,
            FRAME_STYLE.dock_width,
            height,
        )
    }
}
