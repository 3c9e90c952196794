//! Frame style constants

/// Frame style constants for the overlay window chrome
pub struct FrameStyle {
    pub title_bar_height: f64,
    pub resize_handle_size: f64,
    pub dock_width: f64,
    pub dock_extra_height: f64,
    pub dock_margin: f64,
}

impl FrameStyle {
    /// Height of the docked (minimized) window
    #[inline]
    pub const fn dock_height(&self) -> f64 {
        self.title_bar_height + self.dock_extra_height
    }
}

/// Default frame style matching the dashboard UI
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 28.0,
    resize_handle_size: 10.0,
    dock_width: 360.0,
    dock_extra_height: 6.0,
    dock_margin: 12.0,
};
