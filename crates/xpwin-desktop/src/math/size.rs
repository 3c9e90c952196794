//! 2D size type

use serde::{Deserialize, Serialize};

/// Width and height pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
