//! Window display mode

use serde::{Deserialize, Serialize};

/// Display mode of the overlay window
///
/// Maximized and minimized are mutually exclusive by construction; the
/// two persisted booleans are derived from this enum at the store
/// boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Normal,
    Maximized,
    Minimized,
}

impl Mode {
    /// Reconstruct a mode from the persisted flag pair
    ///
    /// A store that somehow carries both flags resolves to maximized.
    pub fn from_flags(is_maximized: bool, is_minimized: bool) -> Self {
        if is_maximized {
            Mode::Maximized
        } else if is_minimized {
            Mode::Minimized
        } else {
            Mode::Normal
        }
    }

    /// The persisted flag pair `(is_maximized, is_minimized)`
    pub fn flags(&self) -> (bool, bool) {
        match self {
            Mode::Normal => (false, false),
            Mode::Maximized => (true, false),
            Mode::Minimized => (false, true),
        }
    }

    /// Check if in normal mode
    #[inline]
    pub fn is_normal(&self) -> bool {
        matches!(self, Mode::Normal)
    }

    /// Check if maximized
    #[inline]
    pub fn is_maximized(&self) -> bool {
        matches!(self, Mode::Maximized)
    }

    /// Check if minimized
    #[inline]
    pub fn is_minimized(&self) -> bool {
        matches!(self, Mode::Minimized)
    }
}
