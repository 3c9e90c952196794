//! Interaction session state for drag and resize operations

use crate::error::{OverlayError, OverlayResult};
use crate::math::{Rect, Vec2};

/// Pointer identity as reported by the browser's pointer events
pub type PointerId = i32;

/// Which edge or corner a resize handle controls
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeDirection {
    /// All eight directions, for handle creation
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::N,
        ResizeDirection::S,
        ResizeDirection::E,
        ResizeDirection::W,
        ResizeDirection::NE,
        ResizeDirection::NW,
        ResizeDirection::SE,
        ResizeDirection::SW,
    ];

    /// Parse a `data-direction` token
    pub fn from_token(token: &str) -> OverlayResult<Self> {
        match token {
            "n" => Ok(Self::N),
            "s" => Ok(Self::S),
            "e" => Ok(Self::E),
            "w" => Ok(Self::W),
            "ne" => Ok(Self::NE),
            "nw" => Ok(Self::NW),
            "se" => Ok(Self::SE),
            "sw" => Ok(Self::SW),
            other => Err(OverlayError::UnknownDirection(other.to_string())),
        }
    }

    /// The `data-direction` token for this direction
    pub fn token(&self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }

    /// Check if the north edge moves
    #[inline]
    pub fn has_north(&self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    /// Check if the south edge moves
    #[inline]
    pub fn has_south(&self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }

    /// Check if the east edge moves
    #[inline]
    pub fn has_east(&self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    /// Check if the west edge moves
    #[inline]
    pub fn has_west(&self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }
}

/// Transient state of an in-progress pointer operation
///
/// At most one session exists at a time, and only move/up/cancel events
/// from the pointer that opened it are meaningful. Events from any other
/// pointer are ignored, which keeps multi-touch input from hijacking an
/// active manipulation.
#[derive(Clone, Copy, Debug)]
pub enum InteractionSession {
    /// Moving the window by its title bar
    Drag {
        /// Pointer position at press
        start: Vec2,
        /// Window origin at press
        origin: Vec2,
        /// Pointer that opened the session
        pointer: PointerId,
    },
    /// Resizing the window by one of the eight handles
    Resize {
        /// Pointer position at press
        start: Vec2,
        /// Window rectangle at press
        origin: Rect,
        /// Which edge/corner is being dragged
        direction: ResizeDirection,
        /// Pointer that opened the session
        pointer: PointerId,
    },
}

impl InteractionSession {
    /// The pointer that owns this session
    pub fn pointer(&self) -> PointerId {
        match self {
            Self::Drag { pointer, .. } => *pointer,
            Self::Resize { pointer, .. } => *pointer,
        }
    }

    /// Check if this is a drag operation
    #[inline]
    pub fn is_drag(&self) -> bool {
        matches!(self, Self::Drag { .. })
    }

    /// Check if this is a resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, Self::Resize { .. })
    }
}
