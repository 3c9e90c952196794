//! Resize geometry
//!
//! Each edge applies its pointer delta independently and corners compose
//! both axes. Moving edges are anchored against their opposite edge: a
//! west resize shifts `left` by exactly the width change so the right edge
//! holds its absolute position, and the north edge does the same for the
//! bottom edge. The minimum clamps use the viewport-responsive floors
//! supplied by the caller, never fixed constants.

use crate::math::{Rect, Size, Vec2};
use super::session::ResizeDirection;

/// Compute the resized rectangle for a pointer delta
pub fn apply_resize(direction: ResizeDirection, origin: Rect, delta: Vec2, min: Size) -> Rect {
    let mut rect = origin;

    if direction.has_east() {
        rect.width = (origin.width + delta.x).max(min.width);
    } else if direction.has_west() {
        let width = (origin.width - delta.x).max(min.width);
        rect.left = origin.left + (origin.width - width);
        rect.width = width;
    }

    if direction.has_south() {
        rect.height = (origin.height + delta.y).max(min.height);
    } else if direction.has_north() {
        let height = (origin.height - delta.y).max(min.height);
        rect.top = origin.top + (origin.height - height);
        rect.height = height;
    }

    rect
}
