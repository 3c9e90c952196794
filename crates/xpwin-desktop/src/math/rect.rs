//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle in page coordinates
///
/// Field names match the JSON shape persisted under `xpwin:rect`, so this
/// type serializes directly into the stored format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Zero rectangle at origin
    pub const ZERO: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new rectangle
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Create from origin and size
    #[inline]
    pub fn from_origin_size(origin: Vec2, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get the origin (top-left corner)
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Get size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }

    /// Return the same rectangle at a new origin
    #[inline]
    pub fn at(&self, origin: Vec2) -> Rect {
        Rect::new(origin.x, origin.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(100.0, 200.0, 50.0, 30.0);
        assert!((r.right() - 150.0).abs() < 0.001);
        assert!((r.bottom() - 230.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 40.0)));
        assert!(!rect.contains(Vec2::new(5.0, 40.0)));
        assert!(!rect.contains(Vec2::new(50.0, 100.0)));
    }

    #[test]
    fn test_rect_serialized_field_names() {
        let r = Rect::new(100.0, 50.0, 500.0, 400.0);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"left\""));
        assert!(json.contains("\"top\""));

        let restored: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, r);
    }
}
