//! Integer rectangle used for sprite bounds.
//!
//! Sprite rectangles are pixel-aligned, so every field is an `i32`. A
//! rectangle is *empty* only when it equals [`Rect::EMPTY`]; a rectangle at
//! a non-zero location with no area is still a real, non-empty value.
use glam::Vec2;
use serde::Deserialize;

use crate::numeric::half_extent;

/// Axis-aligned rectangle in local sprite space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Rect {
    /// The rectangle with every field set to zero.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Creates a rectangle from its location and extents.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle anchored at the origin.
    ///
    /// # Examples
    /// ```
    /// use collision::Rect;
    /// let rect = Rect::from_size(20, 10);
    /// assert_eq!(rect, Rect::new(0, 0, 20, 10));
    /// ```
    #[must_use]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns `true` when this rectangle equals [`Rect::EMPTY`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x == 0 && self.y == 0 && self.width == 0 && self.height == 0
    }

    /// Half of the width and height, each halved with integer division.
    ///
    /// # Examples
    /// ```
    /// use collision::Rect;
    /// use glam::Vec2;
    /// assert_eq!(Rect::from_size(21, 11).half_extents(), Vec2::new(10.0, 5.0));
    /// ```
    #[must_use]
    pub const fn half_extents(&self) -> Vec2 {
        Vec2::new(half_extent(self.width), half_extent(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_all_zero() {
        assert_eq!(Rect::EMPTY, Rect::default());
        assert!(Rect::EMPTY.is_empty());
    }

    #[test]
    fn zero_area_elsewhere_is_not_empty() {
        assert!(!Rect::new(5, 5, 0, 0).is_empty());
        assert!(!Rect::from_size(1, 0).is_empty());
    }

    #[test]
    fn deserialises_from_named_fields() {
        let rect: Rect = serde_json::from_str(r#"{"x":1,"y":2,"width":3,"height":4}"#)
            .expect("valid rect json");
        assert_eq!(rect, Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn rejects_unknown_fields() {
        let parsed = serde_json::from_str::<Rect>(r#"{"x":1,"y":2,"width":3,"height":4,"z":0}"#);
        assert!(parsed.is_err());
    }
}
