//! Sprite bounds reported by entity kinds.
//!
//! Every entity kind answers "what is my sprite rectangle?" through
//! [`SpriteBounds`]. Kinds that have not been given real bounds fall back to
//! [`SpriteRect::Unspecialized`], which reads as [`Rect::EMPTY`] but stays
//! distinguishable from a sprite that is genuinely zero-sized.
use glam::Vec2;

use crate::rect::Rect;

/// Sprite rectangle as reported by an entity kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SpriteRect {
    /// The kind does not provide bounds yet.
    #[default]
    Unspecialized,
    /// Real bounds supplied by the kind, possibly zero-sized.
    Bounds(Rect),
}

impl SpriteRect {
    /// The rectangle used for geometry. The stub reads as [`Rect::EMPTY`].
    #[must_use]
    pub const fn rect(&self) -> Rect {
        match self {
            Self::Unspecialized => Rect::EMPTY,
            Self::Bounds(rect) => *rect,
        }
    }

    /// Returns `true` when the rectangle equals [`Rect::EMPTY`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rect().is_empty()
    }

    /// Returns `true` for the stub variant.
    #[must_use]
    pub const fn is_unspecialized(&self) -> bool {
        matches!(self, Self::Unspecialized)
    }

    /// Offset from the anchor to the center; zero when empty.
    #[must_use]
    pub const fn half_extents(&self) -> Vec2 {
        if self.is_empty() {
            Vec2::ZERO
        } else {
            self.rect().half_extents()
        }
    }
}

impl From<Rect> for SpriteRect {
    fn from(rect: Rect) -> Self {
        Self::Bounds(rect)
    }
}

/// Capability of reporting a sprite rectangle.
///
/// The default method returns [`SpriteRect::Unspecialized`]; kinds with a
/// real sprite override it.
///
/// # Examples
/// ```
/// use collision::{Rect, SpriteBounds, SpriteRect};
///
/// struct Crate;
/// impl SpriteBounds for Crate {
///     fn sprite_rect(&self) -> SpriteRect {
///         SpriteRect::Bounds(Rect::from_size(32, 32))
///     }
/// }
///
/// struct Placeholder;
/// impl SpriteBounds for Placeholder {}
///
/// assert!(!Crate.sprite_rect().is_empty());
/// assert!(Placeholder.sprite_rect().is_unspecialized());
/// ```
pub trait SpriteBounds {
    /// Sprite rectangle in local space.
    fn sprite_rect(&self) -> SpriteRect {
        SpriteRect::Unspecialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_and_zero_sized_differ() {
        let stub = SpriteRect::Unspecialized;
        let zero = SpriteRect::Bounds(Rect::EMPTY);
        assert_ne!(stub, zero);
        assert_eq!(stub.rect(), zero.rect());
        assert!(stub.is_empty() && zero.is_empty());
        assert!(stub.is_unspecialized());
        assert!(!zero.is_unspecialized());
    }

    #[test]
    fn half_extents_zero_when_empty() {
        assert_eq!(SpriteRect::Unspecialized.half_extents(), Vec2::ZERO);
        assert_eq!(SpriteRect::Bounds(Rect::EMPTY).half_extents(), Vec2::ZERO);
    }

    #[test]
    fn half_extents_from_bounds() {
        let sprite = SpriteRect::from(Rect::from_size(20, 10));
        assert_eq!(sprite.half_extents(), Vec2::new(10.0, 5.0));
    }
}
