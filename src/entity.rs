//! Entities: a [`GameObject`] composed with a kind that reports sprite bounds.
//!
//! The entity's center is derived from its anchor position and the sprite
//! rectangle of its kind. Reading and writing the center are inverses for a
//! fixed rectangle: exact when the rectangle is empty, otherwise up to `f32`
//! rounding of the half-extent offset.
use glam::Vec2;
use log::trace;

use crate::game_object::GameObject;
use crate::rect::Rect;
use crate::sprite::{SpriteBounds, SpriteRect};

/// Kind without bounds of its own; always reports the stub rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dummy;

impl SpriteBounds for Dummy {}

/// Kind backed by a sprite with known bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sprite {
    /// Sprite rectangle in local space.
    pub bounds: Rect,
}

impl Sprite {
    /// Creates a sprite kind with `bounds`.
    #[must_use]
    pub const fn new(bounds: Rect) -> Self {
        Self { bounds }
    }
}

impl SpriteBounds for Sprite {
    fn sprite_rect(&self) -> SpriteRect {
        SpriteRect::Bounds(self.bounds)
    }
}

/// Closed set of kinds stored by [`crate::World`] and built from scenes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntityKind {
    /// See [`Dummy`].
    #[default]
    Dummy,
    /// See [`Sprite`].
    Sprite(Rect),
}

impl SpriteBounds for EntityKind {
    fn sprite_rect(&self) -> SpriteRect {
        match self {
            Self::Dummy => Dummy.sprite_rect(),
            Self::Sprite(bounds) => Sprite::new(*bounds).sprite_rect(),
        }
    }
}

impl From<Dummy> for EntityKind {
    fn from(_: Dummy) -> Self {
        Self::Dummy
    }
}

impl From<Sprite> for EntityKind {
    fn from(sprite: Sprite) -> Self {
        Self::Sprite(sprite.bounds)
    }
}

/// A game object with a kind-specific sprite rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Entity<K = EntityKind> {
    object: GameObject,
    kind: K,
}

impl<K> Entity<K> {
    /// Creates an entity anchored at `position`.
    #[must_use]
    pub const fn new(position: Vec2, kind: K) -> Self {
        Self {
            object: GameObject::new(position),
            kind,
        }
    }

    /// Anchor position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.object.position()
    }

    /// Moves the anchor to `position`.
    pub const fn set_position(&mut self, position: Vec2) {
        self.object.set_position(position);
    }

    /// Underlying positional state.
    #[must_use]
    pub const fn object(&self) -> &GameObject {
        &self.object
    }

    /// Mutable access to the positional state.
    pub const fn object_mut(&mut self) -> &mut GameObject {
        &mut self.object
    }

    /// The entity's kind.
    #[must_use]
    pub const fn kind(&self) -> &K {
        &self.kind
    }

    /// Converts the kind, keeping the position.
    #[must_use]
    pub fn map_kind<T>(self, f: impl FnOnce(K) -> T) -> Entity<T> {
        Entity {
            object: self.object,
            kind: f(self.kind),
        }
    }
}

impl<K: SpriteBounds> Entity<K> {
    /// Creates an entity whose center lands on `center`.
    ///
    /// # Examples
    /// ```
    /// use collision::{Entity, Rect, Sprite};
    /// use glam::Vec2;
    /// let entity = Entity::with_center(Vec2::new(15.0, 15.0), Sprite::new(Rect::from_size(20, 10)));
    /// assert_eq!(entity.position(), Vec2::new(5.0, 10.0));
    /// ```
    #[must_use]
    pub fn with_center(center: Vec2, kind: K) -> Self {
        let mut entity = Self::new(center, kind);
        entity.set_center(center);
        entity
    }

    /// Sprite rectangle reported by the kind.
    #[must_use]
    pub fn sprite_rect(&self) -> SpriteRect {
        self.kind.sprite_rect()
    }

    /// Center of the sprite rectangle in world space.
    ///
    /// Equal to the anchor position when the sprite rectangle is empty,
    /// otherwise the anchor offset by the rectangle's half extents.
    ///
    /// # Examples
    /// ```
    /// use collision::{Dummy, Entity};
    /// use glam::Vec2;
    /// let entity = Entity::new(Vec2::new(10.0, 20.0), Dummy);
    /// assert_eq!(entity.center(), Vec2::new(10.0, 20.0));
    /// ```
    #[must_use]
    pub fn center(&self) -> Vec2 {
        let sprite = self.sprite_rect();
        if sprite.is_unspecialized() {
            trace!("center read with unspecialized sprite bounds");
        }
        if sprite.is_empty() {
            self.position()
        } else {
            self.position() + sprite.half_extents()
        }
    }

    /// Moves the anchor so that [`Entity::center`] returns `value`.
    ///
    /// The read-back is exact for empty bounds; with real bounds the offset
    /// is subtracted and re-added in `f32`, so tiny coordinates may round.
    pub fn set_center(&mut self, value: Vec2) {
        let sprite = self.sprite_rect();
        let position = if sprite.is_empty() {
            value
        } else {
            value - sprite.half_extents()
        };
        self.set_position(position);
    }
}
