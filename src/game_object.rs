//! Base state shared by every entity kind.
use glam::Vec2;

/// Positional state owned by every entity.
///
/// The position is the entity's top-left anchor in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameObject {
    position: Vec2,
}

impl GameObject {
    /// Creates an object anchored at `position`.
    #[must_use]
    pub const fn new(position: Vec2) -> Self {
        Self { position }
    }

    /// Current anchor position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Moves the anchor to `position`.
    pub const fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Offsets the anchor by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sits_at_origin() {
        assert_eq!(GameObject::default().position(), Vec2::ZERO);
    }

    #[test]
    fn translate_accumulates() {
        let mut object = GameObject::new(Vec2::new(1.0, 2.0));
        object.translate(Vec2::new(3.0, -4.0));
        object.translate(Vec2::new(1.0, 1.0));
        assert_eq!(object.position(), Vec2::new(5.0, -1.0));
    }
}
