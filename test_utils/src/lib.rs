//! Utility helpers for tests.
use approx::relative_eq;
use collision::{Entity, SpriteBounds};
use glam::Vec2;

/// Tolerance used when comparing world-space coordinates.
pub const EPSILON: f32 = 1e-5;

/// Assert that `actual` and `expected` agree component-wise within [`EPSILON`].
///
/// # Panics
/// Panics with both vectors in the message if any component differs.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// test_utils::assert_vec2_near(Vec2::new(1.0, 2.0), Vec2::new(1.0, 2.0 + 1e-7));
/// ```
pub fn assert_vec2_near(actual: Vec2, expected: Vec2) {
    assert!(
        relative_eq!(actual.x, expected.x, epsilon = EPSILON)
            && relative_eq!(actual.y, expected.y, epsilon = EPSILON),
        "expected {expected}, got {actual}"
    );
}

/// Assert that writing `center` and reading it back is lossless.
///
/// # Panics
/// Panics if the read-back center differs from `center`.
pub fn assert_center_round_trip<K: SpriteBounds>(entity: &mut Entity<K>, center: Vec2) {
    entity.set_center(center);
    assert_vec2_near(entity.center(), center);
}
