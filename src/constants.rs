//! Demo scene constants used when no scene file is supplied.
//!
//! The built-in scene holds one stub entity and one sized sprite so both
//! branches of the center calculation show up in the log output.

/// Anchor of the stub entity.
pub const DEMO_DUMMY_POSITION: [f32; 2] = [10.0, 20.0];
/// Anchor of the sized sprite.
pub const DEMO_SPRITE_POSITION: [f32; 2] = [5.0, 10.0];
/// Width of the sized sprite in pixels.
pub const DEMO_SPRITE_WIDTH: i32 = 20;
/// Height of the sized sprite in pixels.
pub const DEMO_SPRITE_HEIGHT: i32 = 10;
