//! Entity geometry for a 2D collision demo.
//!
//! Entities pair a positional [`GameObject`] with a kind that reports sprite
//! bounds through [`SpriteBounds`]. The derived center point is read and
//! written through [`Entity::center`] and [`Entity::set_center`].
pub mod constants;
pub mod entity;
pub mod game_object;
pub mod logging;
pub mod numeric;
pub mod rect;
pub mod scene;
pub mod sprite;
pub mod world;
pub use constants::*;

// Re-export commonly used items
pub use entity::{Dummy, Entity, EntityKind, Sprite};
pub use game_object::GameObject;
pub use logging::init as init_logging;
pub use rect::Rect;
pub use scene::{EntitySpec, Scene, SceneError};
pub use sprite::{SpriteBounds, SpriteRect};
pub use world::{EntityId, World, WorldError};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust
    //! use collision::prelude::*;
    //! let entity = Entity::new(Vec2::new(10.0, 20.0), Dummy);
    //! assert_eq!(entity.center(), entity.position());
    //! ```

    pub use crate::{Dummy, Entity, EntityKind, Rect, Sprite, SpriteBounds, SpriteRect, World};
    pub use glam::Vec2;
}
