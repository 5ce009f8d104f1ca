//! JSON scene files describing the entities to spawn.
//!
//! ```json
//! { "entities": [
//!     { "position": [10.0, 20.0] },
//!     { "position": [5.0, 10.0], "sprite": { "x": 0, "y": 0, "width": 20, "height": 10 } }
//! ] }
//! ```
//!
//! An entry without `sprite` becomes [`EntityKind::Dummy`]; an entry with one
//! becomes [`EntityKind::Sprite`].
use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::{
    DEMO_DUMMY_POSITION, DEMO_SPRITE_HEIGHT, DEMO_SPRITE_POSITION, DEMO_SPRITE_WIDTH,
};
use crate::entity::{Entity, EntityKind};
use crate::rect::Rect;
use crate::world::World;

/// Errors raised while reading or validating a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("failed to read scene {path}: {source}")]
    Read {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The document is not a valid scene.
    #[error("invalid scene document: {0}")]
    Parse(#[from] serde_json::Error),
    /// An entity position contains NaN or an infinity.
    #[error("entity {index} has a non-finite position")]
    NonFinitePosition {
        /// Zero-based index of the offending entry.
        index: usize,
    },
}

/// One entity entry in a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntitySpec {
    /// Anchor position as `[x, y]`.
    pub position: [f32; 2],
    /// Sprite bounds, if the entity has a real sprite.
    #[serde(default)]
    pub sprite: Option<Rect>,
}

impl EntitySpec {
    /// Builds the entity this entry describes.
    #[must_use]
    pub fn to_entity(self) -> Entity {
        let kind = self.sprite.map_or(EntityKind::Dummy, EntityKind::Sprite);
        Entity::new(Vec2::from_array(self.position), kind)
    }
}

/// Parsed and validated scene.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// Entities in spawn order.
    pub entities: Vec<EntitySpec>,
}

impl Scene {
    /// Parses a scene from JSON text.
    ///
    /// # Errors
    /// Returns [`SceneError::Parse`] for malformed documents and
    /// [`SceneError::NonFinitePosition`] for NaN or infinite coordinates.
    ///
    /// # Examples
    /// ```
    /// use collision::Scene;
    /// let scene = Scene::from_json_str(r#"{"entities":[{"position":[1.0,2.0]}]}"#).unwrap();
    /// assert_eq!(scene.entities.len(), 1);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, SceneError> {
        let scene: Self = serde_json::from_str(text)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Reads and parses the scene stored at `path`.
    ///
    /// # Errors
    /// Returns [`SceneError::Read`] if the file cannot be read, otherwise the
    /// errors of [`Scene::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path_ref = path.as_ref();
        let text = fs::read_to_string(path_ref).map_err(|source| SceneError::Read {
            path: path_ref.to_path_buf(),
            source,
        })?;
        let scene = Self::from_json_str(&text)?;
        info!(
            "loaded {} entities from {}",
            scene.entities.len(),
            path_ref.display()
        );
        Ok(scene)
    }

    /// Built-in scene: one stub entity and one sized sprite.
    ///
    /// # Examples
    /// ```
    /// use collision::Scene;
    /// let world = Scene::demo().into_world();
    /// assert_eq!(world.len(), 2);
    /// ```
    #[must_use]
    pub fn demo() -> Self {
        Self {
            entities: vec![
                EntitySpec {
                    position: DEMO_DUMMY_POSITION,
                    sprite: None,
                },
                EntitySpec {
                    position: DEMO_SPRITE_POSITION,
                    sprite: Some(Rect::from_size(DEMO_SPRITE_WIDTH, DEMO_SPRITE_HEIGHT)),
                },
            ],
        }
    }

    /// Spawns every entry into a fresh [`World`], in order.
    #[must_use]
    pub fn into_world(self) -> World {
        let mut world = World::new();
        for entry in &self.entities {
            world.spawn(entry.to_entity());
        }
        world
    }

    fn validate(&self) -> Result<(), SceneError> {
        self.entities
            .iter()
            .position(|entry| !Vec2::from_array(entry.position).is_finite())
            .map_or(Ok(()), |index| Err(SceneError::NonFinitePosition { index }))
    }
}
