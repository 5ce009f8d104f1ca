//! In-memory registry owning every entity in the demo.
//!
//! Entities are addressed by [`EntityId`]. Identifiers start at one and are
//! never reused, so a stale id always reports [`WorldError::UnknownEntity`].
use std::fmt;

use glam::Vec2;
use hashbrown::HashMap;
use log::debug;
use thiserror::Error;

use crate::entity::{Entity, EntityKind};

/// Entity identifier with type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    /// Raw identifier value.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Failures reported by [`World`] lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorldError {
    /// No live entity carries this id.
    #[error("no entity with id {0}")]
    UnknownEntity(EntityId),
}

/// Registry of entities keyed by [`EntityId`].
#[derive(Debug, Clone)]
pub struct World {
    entities: HashMap<EntityId, Entity>,
    /// Live ids in spawn order, which is ascending since ids are monotonic.
    order: Vec<EntityId>,
    next_id: u64,
}

impl Default for World {
    fn default() -> Self {
        Self {
            entities: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `entity` and returns its new id.
    ///
    /// # Examples
    /// ```
    /// use collision::{Dummy, Entity, World};
    /// use glam::Vec2;
    /// let mut world = World::new();
    /// let id = world.spawn(Entity::new(Vec2::ZERO, Dummy));
    /// assert_eq!(id.into_inner(), 1);
    /// assert_eq!(world.len(), 1);
    /// ```
    pub fn spawn<K: Into<EntityKind>>(&mut self, entity: Entity<K>) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let stored = entity.map_kind(Into::into);
        debug!("spawned entity {id} at {}", stored.position());
        self.entities.insert(id, stored);
        self.order.push(id);
        id
    }

    /// Removes and returns the entity with `id`.
    ///
    /// # Errors
    /// Returns [`WorldError::UnknownEntity`] if no live entity has `id`.
    pub fn despawn(&mut self, id: EntityId) -> Result<Entity, WorldError> {
        let entity = self
            .entities
            .remove(&id)
            .ok_or(WorldError::UnknownEntity(id))?;
        if let Ok(slot) = self.order.binary_search(&id) {
            self.order.remove(slot);
        }
        debug!("despawned entity {id}");
        Ok(entity)
    }

    /// Borrows the entity with `id`, if it is alive.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Mutably borrows the entity with `id`, if it is alive.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Center of the entity with `id`.
    ///
    /// # Errors
    /// Returns [`WorldError::UnknownEntity`] if no live entity has `id`.
    pub fn center(&self, id: EntityId) -> Result<Vec2, WorldError> {
        self.get(id)
            .map(Entity::center)
            .ok_or(WorldError::UnknownEntity(id))
    }

    /// Moves the entity with `id` so its center lands on `value`.
    ///
    /// # Errors
    /// Returns [`WorldError::UnknownEntity`] if no live entity has `id`.
    pub fn set_center(&mut self, id: EntityId, value: Vec2) -> Result<(), WorldError> {
        let entity = self.get_mut(id).ok_or(WorldError::UnknownEntity(id))?;
        entity.set_center(value);
        Ok(())
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` when no entity is alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Live entities in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.order
            .iter()
            .filter_map(|&id| self.entities.get(&id).map(|entity| (id, entity)))
    }
}
