mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::content::Content;
use crate::errors::Result;
use crate::id::{ContentId, UserId};
use crate::user::User;

/// A value that can live in an [`EntityStore`].
pub trait Entity: Clone {
    type Id: Ord + Clone + Display;

    /// Identifier the store files this entity under.
    fn id(&self) -> Self::Id;
}

impl Entity for Content {
    type Id = ContentId;

    fn id(&self) -> ContentId {
        Content::id(self)
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        User::id(self)
    }
}

/// Keyed storage of entities with create, read, update and delete.
///
/// Stores answer queries from whatever they currently hold and callers
/// trust the answers as they are. Identifier collisions on create and
/// updates of absent entities are the error cases, lookups of absent
/// identifiers are not.
pub trait EntityStore<T: Entity>: AsRef<BTreeMap<T::Id, T>> {
    /// Stores a new entity, handing it back once stored.
    ///
    /// Fails with a collision error when the identifier is taken.
    fn create(&mut self, entity: T) -> Result<T>;

    /// Returns a copy of the entity stored under `id`.
    fn read(&self, id: &T::Id) -> Option<T> {
        self.as_ref().get(id).cloned()
    }

    /// Replaces the entity stored under the same identifier.
    ///
    /// Fails when no entity is stored under it.
    fn update(&mut self, entity: T) -> Result<T>;

    /// Removes the entity stored under `id`.
    ///
    /// Returns `false` when the identifier was absent.
    fn delete(&mut self, id: &T::Id) -> bool;

    /// Amount of stored entities.
    fn len(&self) -> usize {
        self.as_ref().len()
    }

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }
}
