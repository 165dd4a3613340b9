use std::collections::BTreeMap;

use crate::errors::{ContentError, Result};
use crate::storage::{Entity, EntityStore};

/// Entity store keeping everything in memory.
pub struct MemoryStore<T>
where
    T: Entity,
{
    label: String,
    entries: BTreeMap<T::Id, T>,
}

impl<T> MemoryStore<T>
where
    T: Entity,
{
    /// Creates an empty store with a diagnostic label.
    pub fn new(label: String) -> Self {
        Self {
            label,
            entries: BTreeMap::new(),
        }
    }
}

impl<T> EntityStore<T> for MemoryStore<T>
where
    T: Entity,
{
    fn create(&mut self, entity: T) -> Result<T> {
        let id = entity.id();
        if self.entries.contains_key(&id) {
            return Err(ContentError::Collision(format!(
                "{} already holds entity {}",
                self.label, id
            )));
        }
        self.entries.insert(id, entity.clone());
        Ok(entity)
    }

    fn update(&mut self, entity: T) -> Result<T> {
        let id = entity.id();
        match self.entries.get_mut(&id) {
            Some(stored) => {
                *stored = entity.clone();
                Ok(entity)
            }
            None => Err(ContentError::Storage(
                self.label.clone(),
                format!("Entity {} not found", id),
            )),
        }
    }

    fn delete(&mut self, id: &T::Id) -> bool {
        let removed = self.entries.remove(id).is_some();
        if !removed {
            log::debug!("{}: nothing stored under {}", self.label, id);
        }
        removed
    }
}

impl<T> AsRef<BTreeMap<T::Id, T>> for MemoryStore<T>
where
    T: Entity,
{
    fn as_ref(&self) -> &BTreeMap<T::Id, T> {
        &self.entries
    }
}
