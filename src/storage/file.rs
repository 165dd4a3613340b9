use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::{ContentError, Result};
use crate::storage::{Entity, EntityStore};

const STORAGE_VERSION: i32 = 1;

/// Entity store persisting its entries to a single JSON file.
///
/// All CRUD operations work on the in-memory entries. [`load`] and
/// [`flush`] move whole snapshots between memory and disk explicitly.
///
/// [`load`]: FileStore::load
/// [`flush`]: FileStore::flush
pub struct FileStore<T>
where
    T: Entity,
{
    label: String,
    path: PathBuf,
    data: FileStoreData<T::Id, T>,
}

/// What is serialized to and from the backing file.
#[derive(Serialize, Deserialize)]
struct FileStoreData<I, T>
where
    I: Ord,
{
    version: i32,
    entries: BTreeMap<I, T>,
}

impl<T> FileStore<T>
where
    T: Entity + Serialize + DeserializeOwned,
    T::Id: Serialize + DeserializeOwned,
{
    /// Creates an empty store with a diagnostic label and file path.
    pub fn new(label: String, path: &Path) -> Self {
        Self {
            label,
            path: PathBuf::from(path),
            data: FileStoreData {
                version: STORAGE_VERSION,
                entries: BTreeMap::new(),
            },
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the in-memory entries with the contents of the backing file.
    pub fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            return Err(ContentError::Storage(
                self.label.clone(),
                "File does not exist".to_owned(),
            ));
        }

        let file = File::open(&self.path)?;
        let data: FileStoreData<T::Id, T> = serde_json::from_reader(file)
            .map_err(|err| {
                ContentError::Storage(self.label.clone(), err.to_string())
            })?;
        if data.version != STORAGE_VERSION {
            return Err(ContentError::Storage(
                self.label.clone(),
                format!(
                    "Storage version mismatch: expected {}, got {}",
                    STORAGE_VERSION, data.version
                ),
            ));
        }
        self.data = data;

        Ok(())
    }

    /// Persists the in-memory entries to the backing file.
    pub fn flush(&self) -> Result<()> {
        let parent_dir = self.path.parent().ok_or_else(|| {
            ContentError::Storage(
                self.label.clone(),
                "Failed to get parent directory".to_owned(),
            )
        })?;
        fs::create_dir_all(parent_dir)?;
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let encoded = serde_json::to_string(&self.data)?;
        writer.write_all(encoded.as_bytes())?;

        log::info!(
            "{} {} entries have been written",
            self.label,
            self.data.entries.len()
        );
        Ok(())
    }

    /// Removes the backing file from disk.
    pub fn erase(&self) -> Result<()> {
        fs::remove_file(&self.path).map_err(|err| {
            ContentError::Storage(self.label.clone(), err.to_string())
        })
    }
}

impl<T> EntityStore<T> for FileStore<T>
where
    T: Entity + Serialize + DeserializeOwned,
    T::Id: Serialize + DeserializeOwned,
{
    fn create(&mut self, entity: T) -> Result<T> {
        let id = entity.id();
        if self.data.entries.contains_key(&id) {
            return Err(ContentError::Collision(format!(
                "{} already holds entity {}",
                self.label, id
            )));
        }
        self.data.entries.insert(id, entity.clone());
        Ok(entity)
    }

    fn update(&mut self, entity: T) -> Result<T> {
        let id = entity.id();
        match self.data.entries.get_mut(&id) {
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
        self.data.entries.remove(id).is_some()
    }
}

impl<T> AsRef<BTreeMap<T::Id, T>> for FileStore<T>
where
    T: Entity,
{
    fn as_ref(&self) -> &BTreeMap<T::Id, T> {
        &self.data.entries
    }
}
