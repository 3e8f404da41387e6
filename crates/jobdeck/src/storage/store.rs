use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::backend::{StorageBackend, StorageError};
use super::dates::rehydrate_date_fields;

/// Contract for records persisted in a [`RecordStore`] collection.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync {
    fn id(&self) -> &str;
    fn assign_id(&mut self, id: String);

    /// Field paths rehydrated on every read; one level of dotted nesting.
    fn date_fields() -> &'static [&'static str] {
        &[]
    }
}

/// Generic CRUD over one homogeneous collection, persisted as a single JSON
/// array under the store's key.
///
/// Mutations run read-mutate-rewrite under a per-store mutex, which keeps
/// concurrent writers serializable. Reads never fail: an absent key or an
/// unreadable payload degrades to an empty collection.
pub struct RecordStore<T> {
    key: String,
    backend: Arc<dyn StorageBackend>,
    write_guard: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> RecordStore<T> {
    pub fn new(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            backend,
            write_guard: Mutex::new(()),
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get_all(&self) -> Vec<T> {
        let payload = match self.backend.read(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(error) => {
                warn!(key = %self.key, %error, "storage read failed, treating collection as empty");
                return Vec::new();
            }
        };

        match Self::decode(&payload) {
            Ok(records) => records,
            Err(error) => {
                warn!(key = %self.key, %error, "unreadable collection payload, treating collection as empty");
                Vec::new()
            }
        }
    }

    fn decode(payload: &str) -> Result<Vec<T>, serde_json::Error> {
        let mut raw: Vec<Value> = serde_json::from_str(payload)?;
        for value in &mut raw {
            rehydrate_date_fields(value, T::date_fields());
        }
        raw.into_iter().map(serde_json::from_value).collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<T> {
        self.get_all().into_iter().find(|record| record.id() == id)
    }

    /// Append a record, assigning a generated id when the record carries
    /// none, and return the stored copy.
    pub fn create(&self, mut record: T) -> Result<T, StorageError> {
        let _guard = self.lock_writes()?;
        let mut records = self.get_all();
        if record.id().is_empty() {
            record.assign_id(generate_record_id());
        }
        records.push(record.clone());
        self.save_all(&records)?;
        Ok(record)
    }

    /// Apply a mutation to the matching record and persist the collection.
    /// `Ok(None)` when the id is absent.
    pub fn update(&self, id: &str, apply: impl FnOnce(&mut T)) -> Result<Option<T>, StorageError> {
        let _guard = self.lock_writes()?;
        let mut records = self.get_all();
        let Some(target) = records.iter_mut().find(|record| record.id() == id) else {
            return Ok(None);
        };
        apply(target);
        let updated = target.clone();
        self.save_all(&records)?;
        Ok(Some(updated))
    }

    /// Remove the matching record, reporting whether one was removed.
    /// Storage failures surface as `false`, not as errors.
    pub fn delete(&self, id: &str) -> bool {
        let guard = self.lock_writes();
        let _guard = match guard {
            Ok(guard) => guard,
            Err(error) => {
                warn!(key = %self.key, %error, "delete could not acquire the store");
                return false;
            }
        };

        let mut records = self.get_all();
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return false;
        }

        match self.save_all(&records) {
            Ok(()) => true,
            Err(error) => {
                warn!(key = %self.key, %error, "delete failed to persist");
                false
            }
        }
    }

    pub fn find_by(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.get_all()
            .into_iter()
            .filter(|record| predicate(record))
            .collect()
    }

    pub fn find_one_by(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.get_all().into_iter().find(|record| predicate(record))
    }

    pub fn count(&self) -> usize {
        self.get_all().len()
    }

    /// Drop the storage key entirely.
    pub fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.lock_writes()?;
        self.backend.remove(&self.key).map(|_| ())
    }

    /// Seed the collection verbatim when empty; no-op otherwise.
    pub fn initialize_with_defaults(&self, defaults: &[T]) -> Result<(), StorageError> {
        let _guard = self.lock_writes()?;
        if !self.get_all().is_empty() {
            return Ok(());
        }
        self.save_all(defaults)
    }

    pub fn save_all(&self, records: &[T]) -> Result<(), StorageError> {
        let payload = serde_json::to_string(records).map_err(|source| StorageError::Encode {
            key: self.key.clone(),
            source,
        })?;
        self.backend.write(&self.key, &payload)
    }

    fn lock_writes(&self) -> Result<MutexGuard<'_, ()>, StorageError> {
        self.write_guard
            .lock()
            .map_err(|_| StorageError::Unavailable(format!("write lock poisoned for {}", self.key)))
    }
}

// Timestamp millis plus a short random suffix: not globally unique, but
// collision-improbable at this scale.
fn generate_record_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|byte| char::from(byte).to_ascii_lowercase())
        .collect();
    format!("{}{suffix}", Utc::now().timestamp_millis())
}
