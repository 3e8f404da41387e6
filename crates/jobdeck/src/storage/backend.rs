use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// String key to string payload persistence seam.
///
/// The engine only ever reads and writes whole values, so a backend needs no
/// notion of records or queries. Memory backs the tests, files back the app.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError>;
    /// Remove the key, reporting whether it existed.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}

/// Error enumeration for backend and collection-encoding failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io failure for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("could not encode collection {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Process-local backend used by tests and throwaway registries.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory backend mutex poisoned".to_string()))
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        self.entries()?
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.entries()?.remove(key).is_some())
    }
}

/// On-disk backend storing one file per key under a root directory.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open the backend, creating the root directory when absent.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StorageError::Io {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    // `@auth:current_user` becomes `auth_current_user.json`.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .trim_start_matches('@')
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), payload).map_err(|source| StorageError::Io {
            key: key.to_string(),
            source,
        })
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn scratch_dir(tag: &str) -> PathBuf {
        static NONCE: AtomicU32 = AtomicU32::new(0);
        let nonce = NONCE.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "jobdeck-backend-{tag}-{}-{nonce}",
            std::process::id()
        ))
    }

    #[test]
    fn memory_backend_round_trips() {
        let backend = MemoryBackend::new();
        assert!(backend.read("@jobs").unwrap().is_none());

        backend.write("@jobs", "[]").unwrap();
        assert_eq!(backend.read("@jobs").unwrap().as_deref(), Some("[]"));

        assert!(backend.remove("@jobs").unwrap());
        assert!(!backend.remove("@jobs").unwrap());
    }

    #[test]
    fn file_backend_round_trips() {
        let root = scratch_dir("roundtrip");
        let backend = FileBackend::new(&root).expect("backend opens");

        assert!(backend.read("@auth:current_user").unwrap().is_none());
        backend.write("@auth:current_user", "{\"id\":\"1\"}").unwrap();
        assert_eq!(
            backend.read("@auth:current_user").unwrap().as_deref(),
            Some("{\"id\":\"1\"}")
        );
        assert!(root.join("auth_current_user.json").exists());

        assert!(backend.remove("@auth:current_user").unwrap());
        assert!(!backend.remove("@auth:current_user").unwrap());

        let _ = fs::remove_dir_all(root);
    }
}
