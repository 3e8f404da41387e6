//! Whole-collection persistence over a string-keyed device store.
//!
//! Each collection is serialized as a single JSON array under one storage
//! key, so every mutation runs a full read-mutate-rewrite cycle. That is
//! deliberate: collection sizes stay in the tens, and the simple layout
//! keeps the backend swappable between memory and disk.

mod backend;
mod dates;
mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend, StorageError};
pub use dates::{parse_timestamp, rehydrate_date_fields};
pub use store::{Record, RecordStore};
