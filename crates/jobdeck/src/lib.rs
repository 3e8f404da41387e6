//! Local-first job board engine.
//!
//! Candidates browse and apply to postings, companies publish jobs and review
//! applicants, and every entity lives in a whole-collection record store kept
//! behind a string-keyed storage backend. There is no server: the services
//! simulate request latency over purely local reads and writes, which keeps
//! the engine usable offline and trivially resettable.

pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod error;
pub mod seed;
pub mod services;
pub mod storage;
pub mod telemetry;

pub use bootstrap::{CollectionCounts, DataCoordinator};
pub use error::AppError;
pub use services::ServiceRegistry;
