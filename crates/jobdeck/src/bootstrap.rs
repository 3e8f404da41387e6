//! First-launch seeding, full reset, and collection diagnostics.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::seed;
use crate::services::keys;
use crate::services::{ApplicationService, CandidateService, CompanyService, JobService};
use crate::storage::{StorageBackend, StorageError};

/// Record counts per collection, for diagnostics and demo output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionCounts {
    pub jobs: usize,
    pub applications: usize,
    pub candidates: usize,
    pub companies: usize,
}

/// Coordinates the four stores as one unit: seed them on first launch,
/// reset them to the default datasets, and report their sizes.
pub struct DataCoordinator {
    backend: Arc<dyn StorageBackend>,
    jobs: Arc<JobService>,
    applications: Arc<ApplicationService>,
    candidates: Arc<CandidateService>,
    companies: Arc<CompanyService>,
}

impl DataCoordinator {
    pub(crate) fn new(
        backend: Arc<dyn StorageBackend>,
        jobs: Arc<JobService>,
        applications: Arc<ApplicationService>,
        candidates: Arc<CandidateService>,
        companies: Arc<CompanyService>,
    ) -> Self {
        Self {
            backend,
            jobs,
            applications,
            candidates,
            companies,
        }
    }

    /// Seed every empty store with its default dataset. Idempotent; awaited
    /// once by the process bootstrap before any service is used.
    pub async fn initialize(&self) -> Result<(), StorageError> {
        self.jobs.store().initialize_with_defaults(&seed::jobs())?;
        self.applications
            .store()
            .initialize_with_defaults(&seed::applications())?;
        self.candidates
            .store()
            .initialize_with_defaults(&seed::candidates())?;
        self.companies
            .store()
            .initialize_with_defaults(&seed::companies())?;
        info!("data stores ready");
        Ok(())
    }

    /// Clear every store and the signed-in session, then re-seed. Leaves the
    /// backend exactly as a first launch would.
    pub async fn reset(&self) -> Result<(), StorageError> {
        self.jobs.store().clear()?;
        self.applications.store().clear()?;
        self.candidates.store().clear()?;
        self.companies.store().clear()?;
        self.backend.remove(keys::SESSION)?;
        info!("data stores cleared");
        self.initialize().await
    }

    pub async fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            jobs: self.jobs.store().count(),
            applications: self.applications.store().count(),
            candidates: self.candidates.store().count(),
            companies: self.companies.store().count(),
        }
    }
}
