use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::candidates::CandidateService;
use super::jobs::JobService;
use super::keys;
use super::latency::SimulatedLatency;
use crate::domain::{
    Application, ApplicationStatus, ApplyRequest, CandidateSnapshot,
};
use crate::storage::{RecordStore, StorageBackend, StorageError};

/// Intake and review of candidate applications.
pub struct ApplicationService {
    store: RecordStore<Application>,
    jobs: Arc<JobService>,
    candidates: Arc<CandidateService>,
    latency: SimulatedLatency,
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("candidate {candidate_id} has already applied to job {job_id}")]
    AlreadyApplied {
        candidate_id: String,
        job_id: String,
    },
    #[error("job {0} no longer exists")]
    JobNotFound(String),
    #[error("application status cannot move from {from} to {to}")]
    InvalidTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApplicationService {
    pub(crate) fn new(
        backend: Arc<dyn StorageBackend>,
        jobs: Arc<JobService>,
        candidates: Arc<CandidateService>,
        latency: SimulatedLatency,
    ) -> Self {
        Self {
            store: RecordStore::new(backend, keys::APPLICATIONS),
            jobs,
            candidates,
            latency,
        }
    }

    pub(crate) fn store(&self) -> &RecordStore<Application> {
        &self.store
    }

    pub async fn all(&self) -> Vec<Application> {
        self.latency.read_pause().await;
        self.store.get_all()
    }

    pub async fn by_id(&self, id: &str) -> Option<Application> {
        self.latency.read_pause().await;
        self.store.get_by_id(id)
    }

    pub async fn for_candidate(&self, candidate_id: &str) -> Vec<Application> {
        self.latency.read_pause().await;
        self.store
            .find_by(|application| application.candidate_id == candidate_id)
    }

    pub async fn for_job(&self, job_id: &str) -> Vec<Application> {
        self.latency.read_pause().await;
        self.store.find_by(|application| application.job_id == job_id)
    }

    pub async fn has_applied(&self, candidate_id: &str, job_id: &str) -> bool {
        self.latency.read_pause().await;
        self.store
            .find_one_by(|application| {
                application.candidate_id == candidate_id && application.job_id == job_id
            })
            .is_some()
    }

    /// Submit an application: one per (candidate, job) pair, against a job
    /// that still exists. The stored record embeds a snapshot of the job and,
    /// when the candidate record is on file, of the candidate profile.
    ///
    /// The posting's applications counter is bumped afterwards; if that bump
    /// fails the application still stands and the counter goes stale.
    pub async fn apply(&self, request: ApplyRequest) -> Result<Application, ApplicationError> {
        self.latency.write_pause().await;
        let ApplyRequest {
            job_id,
            candidate_id,
            cover_letter,
        } = request;

        let duplicate = self.store.find_one_by(|application| {
            application.job_id == job_id && application.candidate_id == candidate_id
        });
        if duplicate.is_some() {
            return Err(ApplicationError::AlreadyApplied {
                candidate_id,
                job_id,
            });
        }

        let job = self
            .jobs
            .store()
            .get_by_id(&job_id)
            .ok_or_else(|| ApplicationError::JobNotFound(job_id.clone()))?;
        let candidate = self
            .candidates
            .store()
            .get_by_id(&candidate_id)
            .map(|candidate| CandidateSnapshot::from(&candidate));

        let application = Application {
            id: String::new(),
            job_id: job_id.clone(),
            candidate_id,
            applied_at: Utc::now(),
            status: ApplicationStatus::Pending,
            job,
            candidate,
            cover_letter,
        };
        let stored = self.store.create(application)?;

        match self.jobs.increment_applications(&job_id).await {
            Ok(Some(_)) => {}
            Ok(None) => warn!(%job_id, "job disappeared before its counter was bumped"),
            Err(error) => warn!(%job_id, %error, "application stored but counter bump failed"),
        }

        Ok(stored)
    }

    /// Advance an application along the review pipeline. Re-setting the
    /// current status is a no-op; anything else off the documented path is
    /// rejected.
    pub async fn update_status(
        &self,
        id: &str,
        next: ApplicationStatus,
    ) -> Result<Option<Application>, ApplicationError> {
        self.latency.write_pause().await;
        let Some(current) = self.store.get_by_id(id) else {
            return Ok(None);
        };
        if current.status == next {
            return Ok(Some(current));
        }
        if !current.status.can_advance_to(next) {
            return Err(ApplicationError::InvalidTransition {
                from: current.status,
                to: next,
            });
        }
        Ok(self.store.update(id, |application| application.status = next)?)
    }

    pub async fn count_for_job(&self, job_id: &str) -> usize {
        self.for_job(job_id).await.len()
    }

    pub async fn count_for_candidate(&self, candidate_id: &str) -> usize {
        self.for_candidate(candidate_id).await.len()
    }
}
