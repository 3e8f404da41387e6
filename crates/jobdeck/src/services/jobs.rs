use std::sync::Arc;

use chrono::Utc;

use super::keys;
use super::latency::SimulatedLatency;
use crate::domain::{Company, Job, JobPatch, NewJob};
use crate::storage::{RecordStore, StorageBackend, StorageError};

/// Posting catalogue serving both the candidate browse/search flows and the
/// company management flows.
pub struct JobService {
    store: RecordStore<Job>,
    latency: SimulatedLatency,
}

impl JobService {
    pub(crate) fn new(backend: Arc<dyn StorageBackend>, latency: SimulatedLatency) -> Self {
        Self {
            store: RecordStore::new(backend, keys::JOBS),
            latency,
        }
    }

    pub(crate) fn store(&self) -> &RecordStore<Job> {
        &self.store
    }

    pub async fn all(&self) -> Vec<Job> {
        self.latency.read_pause().await;
        self.store.get_all()
    }

    pub async fn by_id(&self, id: &str) -> Option<Job> {
        self.latency.read_pause().await;
        self.store.get_by_id(id)
    }

    /// Case-insensitive substring search over title, company, category, and
    /// location. A blank query returns the whole catalogue.
    pub async fn search(&self, query: &str) -> Vec<Job> {
        self.latency.read_pause().await;
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.store.get_all();
        }
        self.store.find_by(|job| job.matches(&needle))
    }

    pub async fn by_category(&self, category: &str) -> Vec<Job> {
        self.latency.read_pause().await;
        self.store.find_by(|job| job.category == category)
    }

    /// Postings owned by the given company. Matched by the `company_id`
    /// foreign key; records persisted before that field existed fall back to
    /// the display name.
    pub async fn for_company(&self, company: &Company) -> Vec<Job> {
        self.latency.read_pause().await;
        self.store.find_by(|job| {
            job.company_id == company.id
                || (job.company_id.is_empty() && job.company == company.name)
        })
    }

    /// Active postings, minus an id-exclusion list (typically the jobs a
    /// candidate already applied to).
    pub async fn available_jobs(&self, excluded_ids: &[String]) -> Vec<Job> {
        self.latency.read_pause().await;
        self.store
            .find_by(|job| job.is_active && !excluded_ids.iter().any(|id| id == &job.id))
    }

    pub async fn create_job(&self, company: &Company, draft: NewJob) -> Result<Job, StorageError> {
        self.latency.write_pause().await;
        let job = Job {
            id: String::new(),
            title: draft.title,
            company: company.name.clone(),
            company_id: company.id.clone(),
            location: draft.location,
            category: draft.category,
            employment_type: draft.employment_type,
            salary: draft.salary,
            description: draft.description,
            requirements: draft.requirements,
            benefits: draft.benefits,
            posted_at: Utc::now(),
            applications_count: 0,
            is_active: true,
        };
        self.store.create(job)
    }

    pub async fn update_job(&self, id: &str, patch: JobPatch) -> Result<Option<Job>, StorageError> {
        self.latency.write_pause().await;
        self.store.update(id, |job| patch.apply(job))
    }

    pub async fn delete_job(&self, id: &str) -> bool {
        self.latency.write_pause().await;
        self.store.delete(id)
    }

    /// Counter bump performed as a side effect of a successful application.
    pub async fn increment_applications(&self, id: &str) -> Result<Option<Job>, StorageError> {
        self.store.update(id, |job| job.applications_count += 1)
    }

    pub async fn toggle_active(&self, id: &str) -> Result<Option<Job>, StorageError> {
        self.latency.write_pause().await;
        self.store.update(id, |job| job.is_active = !job.is_active)
    }
}
