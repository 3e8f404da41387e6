use std::sync::Arc;

use chrono::Utc;

use super::keys;
use super::latency::SimulatedLatency;
use crate::domain::{Candidate, CandidatePatch, NewCandidate};
use crate::storage::{RecordStore, StorageBackend, StorageError};

pub struct CandidateService {
    store: RecordStore<Candidate>,
    latency: SimulatedLatency,
}

impl CandidateService {
    pub(crate) fn new(backend: Arc<dyn StorageBackend>, latency: SimulatedLatency) -> Self {
        Self {
            store: RecordStore::new(backend, keys::CANDIDATES),
            latency,
        }
    }

    pub(crate) fn store(&self) -> &RecordStore<Candidate> {
        &self.store
    }

    pub async fn all(&self) -> Vec<Candidate> {
        self.latency.read_pause().await;
        self.store.get_all()
    }

    pub async fn by_id(&self, id: &str) -> Option<Candidate> {
        self.latency.read_pause().await;
        self.store.get_by_id(id)
    }

    pub async fn by_email(&self, email: &str) -> Option<Candidate> {
        self.latency.read_pause().await;
        self.store.find_one_by(|candidate| candidate.email == email)
    }

    pub async fn create_candidate(
        &self,
        draft: NewCandidate,
    ) -> Result<Candidate, StorageError> {
        self.latency.write_pause().await;
        let now = Utc::now();
        let candidate = Candidate {
            id: String::new(),
            name: draft.name,
            email: draft.email,
            password: draft.password,
            phone: draft.phone,
            location: draft.location,
            skills: draft.skills,
            experience: draft.experience,
            profile_picture: draft.profile_picture,
            created_at: now,
            updated_at: now,
        };
        self.store.create(candidate)
    }

    pub async fn update_candidate(
        &self,
        id: &str,
        patch: CandidatePatch,
    ) -> Result<Option<Candidate>, StorageError> {
        self.latency.write_pause().await;
        self.store.update(id, |candidate| {
            patch.apply(candidate);
            candidate.updated_at = Utc::now();
        })
    }

    pub async fn delete_candidate(&self, id: &str) -> bool {
        self.latency.write_pause().await;
        self.store.delete(id)
    }

    /// Candidates matching any of the given skills, case-insensitively and
    /// by substring.
    pub async fn search_by_skills(&self, skills: &[String]) -> Vec<Candidate> {
        self.latency.read_pause().await;
        let needles: Vec<String> = skills.iter().map(|skill| skill.to_lowercase()).collect();
        self.store.find_by(|candidate| {
            needles.iter().any(|needle| {
                candidate
                    .skills
                    .iter()
                    .any(|skill| skill.to_lowercase().contains(needle))
            })
        })
    }

    pub async fn by_location(&self, location: &str) -> Vec<Candidate> {
        self.latency.read_pause().await;
        let needle = location.to_lowercase();
        self.store.find_by(|candidate| {
            candidate
                .location
                .as_ref()
                .is_some_and(|current| current.to_lowercase().contains(&needle))
        })
    }
}
