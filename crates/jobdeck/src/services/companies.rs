use std::sync::Arc;

use chrono::Utc;

use super::keys;
use super::latency::SimulatedLatency;
use crate::domain::{Company, CompanyPatch, CompanySize, NewCompany};
use crate::storage::{RecordStore, StorageBackend, StorageError};

pub struct CompanyService {
    store: RecordStore<Company>,
    latency: SimulatedLatency,
}

impl CompanyService {
    pub(crate) fn new(backend: Arc<dyn StorageBackend>, latency: SimulatedLatency) -> Self {
        Self {
            store: RecordStore::new(backend, keys::COMPANIES),
            latency,
        }
    }

    pub(crate) fn store(&self) -> &RecordStore<Company> {
        &self.store
    }

    pub async fn all(&self) -> Vec<Company> {
        self.latency.read_pause().await;
        self.store.get_all()
    }

    pub async fn by_id(&self, id: &str) -> Option<Company> {
        self.latency.read_pause().await;
        self.store.get_by_id(id)
    }

    pub async fn by_email(&self, email: &str) -> Option<Company> {
        self.latency.read_pause().await;
        self.store.find_one_by(|company| company.email == email)
    }

    pub async fn by_name(&self, name: &str) -> Option<Company> {
        self.latency.read_pause().await;
        self.store.find_one_by(|company| company.name == name)
    }

    pub async fn create_company(&self, draft: NewCompany) -> Result<Company, StorageError> {
        self.latency.write_pause().await;
        let now = Utc::now();
        let company = Company {
            id: String::new(),
            name: draft.name,
            email: draft.email,
            password: draft.password,
            description: draft.description,
            industry: draft.industry,
            location: draft.location,
            website: draft.website,
            size: draft.size,
            founded_year: draft.founded_year,
            created_at: now,
            updated_at: now,
        };
        self.store.create(company)
    }

    pub async fn update_company(
        &self,
        id: &str,
        patch: CompanyPatch,
    ) -> Result<Option<Company>, StorageError> {
        self.latency.write_pause().await;
        self.store.update(id, |company| {
            patch.apply(company);
            company.updated_at = Utc::now();
        })
    }

    pub async fn delete_company(&self, id: &str) -> bool {
        self.latency.write_pause().await;
        self.store.delete(id)
    }

    pub async fn by_industry(&self, industry: &str) -> Vec<Company> {
        self.latency.read_pause().await;
        let needle = industry.to_lowercase();
        self.store
            .find_by(|company| company.industry.to_lowercase().contains(&needle))
    }

    pub async fn by_size(&self, size: CompanySize) -> Vec<Company> {
        self.latency.read_pause().await;
        self.store.find_by(|company| company.size == size)
    }

    pub async fn by_location(&self, location: &str) -> Vec<Company> {
        self.latency.read_pause().await;
        let needle = location.to_lowercase();
        self.store
            .find_by(|company| company.location.to_lowercase().contains(&needle))
    }
}
