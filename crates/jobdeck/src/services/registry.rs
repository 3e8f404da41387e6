use std::sync::Arc;

use super::applications::ApplicationService;
use super::auth::AuthService;
use super::candidates::CandidateService;
use super::companies::CompanyService;
use super::jobs::JobService;
use super::latency::SimulatedLatency;
use crate::bootstrap::DataCoordinator;
use crate::storage::StorageBackend;

/// The full set of services wired over one shared backend.
///
/// Built once at process start and handed to callers; tests construct a
/// fresh registry per case instead of sharing process-wide state.
pub struct ServiceRegistry {
    jobs: Arc<JobService>,
    applications: Arc<ApplicationService>,
    candidates: Arc<CandidateService>,
    companies: Arc<CompanyService>,
    auth: Arc<AuthService>,
    coordinator: DataCoordinator,
}

impl ServiceRegistry {
    pub fn new(backend: Arc<dyn StorageBackend>, latency: SimulatedLatency) -> Self {
        let jobs = Arc::new(JobService::new(backend.clone(), latency));
        let candidates = Arc::new(CandidateService::new(backend.clone(), latency));
        let companies = Arc::new(CompanyService::new(backend.clone(), latency));
        let applications = Arc::new(ApplicationService::new(
            backend.clone(),
            jobs.clone(),
            candidates.clone(),
            latency,
        ));
        let auth = Arc::new(AuthService::new(
            backend.clone(),
            candidates.clone(),
            companies.clone(),
            latency,
        ));
        let coordinator = DataCoordinator::new(
            backend,
            jobs.clone(),
            applications.clone(),
            candidates.clone(),
            companies.clone(),
        );

        Self {
            jobs,
            applications,
            candidates,
            companies,
            auth,
            coordinator,
        }
    }

    pub fn jobs(&self) -> &JobService {
        &self.jobs
    }

    pub fn applications(&self) -> &ApplicationService {
        &self.applications
    }

    pub fn candidates(&self) -> &CandidateService {
        &self.candidates
    }

    pub fn companies(&self) -> &CompanyService {
        &self.companies
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn coordinator(&self) -> &DataCoordinator {
        &self.coordinator
    }
}
