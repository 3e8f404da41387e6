//! Async domain services over the persisted record stores.
//!
//! Services are constructed once by the [`ServiceRegistry`] and share one
//! storage backend. Every public method pauses for the configured simulated
//! latency before touching the store, standing in for the network round trip
//! the original callers expected.

mod applications;
mod auth;
mod candidates;
mod companies;
mod jobs;
mod latency;
mod registry;

pub use applications::{ApplicationError, ApplicationService};
pub use auth::{AuthError, AuthService, Credentials};
pub use candidates::CandidateService;
pub use companies::CompanyService;
pub use jobs::JobService;
pub use latency::SimulatedLatency;
pub use registry::ServiceRegistry;

/// Storage keys, one logical key per collection.
pub(crate) mod keys {
    pub(crate) const JOBS: &str = "@jobs";
    pub(crate) const APPLICATIONS: &str = "@applications";
    pub(crate) const CANDIDATES: &str = "@candidates";
    pub(crate) const COMPANIES: &str = "@companies";
    pub(crate) const SESSION: &str = "@auth:current_user";
}
