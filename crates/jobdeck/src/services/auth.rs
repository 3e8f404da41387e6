use std::sync::Arc;

use tracing::warn;

use super::candidates::CandidateService;
use super::companies::CompanyService;
use super::keys;
use super::latency::SimulatedLatency;
use crate::domain::{NewUser, User};
use crate::storage::{StorageBackend, StorageError};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Error raised by registration and sign-in.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("an account already exists for {0}")]
    EmailTaken(String),
    #[error("passwords must be at least {} characters", MIN_PASSWORD_LEN)]
    WeakPassword,
    #[error("email or password does not match any account")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Account registration, sign-in, and the persisted session, plus the
/// cross-collection user lookups both flows need.
pub struct AuthService {
    backend: Arc<dyn StorageBackend>,
    candidates: Arc<CandidateService>,
    companies: Arc<CompanyService>,
    latency: SimulatedLatency,
}

impl AuthService {
    pub(crate) fn new(
        backend: Arc<dyn StorageBackend>,
        candidates: Arc<CandidateService>,
        companies: Arc<CompanyService>,
        latency: SimulatedLatency,
    ) -> Self {
        Self {
            backend,
            candidates,
            companies,
            latency,
        }
    }

    /// Create an account of either kind. The email must be unused across
    /// both user collections; the new account becomes the current session.
    pub async fn register(&self, new_user: NewUser) -> Result<User, AuthError> {
        self.latency.write_pause().await;

        if new_user.password().chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }
        let email = new_user.email().to_string();
        if self.lookup_by_email(&email).is_some() {
            return Err(AuthError::EmailTaken(email));
        }

        let user = match new_user {
            NewUser::Candidate(draft) => {
                User::Candidate(self.candidates.create_candidate(draft).await?)
            }
            NewUser::Company(draft) => {
                User::Company(self.companies.create_company(draft).await?)
            }
        };
        self.persist_session(&user)?;
        Ok(user)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        self.latency.read_pause().await;

        let user = self
            .lookup_by_email(&credentials.email)
            .ok_or(AuthError::InvalidCredentials)?;
        if user.password() != credentials.password {
            return Err(AuthError::InvalidCredentials);
        }
        self.persist_session(&user)?;
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), StorageError> {
        self.latency.write_pause().await;
        self.backend.remove(keys::SESSION).map(|_| ())
    }

    /// The signed-in user, if any. An unreadable session payload signs the
    /// user out rather than failing.
    pub async fn current_user(&self) -> Option<User> {
        self.latency.read_pause().await;
        let payload = match self.backend.read(keys::SESSION) {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(error) => {
                warn!(%error, "session read failed");
                return None;
            }
        };
        match serde_json::from_str(&payload) {
            Ok(user) => Some(user),
            Err(error) => {
                warn!(%error, "unreadable session payload, signing out");
                None
            }
        }
    }

    pub async fn user_by_id(&self, id: &str) -> Option<User> {
        self.latency.read_pause().await;
        if let Some(candidate) = self.candidates.store().get_by_id(id) {
            return Some(User::Candidate(candidate));
        }
        self.companies.store().get_by_id(id).map(User::Company)
    }

    pub async fn user_by_email(&self, email: &str) -> Option<User> {
        self.latency.read_pause().await;
        self.lookup_by_email(email)
    }

    fn lookup_by_email(&self, email: &str) -> Option<User> {
        if let Some(candidate) = self
            .candidates
            .store()
            .find_one_by(|candidate| candidate.email == email)
        {
            return Some(User::Candidate(candidate));
        }
        self.companies
            .store()
            .find_one_by(|company| company.email == email)
            .map(User::Company)
    }

    fn persist_session(&self, user: &User) -> Result<(), StorageError> {
        let payload = serde_json::to_string(user).map_err(|source| StorageError::Encode {
            key: keys::SESSION.to_string(),
            source,
        })?;
        self.backend.write(keys::SESSION, &payload)
    }
}
