//! Entities persisted by the engine and the input/patch types that feed
//! them.
//!
//! Every record carries a unique string id within its collection. Jobs keep
//! an always-populated `company_id` foreign key stamped at creation; the
//! display name is retained because payloads persisted before the field
//! existed can only be matched that way.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Startup => "Startup",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Enterprise => "Enterprise",
        }
    }
}

/// Review pipeline for an application: `pending` moves to `reviewing`, which
/// settles as `approved` or `rejected`. Terminal states never move again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewing => "reviewing",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    pub const fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Reviewing)
                | (Self::Reviewing, Self::Approved)
                | (Self::Reviewing, Self::Rejected)
        )
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    /// Display name of the posting company.
    pub company: String,
    /// Owning company record id. Empty only in payloads persisted before
    /// the field existed.
    #[serde(default)]
    pub company_id: String,
    pub location: String,
    pub category: String,
    pub employment_type: EmploymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub posted_at: DateTime<Utc>,
    #[serde(default)]
    pub applications_count: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Job {
    /// Case-insensitive substring match across the searchable fields.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.company.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
    }
}

impl Record for Job {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn date_fields() -> &'static [&'static str] {
        &["posted_at"]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub candidate_id: String,
    pub applied_at: DateTime<Utc>,
    pub status: ApplicationStatus,
    /// Snapshot of the job at apply time; later edits to the posting do not
    /// propagate here.
    pub job: Job,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<CandidateSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}

impl Record for Application {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn date_fields() -> &'static [&'static str] {
        &["applied_at", "job.posted_at"]
    }
}

/// Trimmed candidate profile embedded in an application for the reviewing
/// company. Carries no credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSnapshot {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl From<&Candidate> for CandidateSnapshot {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            phone: candidate.phone.clone(),
            location: candidate.location.clone(),
            skills: candidate.skills.clone(),
            experience: candidate.experience.clone(),
            profile_picture: candidate.profile_picture.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Plaintext; never copied into a [`CandidateSnapshot`].
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Candidate {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn date_fields() -> &'static [&'static str] {
        &["created_at", "updated_at"]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub description: String,
    pub industry: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub size: CompanySize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<u16>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Company {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn date_fields() -> &'static [&'static str] {
        &["created_at", "updated_at"]
    }
}

/// Either kind of account, discriminated by a `user_type` tag on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "user_type", rename_all = "snake_case")]
pub enum User {
    Candidate(Candidate),
    Company(Company),
}

impl User {
    pub fn id(&self) -> &str {
        match self {
            Self::Candidate(candidate) => &candidate.id,
            Self::Company(company) => &company.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Candidate(candidate) => &candidate.name,
            Self::Company(company) => &company.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Self::Candidate(candidate) => &candidate.email,
            Self::Company(company) => &company.email,
        }
    }

    pub(crate) fn password(&self) -> &str {
        match self {
            Self::Candidate(candidate) => &candidate.password,
            Self::Company(company) => &company.password,
        }
    }
}

/// Fields a company supplies when publishing a posting; ownership, posting
/// time, counters, and the active flag are stamped by the service.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub location: String,
    pub category: String,
    pub employment_type: EmploymentType,
    pub salary: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
    pub email: String,
    pub password: String,
    pub description: String,
    pub industry: String,
    pub location: String,
    pub website: Option<String>,
    pub size: CompanySize,
    pub founded_year: Option<u16>,
}

#[derive(Debug, Clone)]
pub enum NewUser {
    Candidate(NewCandidate),
    Company(NewCompany),
}

impl NewUser {
    pub fn email(&self) -> &str {
        match self {
            Self::Candidate(draft) => &draft.email,
            Self::Company(draft) => &draft.email,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            Self::Candidate(draft) => &draft.password,
            Self::Company(draft) => &draft.password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApplyRequest {
    pub job_id: String,
    pub candidate_id: String,
    pub cover_letter: Option<String>,
}

/// Shallow-merge updates: `Some` fields overwrite, `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub title: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl JobPatch {
    pub(crate) fn apply(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(location) = self.location {
            job.location = location;
        }
        if let Some(category) = self.category {
            job.category = category;
        }
        if let Some(employment_type) = self.employment_type {
            job.employment_type = employment_type;
        }
        if let Some(salary) = self.salary {
            job.salary = Some(salary);
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(requirements) = self.requirements {
            job.requirements = requirements;
        }
        if let Some(benefits) = self.benefits {
            job.benefits = benefits;
        }
        if let Some(is_active) = self.is_active {
            job.is_active = is_active;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CandidatePatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<String>,
    pub profile_picture: Option<String>,
}

impl CandidatePatch {
    pub(crate) fn apply(self, candidate: &mut Candidate) {
        if let Some(name) = self.name {
            candidate.name = name;
        }
        if let Some(phone) = self.phone {
            candidate.phone = Some(phone);
        }
        if let Some(location) = self.location {
            candidate.location = Some(location);
        }
        if let Some(skills) = self.skills {
            candidate.skills = skills;
        }
        if let Some(experience) = self.experience {
            candidate.experience = Some(experience);
        }
        if let Some(profile_picture) = self.profile_picture {
            candidate.profile_picture = Some(profile_picture);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub size: Option<CompanySize>,
    pub founded_year: Option<u16>,
}

impl CompanyPatch {
    pub(crate) fn apply(self, company: &mut Company) {
        if let Some(name) = self.name {
            company.name = name;
        }
        if let Some(description) = self.description {
            company.description = description;
        }
        if let Some(industry) = self.industry {
            company.industry = industry;
        }
        if let Some(location) = self.location {
            company.location = location;
        }
        if let Some(website) = self.website {
            company.website = Some(website);
        }
        if let Some(size) = self.size {
            company.size = size;
        }
        if let Some(founded_year) = self.founded_year {
            company.founded_year = Some(founded_year);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_machine_allows_the_documented_path() {
        use ApplicationStatus::*;

        assert!(Pending.can_advance_to(Reviewing));
        assert!(Reviewing.can_advance_to(Approved));
        assert!(Reviewing.can_advance_to(Rejected));

        assert!(!Pending.can_advance_to(Approved));
        assert!(!Reviewing.can_advance_to(Pending));
        assert!(!Approved.can_advance_to(Rejected));
        assert!(!Rejected.can_advance_to(Reviewing));

        assert!(Approved.is_terminal() && Rejected.is_terminal());
        assert!(!Pending.is_terminal() && !Reviewing.is_terminal());
    }

    #[test]
    fn employment_type_uses_kebab_case_wire_names() {
        let encoded = serde_json::to_string(&EmploymentType::FullTime).unwrap();
        assert_eq!(encoded, "\"full-time\"");

        let decoded: EmploymentType = serde_json::from_str("\"part-time\"").unwrap();
        assert_eq!(decoded, EmploymentType::PartTime);
    }

    #[test]
    fn user_round_trips_with_a_type_tag() {
        let candidate = Candidate {
            id: "candidate9".to_string(),
            name: "Sam Reyes".to_string(),
            email: "sam@example.com".to_string(),
            password: "123456".to_string(),
            phone: None,
            location: None,
            skills: vec!["Rust".to_string()],
            experience: None,
            profile_picture: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let encoded = serde_json::to_value(User::Candidate(candidate.clone())).unwrap();
        assert_eq!(encoded["user_type"], "candidate");

        let decoded: User = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, User::Candidate(candidate));
    }
}
