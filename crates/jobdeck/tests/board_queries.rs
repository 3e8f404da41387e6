//! Integration coverage for catalogue queries, user lookups, auth, and the
//! bootstrap coordinator.

mod common {
    use std::sync::Arc;

    use jobdeck::services::SimulatedLatency;
    use jobdeck::storage::MemoryBackend;
    use jobdeck::ServiceRegistry;

    pub(super) fn registry() -> (Arc<MemoryBackend>, ServiceRegistry) {
        let backend = Arc::new(MemoryBackend::new());
        let registry = ServiceRegistry::new(backend.clone(), SimulatedLatency::disabled());
        (backend, registry)
    }

    pub(super) async fn seeded_registry() -> ServiceRegistry {
        let (_, registry) = registry();
        registry
            .coordinator()
            .initialize()
            .await
            .expect("seeding succeeds");
        registry
    }
}

use chrono::TimeZone;
use common::*;
use jobdeck::domain::{
    ApplyRequest, CandidatePatch, Company, CompanyPatch, CompanySize, EmploymentType, NewCandidate,
    NewJob, NewUser, User,
};
use jobdeck::services::{AuthError, Credentials, SimulatedLatency};
use jobdeck::storage::StorageBackend;
use jobdeck::{CollectionCounts, ServiceRegistry};

fn new_candidate(email: &str, password: &str) -> NewUser {
    NewUser::Candidate(NewCandidate {
        name: "Dana Fisher".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        phone: None,
        location: Some("Portland, OR".to_string()),
        skills: vec!["React Native".to_string()],
        experience: None,
        profile_picture: None,
    })
}

#[tokio::test]
async fn a_blank_query_returns_the_whole_catalogue() {
    let registry = seeded_registry().await;

    let all = registry.jobs().search("   ").await;
    assert_eq!(all.len(), 5);
    assert_eq!(registry.jobs().all().await.len(), 5);
}

#[tokio::test]
async fn search_matches_company_names_case_insensitively() {
    let registry = seeded_registry().await;

    let hits = registry.jobs().search("TECHCORP").await;
    assert_eq!(hits.len(), 1);
    assert!(hits.iter().all(|job| job.company == "TechCorp"));

    let by_location = registry.jobs().search("remote").await;
    assert!(by_location.iter().any(|job| job.id == "4"));
}

#[tokio::test]
async fn category_filtering_is_exact() {
    let registry = seeded_registry().await;

    assert_eq!(registry.jobs().by_category("Development").await.len(), 2);
    assert!(registry.jobs().by_category("development").await.is_empty());
}

#[tokio::test]
async fn available_jobs_skip_inactive_and_excluded_postings() {
    let registry = seeded_registry().await;
    registry
        .jobs()
        .toggle_active("5")
        .await
        .expect("toggle succeeds")
        .expect("job present");

    let available = registry
        .jobs()
        .available_jobs(&["1".to_string()])
        .await;
    let ids: Vec<_> = available.iter().map(|job| job.id.as_str()).collect();

    assert!(!ids.contains(&"1"), "excluded posting listed");
    assert!(!ids.contains(&"5"), "inactive posting listed");
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn legacy_payloads_match_by_name_and_rehydrate_dates() {
    let (backend, registry) = registry();
    // A posting persisted before company_id, applications_count, and
    // is_active existed, with a bare-date timestamp.
    backend
        .write(
            "@jobs",
            r#"[{"id":"legacy1","title":"Legacy Posting","company":"TechCorp","location":"San Francisco, CA","category":"Development","employment_type":"full-time","description":"Posted by an earlier revision.","requirements":[],"benefits":[],"posted_at":"2023-11-05"}]"#,
        )
        .expect("raw write succeeds");

    let techcorp = Company {
        id: "company1".to_string(),
        name: "TechCorp".to_string(),
        email: "talent@techcorp.com".to_string(),
        password: "123456".to_string(),
        description: String::new(),
        industry: "Technology".to_string(),
        location: "San Francisco, CA".to_string(),
        website: None,
        size: CompanySize::Medium,
        founded_year: None,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };

    let owned = registry.jobs().for_company(&techcorp).await;
    assert_eq!(owned.len(), 1);

    let legacy = &owned[0];
    assert_eq!(legacy.company_id, "");
    assert_eq!(legacy.applications_count, 0);
    assert!(legacy.is_active);
    assert_eq!(
        legacy.posted_at,
        chrono::Utc.with_ymd_and_hms(2023, 11, 5, 0, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn company_postings_match_on_the_id_foreign_key() {
    let registry = seeded_registry().await;
    let techcorp = registry
        .companies()
        .by_name("TechCorp")
        .await
        .expect("seeded company present");

    let owned = registry.jobs().for_company(&techcorp).await;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, "1");

    let posted = registry
        .jobs()
        .create_job(
            &techcorp,
            NewJob {
                title: "Release Manager".to_string(),
                location: "San Francisco, CA".to_string(),
                category: "Development".to_string(),
                employment_type: EmploymentType::FullTime,
                salary: None,
                description: "Own the mobile release train.".to_string(),
                requirements: Vec::new(),
                benefits: Vec::new(),
            },
        )
        .await
        .expect("posting succeeds");

    assert_eq!(posted.company_id, techcorp.id);
    assert_eq!(posted.applications_count, 0);
    assert!(posted.is_active);
    assert_eq!(registry.jobs().for_company(&techcorp).await.len(), 2);
}

#[tokio::test]
async fn profile_updates_patch_only_the_supplied_fields() {
    let registry = seeded_registry().await;

    let alice = registry
        .candidates()
        .by_email("alice.morgan@example.com")
        .await
        .expect("seeded candidate present");
    let updated = registry
        .candidates()
        .update_candidate(
            &alice.id,
            CandidatePatch {
                location: Some("Portland, OR".to_string()),
                ..CandidatePatch::default()
            },
        )
        .await
        .expect("update succeeds")
        .expect("candidate present");
    assert_eq!(updated.location.as_deref(), Some("Portland, OR"));
    assert_eq!(updated.skills, alice.skills);
    assert_eq!(updated.email, alice.email);
    assert!(updated.updated_at >= alice.updated_at);

    let techcorp = registry
        .companies()
        .by_name("TechCorp")
        .await
        .expect("seeded company present");
    let updated = registry
        .companies()
        .update_company(
            &techcorp.id,
            CompanyPatch {
                description: Some("Mobile products, now hiring.".to_string()),
                ..CompanyPatch::default()
            },
        )
        .await
        .expect("update succeeds")
        .expect("company present");
    assert_eq!(updated.description, "Mobile products, now hiring.");
    assert_eq!(updated.industry, techcorp.industry);
}

#[tokio::test]
async fn user_lookups_span_both_collections() {
    let registry = seeded_registry().await;

    match registry.auth().user_by_id("company4").await {
        Some(User::Company(company)) => assert_eq!(company.name, "ServerTech"),
        other => panic!("expected the seeded company, got {other:?}"),
    }
    match registry.auth().user_by_email("julia.chen@example.com").await {
        Some(User::Candidate(candidate)) => assert_eq!(candidate.name, "Julia Chen"),
        other => panic!("expected the seeded candidate, got {other:?}"),
    }
    assert!(registry.auth().user_by_email("nobody@example.com").await.is_none());

    assert!(registry.candidates().delete_candidate("candidate4").await);
    assert!(registry.auth().user_by_id("candidate4").await.is_none());
}

#[tokio::test]
async fn candidate_and_company_filters_match_substrings() {
    let registry = seeded_registry().await;

    let mobile = registry
        .candidates()
        .search_by_skills(&["react".to_string()])
        .await;
    assert_eq!(mobile.len(), 2);

    assert_eq!(registry.companies().by_industry("tech").await.len(), 3);
    assert_eq!(
        registry.companies().by_size(CompanySize::Large).await.len(),
        2
    );
    assert_eq!(registry.companies().by_location("remote").await.len(), 1);
    assert_eq!(registry.candidates().by_location("seattle").await.len(), 1);
}

#[tokio::test]
async fn registration_rejects_duplicate_emails_across_account_kinds() {
    let registry = seeded_registry().await;

    // The email belongs to a seeded company, not a candidate.
    match registry
        .auth()
        .register(new_candidate("talent@techcorp.com", "123456"))
        .await
    {
        Err(AuthError::EmailTaken(email)) => assert_eq!(email, "talent@techcorp.com"),
        other => panic!("expected email-taken error, got {other:?}"),
    }
}

#[tokio::test]
async fn registration_rejects_short_passwords() {
    let registry = seeded_registry().await;

    match registry
        .auth()
        .register(new_candidate("dana.fisher@example.com", "12345"))
        .await
    {
        Err(AuthError::WeakPassword) => {}
        other => panic!("expected weak-password error, got {other:?}"),
    }
}

#[tokio::test]
async fn login_checks_the_stored_password() {
    let registry = seeded_registry().await;

    match registry
        .auth()
        .login(&Credentials {
            email: "alice.morgan@example.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .await
    {
        Err(AuthError::InvalidCredentials) => {}
        other => panic!("expected invalid credentials, got {other:?}"),
    }

    let user = registry
        .auth()
        .login(&Credentials {
            email: "alice.morgan@example.com".to_string(),
            password: "123456".to_string(),
        })
        .await
        .expect("seeded credentials sign in");
    assert_eq!(user.name(), "Alice Morgan");
}

#[tokio::test]
async fn the_session_survives_a_registry_rebuild() {
    let (backend, registry) = registry();
    registry
        .coordinator()
        .initialize()
        .await
        .expect("seeding succeeds");
    registry
        .auth()
        .register(new_candidate("dana.fisher@example.com", "quality-first"))
        .await
        .expect("registration succeeds");
    drop(registry);

    let rebuilt = ServiceRegistry::new(backend, SimulatedLatency::disabled());
    let current = rebuilt.auth().current_user().await.expect("session kept");
    assert_eq!(current.email(), "dana.fisher@example.com");
    assert!(matches!(current, User::Candidate(_)));
}

#[tokio::test]
async fn logout_clears_the_session() {
    let registry = seeded_registry().await;
    registry
        .auth()
        .login(&Credentials {
            email: "alice.morgan@example.com".to_string(),
            password: "123456".to_string(),
        })
        .await
        .expect("sign in succeeds");

    registry.auth().logout().await.expect("logout succeeds");
    assert!(registry.auth().current_user().await.is_none());
}

#[tokio::test]
async fn initialize_is_idempotent_and_never_reseeds_non_empty_stores() {
    let registry = seeded_registry().await;
    assert!(registry.jobs().delete_job("5").await);

    registry
        .coordinator()
        .initialize()
        .await
        .expect("second initialize succeeds");
    assert_eq!(registry.coordinator().counts().await.jobs, 4);
}

#[tokio::test]
async fn reset_returns_every_store_to_the_seeded_state() {
    let (backend, registry) = registry();
    registry
        .coordinator()
        .initialize()
        .await
        .expect("seeding succeeds");

    registry
        .auth()
        .login(&Credentials {
            email: "alice.morgan@example.com".to_string(),
            password: "123456".to_string(),
        })
        .await
        .expect("sign in succeeds");
    registry
        .applications()
        .apply(ApplyRequest {
            job_id: "1".to_string(),
            candidate_id: "candidate6".to_string(),
            cover_letter: None,
        })
        .await
        .expect("apply succeeds");

    registry.coordinator().reset().await.expect("reset succeeds");

    assert_eq!(
        registry.coordinator().counts().await,
        CollectionCounts {
            jobs: 5,
            applications: 6,
            candidates: 6,
            companies: 6,
        }
    );
    assert!(registry.auth().current_user().await.is_none());
    assert!(backend.read("@auth:current_user").expect("read works").is_none());
}
