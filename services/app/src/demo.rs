use jobdeck::domain::{
    ApplicationStatus, ApplyRequest, EmploymentType, NewCandidate, NewJob, NewUser, User,
};
use jobdeck::services::{AuthError, Credentials};
use jobdeck::{AppError, ServiceRegistry};

/// End-to-end walk: a seeded company posts a job, a candidate account is
/// registered (or signed back in on later runs), applies, and the company
/// reviews the application through to approval.
pub(crate) async fn run(registry: &ServiceRegistry) -> Result<(), AppError> {
    println!("jobdeck demo");

    let auth = registry.auth();
    let jobs = registry.jobs();
    let applications = registry.applications();

    let company_user = auth
        .login(&Credentials {
            email: "talent@techcorp.com".to_string(),
            password: "123456".to_string(),
        })
        .await?;
    let company = match company_user {
        User::Company(company) => company,
        User::Candidate(_) => {
            println!("the seeded TechCorp account is missing; run `jobdeck reset` first");
            return Ok(());
        }
    };
    println!("\nSigned in as {} ({})", company.name, company.email);

    let posting = jobs
        .create_job(
            &company,
            NewJob {
                title: "Mobile QA Engineer".to_string(),
                location: "San Francisco, CA".to_string(),
                category: "Development".to_string(),
                employment_type: EmploymentType::Contract,
                salary: Some("$60/hour".to_string()),
                description: "Contract QA for the candidate-facing mobile app.".to_string(),
                requirements: vec![
                    "Mobile test automation".to_string(),
                    "Release sign-off experience".to_string(),
                ],
                benefits: vec!["Remote-friendly".to_string()],
            },
        )
        .await?;
    println!("Posted '{}' ({})", posting.title, posting.id);

    let demo_credentials = Credentials {
        email: "dana.fisher@example.com".to_string(),
        password: "quality-first".to_string(),
    };
    let candidate_user = match auth
        .register(NewUser::Candidate(NewCandidate {
            name: "Dana Fisher".to_string(),
            email: demo_credentials.email.clone(),
            password: demo_credentials.password.clone(),
            phone: None,
            location: Some("Portland, OR".to_string()),
            skills: vec!["React Native".to_string(), "Detox".to_string()],
            experience: Some("Four years of mobile QA.".to_string()),
            profile_picture: None,
        }))
        .await
    {
        Ok(user) => user,
        Err(AuthError::EmailTaken(_)) => auth.login(&demo_credentials).await?,
        Err(other) => return Err(other.into()),
    };
    let candidate = match candidate_user {
        User::Candidate(candidate) => candidate,
        User::Company(_) => {
            println!("demo email is taken by a company account; run `jobdeck reset` first");
            return Ok(());
        }
    };
    println!("\nSigned in as {} ({})", candidate.name, candidate.email);

    let matches = jobs.search("techcorp").await;
    println!("Search 'techcorp' returned {} postings:", matches.len());
    for job in &matches {
        println!(
            "- {} @ {} | {} | {}",
            job.title,
            job.company,
            job.location,
            job.employment_type.label()
        );
    }

    let application = applications
        .apply(ApplyRequest {
            job_id: posting.id.clone(),
            candidate_id: candidate.id.clone(),
            cover_letter: Some("I can start next week.".to_string()),
        })
        .await?;
    println!(
        "\n{} applied to '{}' -> status {}",
        candidate.name, application.job.title, application.status
    );
    if let Some(job) = jobs.by_id(&posting.id).await {
        println!(
            "'{}' now shows {} application(s)",
            job.title, job.applications_count
        );
    }

    let received = applications.for_job(&posting.id).await;
    println!(
        "\n{} received {} application(s) for '{}'",
        company.name,
        received.len(),
        posting.title
    );
    for next in [ApplicationStatus::Reviewing, ApplicationStatus::Approved] {
        if let Some(updated) = applications.update_status(&application.id, next).await? {
            println!("Application {} moved to {}", updated.id, updated.status);
        }
    }

    let counts = registry.coordinator().counts().await;
    match serde_json::to_string_pretty(&counts) {
        Ok(json) => println!("\nCollection counts:\n{json}"),
        Err(err) => println!("\nCollection counts unavailable: {err}"),
    }

    Ok(())
}
