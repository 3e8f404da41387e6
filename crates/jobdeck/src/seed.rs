//! Default datasets for first launch.
//!
//! Cross-references are consistent: every application points at a seeded job
//! and candidate, and job ownership lines up with the seeded companies. The
//! seeded `applications_count` values are display data carried over from the
//! source material, not derived from the seeded applications.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    Application, ApplicationStatus, Candidate, CandidateSnapshot, Company, CompanySize,
    EmploymentType, Job,
};

fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 9, 0, 0)
        .single()
        .expect("valid seed date")
}

fn moment(year: i32, month: u32, date: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, hour, minute, 0)
        .single()
        .expect("valid seed timestamp")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "React Native Developer".to_string(),
            company: "TechCorp".to_string(),
            company_id: "company1".to_string(),
            location: "San Francisco, CA".to_string(),
            category: "Development".to_string(),
            employment_type: EmploymentType::FullTime,
            salary: Some("$95,000 - $120,000".to_string()),
            description: "Experienced mobile developer to join the core app team."
                .to_string(),
            requirements: strings(&[
                "Shipped React Native apps",
                "TypeScript fluency",
                "REST API integration",
                "Git workflow discipline",
            ]),
            benefits: strings(&[
                "Health insurance",
                "Meal allowance",
                "Flexible remote days",
                "Education stipend",
            ]),
            posted_at: day(2024, 1, 15),
            applications_count: 5,
            is_active: true,
        },
        Job {
            id: "2".to_string(),
            title: "UI/UX Designer".to_string(),
            company: "DesignStudio".to_string(),
            company_id: "company2".to_string(),
            location: "New York, NY".to_string(),
            category: "Design".to_string(),
            employment_type: EmploymentType::FullTime,
            salary: Some("$70,000 - $90,000".to_string()),
            description: "Creative designer to craft digital product experiences.".to_string(),
            requirements: strings(&[
                "Figma expertise",
                "Solid portfolio",
                "Design system experience",
                "User research background",
            ]),
            benefits: strings(&[
                "Health insurance",
                "Creative studio budget",
                "Adobe license",
                "Meal allowance",
            ]),
            posted_at: day(2024, 1, 14),
            applications_count: 3,
            is_active: true,
        },
        Job {
            id: "3".to_string(),
            title: "Digital Marketing Analyst".to_string(),
            company: "MarketPro".to_string(),
            company_id: "company3".to_string(),
            location: "Austin, TX".to_string(),
            category: "Marketing".to_string(),
            employment_type: EmploymentType::FullTime,
            salary: Some("$55,000 - $75,000".to_string()),
            description: "Own paid campaigns and the reporting behind them.".to_string(),
            requirements: strings(&[
                "Google Ads experience",
                "Analytics fluency",
                "Social channel management",
                "Spreadsheet modelling",
            ]),
            benefits: strings(&[
                "Health insurance",
                "Performance bonus",
                "Training budget",
                "Meal allowance",
            ]),
            posted_at: day(2024, 1, 13),
            applications_count: 7,
            is_active: true,
        },
        Job {
            id: "4".to_string(),
            title: "Backend Developer".to_string(),
            company: "ServerTech".to_string(),
            company_id: "company4".to_string(),
            location: "Remote".to_string(),
            category: "Development".to_string(),
            employment_type: EmploymentType::FullTime,
            salary: Some("$110,000 - $150,000".to_string()),
            description: "Senior engineer to design and scale service APIs.".to_string(),
            requirements: strings(&[
                "Node.js and TypeScript",
                "MongoDB in production",
                "Docker and Kubernetes",
                "Microservice architecture",
            ]),
            benefits: strings(&[
                "Fully remote",
                "Premium health insurance",
                "Stock options",
                "Hardware budget",
            ]),
            posted_at: day(2024, 1, 12),
            applications_count: 12,
            is_active: true,
        },
        Job {
            id: "5".to_string(),
            title: "Data Analyst".to_string(),
            company: "DataCorp".to_string(),
            company_id: "company5".to_string(),
            location: "Seattle, WA".to_string(),
            category: "Data".to_string(),
            employment_type: EmploymentType::FullTime,
            salary: Some("$80,000 - $105,000".to_string()),
            description: "Build the dashboards leadership plans around.".to_string(),
            requirements: strings(&[
                "Python and SQL",
                "Power BI or Tableau",
                "Applied statistics",
                "Basic machine learning",
            ]),
            benefits: strings(&[
                "Health insurance",
                "Education stipend",
                "Profit sharing",
                "Meal allowance",
            ]),
            posted_at: day(2024, 1, 11),
            applications_count: 8,
            is_active: true,
        },
    ]
}

pub fn companies() -> Vec<Company> {
    let company = |id: &str,
                   name: &str,
                   email: &str,
                   description: &str,
                   industry: &str,
                   location: &str,
                   website: &str,
                   size: CompanySize,
                   founded_year: u16| Company {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: "123456".to_string(),
        description: description.to_string(),
        industry: industry.to_string(),
        location: location.to_string(),
        website: Some(website.to_string()),
        size,
        founded_year: Some(founded_year),
        created_at: day(2024, 1, 2),
        updated_at: day(2024, 1, 2),
    };

    vec![
        company(
            "company1",
            "TechCorp",
            "talent@techcorp.com",
            "Technology company building mobile-first products.",
            "Technology",
            "San Francisco, CA",
            "https://techcorp.example.com",
            CompanySize::Medium,
            2018,
        ),
        company(
            "company2",
            "DesignStudio",
            "hello@designstudio.com",
            "Studio specialized in digital experiences and interfaces.",
            "Design",
            "New York, NY",
            "https://designstudio.example.com",
            CompanySize::Small,
            2020,
        ),
        company(
            "company3",
            "MarketPro",
            "talent@marketpro.com",
            "Performance marketing agency for growth-stage brands.",
            "Marketing",
            "Austin, TX",
            "https://marketpro.example.com",
            CompanySize::Medium,
            2019,
        ),
        company(
            "company4",
            "ServerTech",
            "jobs@servertech.com",
            "Cloud infrastructure and scalable API specialists.",
            "Technology",
            "Remote",
            "https://servertech.example.com",
            CompanySize::Large,
            2017,
        ),
        company(
            "company5",
            "DataCorp",
            "careers@datacorp.com",
            "Analytics, business intelligence, and machine learning.",
            "Data",
            "Seattle, WA",
            "https://datacorp.example.com",
            CompanySize::Large,
            2016,
        ),
        company(
            "company6",
            "StartupHub",
            "team@startuphub.com",
            "Innovation platform connecting startups and investors.",
            "Technology",
            "Denver, CO",
            "https://startuphub.example.com",
            CompanySize::Startup,
            2021,
        ),
    ]
}

pub fn candidates() -> Vec<Candidate> {
    let candidate = |id: &str,
                     name: &str,
                     email: &str,
                     phone: Option<&str>,
                     location: Option<&str>,
                     skills: &[&str],
                     experience: Option<&str>| Candidate {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: "123456".to_string(),
        phone: phone.map(str::to_string),
        location: location.map(str::to_string),
        skills: strings(skills),
        experience: experience.map(str::to_string),
        profile_picture: None,
        created_at: day(2024, 1, 10),
        updated_at: day(2024, 1, 10),
    };

    vec![
        candidate(
            "candidate1",
            "Alice Morgan",
            "alice.morgan@example.com",
            Some("+1 415 555 0101"),
            Some("San Francisco, CA"),
            &["React Native", "TypeScript", "Node.js"],
            Some("Three years building cross-platform mobile apps."),
        ),
        candidate(
            "candidate2",
            "Caleb Stone",
            "caleb.stone@example.com",
            Some("+1 628 555 0144"),
            Some("Oakland, CA"),
            &["React Native", "Swift", "Kotlin"],
            Some("Five years across native and hybrid mobile teams."),
        ),
        candidate(
            "candidate3",
            "Mia Torres",
            "mia.torres@example.com",
            None,
            Some("New York, NY"),
            &["Figma", "Design Systems", "User Research"],
            Some("Product designer with four shipped consumer apps."),
        ),
        candidate(
            "candidate4",
            "Peter Walsh",
            "peter.walsh@example.com",
            Some("+1 512 555 0190"),
            Some("Austin, TX"),
            &["Google Ads", "Analytics", "SEO"],
            Some("Two years running paid acquisition for e-commerce."),
        ),
        candidate(
            "candidate5",
            "Julia Chen",
            "julia.chen@example.com",
            None,
            Some("Remote"),
            &["Node.js", "PostgreSQL", "Docker"],
            Some("Six years of backend work, latterly on platform teams."),
        ),
        candidate(
            "candidate6",
            "Ray Novak",
            "ray.novak@example.com",
            Some("+1 206 555 0172"),
            Some("Seattle, WA"),
            &["Python", "SQL", "Machine Learning"],
            Some("Analyst turned data scientist, three years in."),
        ),
    ]
}

pub fn applications() -> Vec<Application> {
    let jobs = jobs();
    let candidates = candidates();
    let job = |id: &str| {
        jobs.iter()
            .find(|job| job.id == id)
            .cloned()
            .expect("seed job exists")
    };
    let snapshot = |id: &str| {
        candidates
            .iter()
            .find(|candidate| candidate.id == id)
            .map(CandidateSnapshot::from)
            .expect("seed candidate exists")
    };
    let application = |id: &str,
                       job_id: &str,
                       candidate_id: &str,
                       applied_at: DateTime<Utc>,
                       status: ApplicationStatus,
                       cover_letter: &str| Application {
        id: id.to_string(),
        job_id: job_id.to_string(),
        candidate_id: candidate_id.to_string(),
        applied_at,
        status,
        job: job(job_id),
        candidate: Some(snapshot(candidate_id)),
        cover_letter: Some(cover_letter.to_string()),
    };

    vec![
        application(
            "app1",
            "1",
            "candidate1",
            moment(2024, 1, 16, 10, 30),
            ApplicationStatus::Reviewing,
            "Three years of React Native work; this role is exactly my lane.",
        ),
        application(
            "app2",
            "1",
            "candidate2",
            moment(2024, 1, 16, 14, 15),
            ApplicationStatus::Approved,
            "Five years in mobile; happy to walk through my shipped apps.",
        ),
        application(
            "app3",
            "2",
            "candidate3",
            moment(2024, 1, 15, 13, 30),
            ApplicationStatus::Approved,
            "Product designer with a systems background and a full portfolio.",
        ),
        application(
            "app4",
            "3",
            "candidate4",
            moment(2024, 1, 14, 9, 30),
            ApplicationStatus::Approved,
            "Google Ads specialist; I can share campaign results on request.",
        ),
        application(
            "app5",
            "3",
            "candidate1",
            moment(2024, 1, 14, 11, 0),
            ApplicationStatus::Rejected,
            "Looking to move from development into marketing analytics.",
        ),
        application(
            "app6",
            "4",
            "candidate5",
            moment(2024, 1, 13, 8, 0),
            ApplicationStatus::Pending,
            "Six years of Node.js backend experience, keen on remote work.",
        ),
    ]
}
