//! In-memory directory backing the REST API and server functions
//!
//! Candidates, canonical skills, organizations and employer accounts live in
//! process-wide maps seeded at startup. Thread-safe via DashMap; no
//! persistence.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};
use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::domain::models::{
    Availability, CandidateDetail, CandidateResult, EducationEntry, EmployerAccount,
    EmploymentEntry, Organization, Skill, WorkStatus,
};
use crate::shared::logging;

/// Server-side candidate profile. Richer than the wire-facing
/// `CandidateResult`; the query engine works directly on this.
#[derive(Debug, Clone)]
pub struct CandidateRecord {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub summary: String,
    pub skills: Vec<Skill>,
    pub total_experience_years: u8,
    pub total_experience_months: u8,
    pub expected_salary: Option<u32>,
    pub notice_period_days: Option<u16>,
    pub work_status: WorkStatus,
    pub availability_to_join: Availability,
    pub employments: Vec<EmploymentEntry>,
    pub educations: Vec<EducationEntry>,
    pub education_levels: Vec<String>,
    pub is_searchable: bool,
    pub updated_at: DateTime<Utc>,
}

impl CandidateRecord {
    /// Total experience in whole months, for bound comparisons.
    pub fn total_experience_months_calc(&self) -> u32 {
        self.total_experience_years as u32 * 12 + self.total_experience_months as u32
    }

    /// Experience in years with one decimal, for display.
    pub fn total_experience(&self) -> f32 {
        (self.total_experience_months_calc() as f32 / 12.0 * 10.0).round() / 10.0
    }

    /// Section-based completion score. Profiles below 60% are not
    /// searchable from the employer console.
    pub fn profile_completion_percent(&self) -> u8 {
        let sections = [
            !self.full_name.is_empty() && !self.email.is_empty() && !self.location.is_empty(),
            !self.summary.is_empty(),
            !self.skills.is_empty(),
            !self.employments.is_empty(),
            !self.educations.is_empty(),
        ];
        let completed = sections.iter().filter(|done| **done).count();
        ((completed as f32 / sections.len() as f32) * 100.0).round() as u8
    }

    pub fn to_result(&self) -> CandidateResult {
        CandidateResult {
            id: self.id,
            full_name: self.full_name.clone(),
            location: self.location.clone(),
            total_experience: self.total_experience(),
            skills: self.skills.iter().map(|s| s.name.clone()).collect(),
            summary: self.summary.clone(),
            last_updated: self.updated_at,
        }
    }

    pub fn to_detail(&self) -> CandidateDetail {
        CandidateDetail {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            location: self.location.clone(),
            total_experience: self.total_experience(),
            expected_salary: self.expected_salary,
            notice_period_days: self.notice_period_days,
            work_status: self.work_status.label().to_string(),
            availability_to_join: self.availability_to_join.label().to_string(),
            skills: self.skills.iter().map(|s| s.name.clone()).collect(),
            employments: self.employments.clone(),
            educations: self.educations.clone(),
            summary: self.summary.clone(),
            profile_completion_percent: self.profile_completion_percent(),
            last_updated: self.updated_at,
        }
    }
}

pub static CANDIDATES: Lazy<DashMap<u64, CandidateRecord>> = Lazy::new(|| {
    let map = DashMap::new();
    for record in seed_candidates() {
        map.insert(record.id, record);
    }
    map
});

pub static SKILLS: Lazy<Vec<Skill>> = Lazy::new(seed_skills);

pub static ORGANIZATIONS: Lazy<DashMap<u64, Organization>> = Lazy::new(|| {
    let map = DashMap::new();
    for org in seed_organizations() {
        map.insert(org.id, org);
    }
    map
});

pub static EMPLOYERS: Lazy<DashMap<u64, EmployerAccount>> = Lazy::new(|| {
    let map = DashMap::new();
    for account in seed_employers() {
        map.insert(account.id, account);
    }
    map
});

static NEXT_ORG_ID: AtomicU64 = AtomicU64::new(100);

pub fn next_organization_id() -> u64 {
    NEXT_ORG_ID.fetch_add(1, Ordering::Relaxed)
}

/// Forces all stores to initialize and logs the seeded counts.
pub fn ensure_seeded() {
    logging::log_directory_seeded(CANDIDATES.len(), SKILLS.len(), ORGANIZATIONS.len());
}

fn seed_skills() -> Vec<Skill> {
    [
        "Python",
        "Django",
        "React",
        "Rust",
        "Go",
        "Java",
        "Spring Boot",
        "PostgreSQL",
        "TypeScript",
        "Node.js",
        "Kubernetes",
        "AWS",
        "Machine Learning",
        "Data Engineering",
        "CSS",
    ]
    .iter()
    .enumerate()
    .map(|(idx, name)| Skill {
        id: idx as u64 + 1,
        name: (*name).to_string(),
    })
    .collect()
}

fn skill(id: u64, name: &str) -> Skill {
    Skill {
        id,
        name: name.to_string(),
    }
}

fn employment(title: &str, company: &str, start: (i32, u32), end: Option<(i32, u32)>) -> EmploymentEntry {
    EmploymentEntry {
        title: title.to_string(),
        company: company.to_string(),
        start: Utc
            .with_ymd_and_hms(start.0, start.1, 1, 0, 0, 0)
            .single()
            .expect("valid seed date"),
        end: end.map(|(y, m)| {
            Utc.with_ymd_and_hms(y, m, 1, 0, 0, 0)
                .single()
                .expect("valid seed date")
        }),
    }
}

fn education(degree: &str, institution: &str, year: u16) -> EducationEntry {
    EducationEntry {
        degree: degree.to_string(),
        institution: institution.to_string(),
        year,
    }
}

fn seed_candidates() -> Vec<CandidateRecord> {
    let now = Utc::now();
    vec![
        CandidateRecord {
            id: 1,
            full_name: "Ananya Sharma".to_string(),
            email: "ananya.sharma@example.com".to_string(),
            location: "Bengaluru".to_string(),
            summary: "Backend engineer focused on Python services and data pipelines."
                .to_string(),
            skills: vec![skill(1, "Python"), skill(2, "Django"), skill(8, "PostgreSQL")],
            total_experience_years: 5,
            total_experience_months: 6,
            expected_salary: Some(24),
            notice_period_days: Some(30),
            work_status: WorkStatus::Experienced,
            availability_to_join: Availability::OneMonth,
            employments: vec![
                employment("Senior Backend Engineer", "Kite Labs", (2022, 4), None),
                employment("Backend Engineer", "Northwind", (2019, 1), Some((2022, 3))),
            ],
            educations: vec![education("GRADUATE", "RV College of Engineering", 2018)],
            education_levels: vec!["GRADUATE".to_string()],
            is_searchable: true,
            updated_at: now - Duration::days(2),
        },
        CandidateRecord {
            id: 2,
            full_name: "Rahul Verma".to_string(),
            email: "rahul.verma@example.com".to_string(),
            location: "Pune".to_string(),
            summary: "Frontend developer building React applications with a design-systems bent."
                .to_string(),
            skills: vec![skill(3, "React"), skill(9, "TypeScript"), skill(15, "CSS")],
            total_experience_years: 3,
            total_experience_months: 2,
            expected_salary: Some(16),
            notice_period_days: Some(15),
            work_status: WorkStatus::Experienced,
            availability_to_join: Availability::FifteenDaysOrLess,
            employments: vec![employment("Frontend Developer", "Pixelsmith", (2021, 7), None)],
            educations: vec![education("GRADUATE", "COEP Pune", 2021)],
            education_levels: vec!["GRADUATE".to_string()],
            is_searchable: true,
            updated_at: now - Duration::days(5),
        },
        CandidateRecord {
            id: 3,
            full_name: "Meera Iyer".to_string(),
            email: "meera.iyer@example.com".to_string(),
            location: "Chennai".to_string(),
            summary: "Data engineer; Spark, Airflow and warehouse modelling on AWS.".to_string(),
            skills: vec![
                skill(14, "Data Engineering"),
                skill(1, "Python"),
                skill(12, "AWS"),
            ],
            total_experience_years: 7,
            total_experience_months: 0,
            expected_salary: Some(38),
            notice_period_days: Some(60),
            work_status: WorkStatus::Experienced,
            availability_to_join: Availability::TwoMonths,
            employments: vec![
                employment("Lead Data Engineer", "Harbor Analytics", (2020, 9), None),
            ],
            educations: vec![education("POST_GRADUATE", "IIT Madras", 2017)],
            education_levels: vec!["POST_GRADUATE".to_string()],
            is_searchable: true,
            updated_at: now - Duration::days(9),
        },
        CandidateRecord {
            id: 4,
            full_name: "Arjun Nair".to_string(),
            email: "arjun.nair@example.com".to_string(),
            location: "Kochi".to_string(),
            summary: "Systems programmer; Rust network services and observability tooling."
                .to_string(),
            skills: vec![skill(4, "Rust"), skill(5, "Go"), skill(11, "Kubernetes")],
            total_experience_years: 4,
            total_experience_months: 8,
            expected_salary: Some(30),
            notice_period_days: Some(90),
            work_status: WorkStatus::Experienced,
            availability_to_join: Availability::ThreeMonths,
            employments: vec![employment("Platform Engineer", "Quayside", (2020, 2), None)],
            educations: vec![education("GRADUATE", "NIT Calicut", 2019)],
            education_levels: vec!["GRADUATE".to_string()],
            is_searchable: true,
            updated_at: now - Duration::days(21),
        },
        CandidateRecord {
            id: 5,
            full_name: "Sneha Kulkarni".to_string(),
            email: "sneha.kulkarni@example.com".to_string(),
            location: "Bengaluru".to_string(),
            summary: "Fresh graduate; coursework projects in Java and Spring Boot.".to_string(),
            skills: vec![skill(6, "Java"), skill(7, "Spring Boot")],
            total_experience_years: 0,
            total_experience_months: 0,
            expected_salary: Some(8),
            notice_period_days: Some(0),
            work_status: WorkStatus::Fresher,
            availability_to_join: Availability::FifteenDaysOrLess,
            employments: vec![],
            educations: vec![education("GRADUATE", "PES University", 2025)],
            education_levels: vec!["GRADUATE".to_string()],
            is_searchable: true,
            updated_at: now - Duration::days(1),
        },
        CandidateRecord {
            id: 6,
            full_name: "Vikram Singh".to_string(),
            email: "vikram.singh@example.com".to_string(),
            location: "Gurugram".to_string(),
            summary: "ML engineer; recommendation systems and model serving.".to_string(),
            skills: vec![
                skill(13, "Machine Learning"),
                skill(1, "Python"),
                skill(11, "Kubernetes"),
            ],
            total_experience_years: 6,
            total_experience_months: 3,
            expected_salary: Some(45),
            notice_period_days: Some(30),
            work_status: WorkStatus::Experienced,
            availability_to_join: Availability::OneMonth,
            employments: vec![employment("ML Engineer", "Crestview", (2019, 6), None)],
            educations: vec![education("POST_GRADUATE", "IIIT Hyderabad", 2018)],
            education_levels: vec!["POST_GRADUATE".to_string()],
            is_searchable: true,
            updated_at: now - Duration::days(40),
        },
        // Sparse profile: below the 60% completion threshold, never searchable
        CandidateRecord {
            id: 7,
            full_name: "Kiran Rao".to_string(),
            email: "kiran.rao@example.com".to_string(),
            location: String::new(),
            summary: String::new(),
            skills: vec![skill(5, "Go")],
            total_experience_years: 2,
            total_experience_months: 0,
            expected_salary: None,
            notice_period_days: None,
            work_status: WorkStatus::Experienced,
            availability_to_join: Availability::MoreThanThreeMonths,
            employments: vec![],
            educations: vec![],
            education_levels: vec![],
            is_searchable: true,
            updated_at: now - Duration::days(3),
        },
        CandidateRecord {
            id: 8,
            full_name: "Divya Menon".to_string(),
            email: "divya.menon@example.com".to_string(),
            location: "Hyderabad".to_string(),
            summary: "Full-stack developer; Node.js APIs with React frontends.".to_string(),
            skills: vec![skill(10, "Node.js"), skill(3, "React"), skill(9, "TypeScript")],
            total_experience_years: 2,
            total_experience_months: 10,
            expected_salary: Some(14),
            notice_period_days: Some(15),
            work_status: WorkStatus::Experienced,
            availability_to_join: Availability::FifteenDaysOrLess,
            employments: vec![employment("Software Developer", "Brightcove Labs", (2023, 1), None)],
            educations: vec![education("GRADUATE", "Osmania University", 2022)],
            education_levels: vec!["GRADUATE".to_string()],
            is_searchable: true,
            updated_at: now - Duration::days(12),
        },
    ]
}

fn seed_organizations() -> Vec<Organization> {
    let now = Utc::now();
    vec![
        Organization {
            id: 1,
            name: "Acme Talent Partners".to_string(),
            contact_email: "ops@acmetalent.example.com".to_string(),
            employer_count: 2,
            created_at: now - Duration::days(120),
            is_active: true,
        },
        Organization {
            id: 2,
            name: "Northstar Recruiting".to_string(),
            contact_email: "admin@northstar.example.com".to_string(),
            employer_count: 1,
            created_at: now - Duration::days(60),
            is_active: true,
        },
    ]
}

fn seed_employers() -> Vec<EmployerAccount> {
    vec![
        EmployerAccount {
            id: 1,
            organization_id: 1,
            full_name: "Priya Desai".to_string(),
            email: "priya@acmetalent.example.com".to_string(),
            is_active: true,
        },
        EmployerAccount {
            id: 2,
            organization_id: 1,
            full_name: "Rohit Bhat".to_string(),
            email: "rohit@acmetalent.example.com".to_string(),
            is_active: true,
        },
        EmployerAccount {
            id: 3,
            organization_id: 2,
            full_name: "Lakshmi Pillai".to_string(),
            email: "lakshmi@northstar.example.com".to_string(),
            is_active: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_months_calc() {
        let record = seed_candidates().remove(0);
        assert_eq!(record.total_experience_months_calc(), 66);
        assert_eq!(record.total_experience(), 5.5);
    }

    #[test]
    fn test_sparse_profile_falls_below_completion_threshold() {
        let sparse = seed_candidates()
            .into_iter()
            .find(|c| c.id == 7)
            .expect("seed has candidate 7");
        assert!(sparse.profile_completion_percent() < 60);
    }

    #[test]
    fn test_complete_profile_clears_completion_threshold() {
        let complete = seed_candidates()
            .into_iter()
            .find(|c| c.id == 1)
            .expect("seed has candidate 1");
        assert_eq!(complete.profile_completion_percent(), 100);
    }

    #[test]
    fn test_skill_seed_ids_are_unique() {
        let skills = seed_skills();
        let mut ids: Vec<u64> = skills.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), skills.len());
    }
}
