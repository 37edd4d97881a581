use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Candidate summary returned by the search endpoint. Server-owned;
/// rendered as-is apart from date formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub id: u64,
    pub full_name: String,
    pub location: String,
    pub total_experience: f32,
    pub skills: Vec<String>,
    pub summary: String,
    pub last_updated: DateTime<Utc>,
}

/// Search endpoint response shape: total count plus one page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub count: usize,
    pub results: Vec<CandidateResult>,
}

impl SearchResponse {
    pub fn empty() -> Self {
        Self {
            count: 0,
            results: Vec::new(),
        }
    }
}

/// Full candidate view for the employer-facing profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDetail {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub total_experience: f32,
    pub expected_salary: Option<u32>,
    pub notice_period_days: Option<u16>,
    pub work_status: String,
    pub availability_to_join: String,
    pub skills: Vec<String>,
    pub employments: Vec<EmploymentEntry>,
    pub educations: Vec<EducationEntry>,
    pub summary: String,
    pub profile_completion_percent: u8,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentEntry {
    pub title: String,
    pub company: String,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: u16,
}
