//! Candidate query engine
//!
//! Mirrors the REST contract: every recognized parameter contributes one
//! predicate, predicates are OR-combined, and a request carrying no
//! recognized parameter short-circuits to an empty response without touching
//! the directory. Unparseable numeric values are ignored rather than
//! rejected.

use chrono::{Duration, Utc};
use serde::Deserialize;

use crate::domain::models::SearchResponse;
use crate::directory::store::{CandidateRecord, CANDIDATES};
use crate::shared::logging;

pub const PAGE_SIZE: usize = 10;
const MIN_COMPLETION_PERCENT: u8 = 60;

/// Raw query parameters as they arrive on the wire. Everything is an
/// optional string; parsing happens per-predicate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub keywords: Option<String>,
    pub location: Option<String>,
    pub exp_min: Option<String>,
    pub exp_max: Option<String>,
    pub salary_min: Option<String>,
    pub salary_max: Option<String>,
    pub notice_period: Option<String>,
    pub work_status: Option<String>,
    pub availability_to_join: Option<String>,
    pub education: Option<String>,
    pub updated_within: Option<String>,
    pub skill_ids: Option<String>,
    pub skills: Option<String>,
    pub page: Option<usize>,
}

impl SearchParams {
    /// Lifts a client-built payload into wire parameters. Only known keys
    /// are honored; anything else is dropped.
    pub fn from_payload(payload: &crate::search::SearchPayload) -> Self {
        let mut params = SearchParams::default();
        for (key, value) in payload.iter() {
            let value = Some(value.to_string());
            match key {
                "keywords" => params.keywords = value,
                "location" => params.location = value,
                "exp_min" => params.exp_min = value,
                "exp_max" => params.exp_max = value,
                "salary_min" => params.salary_min = value,
                "salary_max" => params.salary_max = value,
                "notice_period" => params.notice_period = value,
                "work_status" => params.work_status = value,
                "availability_to_join" => params.availability_to_join = value,
                "education" => params.education = value,
                "updated_within" => params.updated_within = value,
                "skill_ids" => params.skill_ids = value,
                "skills" => params.skills = value,
                _ => {}
            }
        }
        params
    }
}

fn has_value(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false)
}

impl SearchParams {
    /// True when at least one search field (not pagination) is supplied.
    pub fn has_search_inputs(&self) -> bool {
        [
            &self.keywords,
            &self.location,
            &self.exp_min,
            &self.exp_max,
            &self.salary_min,
            &self.salary_max,
            &self.notice_period,
            &self.work_status,
            &self.availability_to_join,
            &self.education,
            &self.updated_within,
            &self.skill_ids,
            &self.skills,
        ]
        .into_iter()
        .any(has_value)
    }

    pub fn param_count(&self) -> usize {
        [
            &self.keywords,
            &self.location,
            &self.exp_min,
            &self.exp_max,
            &self.salary_min,
            &self.salary_max,
            &self.notice_period,
            &self.work_status,
            &self.availability_to_join,
            &self.education,
            &self.updated_within,
            &self.skill_ids,
            &self.skills,
        ]
        .into_iter()
        .filter(|v| has_value(v))
        .count()
    }
}

fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// OR-combined predicate evaluation: a record matches when any supplied
/// parameter matches it.
fn matches(record: &CandidateRecord, params: &SearchParams) -> bool {
    if let Some(keywords) = trimmed(&params.keywords) {
        if contains_ci(&record.full_name, keywords)
            || contains_ci(&record.summary, keywords)
            || record.skills.iter().any(|s| contains_ci(&s.name, keywords))
        {
            return true;
        }
    }
    if let Some(location) = trimmed(&params.location) {
        if contains_ci(&record.location, location) {
            return true;
        }
    }
    if let Some(exp_min) = trimmed(&params.exp_min) {
        if let Ok(years) = exp_min.parse::<f32>() {
            if record.total_experience_months_calc() >= (years * 12.0) as u32 {
                return true;
            }
        }
    }
    if let Some(exp_max) = trimmed(&params.exp_max) {
        if let Ok(years) = exp_max.parse::<f32>() {
            if record.total_experience_months_calc() <= (years * 12.0) as u32 {
                return true;
            }
        }
    }
    if let Some(salary_min) = trimmed(&params.salary_min) {
        if let (Ok(bound), Some(expected)) = (salary_min.parse::<u32>(), record.expected_salary) {
            if expected >= bound {
                return true;
            }
        }
    }
    if let Some(salary_max) = trimmed(&params.salary_max) {
        if let (Ok(bound), Some(expected)) = (salary_max.parse::<u32>(), record.expected_salary) {
            if expected <= bound {
                return true;
            }
        }
    }
    if let Some(notice) = trimmed(&params.notice_period) {
        if let (Ok(bound), Some(days)) = (notice.parse::<u16>(), record.notice_period_days) {
            if days <= bound {
                return true;
            }
        }
    }
    if let Some(work_status) = trimmed(&params.work_status) {
        if record.work_status.wire_code() == work_status {
            return true;
        }
    }
    if let Some(availability) = trimmed(&params.availability_to_join) {
        if record.availability_to_join.wire_code() == availability {
            return true;
        }
    }
    if let Some(education) = trimmed(&params.education) {
        if record.education_levels.iter().any(|level| level == education) {
            return true;
        }
    }
    if let Some(updated_within) = trimmed(&params.updated_within) {
        if let Ok(days) = updated_within.parse::<i64>() {
            if record.updated_at >= Utc::now() - Duration::days(days) {
                return true;
            }
        }
    }
    if let Some(skills) = trimmed(&params.skills) {
        for fragment in skills.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if record.skills.iter().any(|s| contains_ci(&s.name, fragment)) {
                return true;
            }
        }
    }
    if let Some(skill_ids) = trimmed(&params.skill_ids) {
        let ids: Vec<u64> = skill_ids
            .split(',')
            .filter_map(|v| v.trim().parse().ok())
            .collect();
        if record.skills.iter().any(|s| ids.contains(&s.id)) {
            return true;
        }
    }
    false
}

/// Runs a search over an explicit record set. Searchability and the
/// completion threshold are enforced here; results come back newest first.
pub fn execute_on(
    records: impl IntoIterator<Item = CandidateRecord>,
    params: &SearchParams,
) -> SearchResponse {
    if !params.has_search_inputs() {
        return SearchResponse::empty();
    }

    let mut matched: Vec<CandidateRecord> = records
        .into_iter()
        .filter(|record| {
            record.is_searchable
                && record.profile_completion_percent() >= MIN_COMPLETION_PERCENT
                && matches(record, params)
        })
        .collect();
    matched.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let count = matched.len();
    let page = params.page.unwrap_or(1).max(1);
    let results = matched
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .map(|record| record.to_result())
        .collect();

    SearchResponse { count, results }
}

/// Runs a search against the live directory.
pub fn execute(params: &SearchParams) -> SearchResponse {
    if !params.has_search_inputs() {
        logging::log_search_skipped();
        return SearchResponse::empty();
    }
    let response = execute_on(
        CANDIDATES.iter().map(|entry| entry.value().clone()),
        params,
    );
    logging::log_search_executed(
        params.param_count(),
        response.count,
        params.page.unwrap_or(1),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Availability, EducationEntry, Skill, WorkStatus};
    use chrono::Utc;

    fn record(id: u64, name: &str) -> CandidateRecord {
        CandidateRecord {
            id,
            full_name: name.to_string(),
            email: format!("{}@example.com", id),
            location: "Bengaluru".to_string(),
            summary: "Engineer".to_string(),
            skills: vec![Skill {
                id: 1,
                name: "Python".to_string(),
            }],
            total_experience_years: 4,
            total_experience_months: 0,
            expected_salary: Some(20),
            notice_period_days: Some(30),
            work_status: WorkStatus::Experienced,
            availability_to_join: Availability::OneMonth,
            employments: vec![],
            educations: vec![EducationEntry {
                degree: "GRADUATE".to_string(),
                institution: "Test University".to_string(),
                year: 2020,
            }],
            education_levels: vec!["GRADUATE".to_string()],
            is_searchable: true,
            updated_at: Utc::now() - chrono::Duration::days(3),
        }
    }

    fn params_with(f: impl FnOnce(&mut SearchParams)) -> SearchParams {
        let mut params = SearchParams::default();
        f(&mut params);
        params
    }

    #[test]
    fn test_no_inputs_short_circuits() {
        let response = execute_on(vec![record(1, "Ananya")], &SearchParams::default());
        assert_eq!(response.count, 0);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_page_alone_is_not_a_search_input() {
        let params = params_with(|p| p.page = Some(2));
        assert!(!params.has_search_inputs());
        assert_eq!(execute_on(vec![record(1, "Ananya")], &params).count, 0);
    }

    #[test]
    fn test_keyword_matches_name_summary_and_skills() {
        let records = || vec![record(1, "Ananya Sharma")];
        for keyword in ["ananya", "engineer", "python"] {
            let params = params_with(|p| p.keywords = Some(keyword.to_string()));
            assert_eq!(execute_on(records(), &params).count, 1, "keyword {keyword}");
        }
        let params = params_with(|p| p.keywords = Some("haskell".to_string()));
        assert_eq!(execute_on(records(), &params).count, 0);
    }

    #[test]
    fn test_filters_are_or_combined() {
        // Location misses but keyword hits, so the record matches.
        let params = params_with(|p| {
            p.keywords = Some("python".to_string());
            p.location = Some("Mumbai".to_string());
        });
        assert_eq!(execute_on(vec![record(1, "Ananya")], &params).count, 1);
    }

    #[test]
    fn test_experience_bounds_use_months() {
        let params = params_with(|p| p.exp_min = Some("4".to_string()));
        assert_eq!(execute_on(vec![record(1, "A")], &params).count, 1);

        let params = params_with(|p| p.exp_min = Some("5".to_string()));
        assert_eq!(execute_on(vec![record(1, "A")], &params).count, 0);

        let params = params_with(|p| p.exp_max = Some("4".to_string()));
        assert_eq!(execute_on(vec![record(1, "A")], &params).count, 1);
    }

    #[test]
    fn test_unparseable_numbers_are_ignored() {
        let params = params_with(|p| p.exp_min = Some("lots".to_string()));
        assert!(params.has_search_inputs());
        assert_eq!(execute_on(vec![record(1, "A")], &params).count, 0);
    }

    #[test]
    fn test_skill_ids_membership() {
        let params = params_with(|p| p.skill_ids = Some("7,1".to_string()));
        assert_eq!(execute_on(vec![record(1, "A")], &params).count, 1);

        let params = params_with(|p| p.skill_ids = Some("7,9".to_string()));
        assert_eq!(execute_on(vec![record(1, "A")], &params).count, 0);
    }

    #[test]
    fn test_custom_skill_fragments_match_by_name() {
        let params = params_with(|p| p.skills = Some("pyth, gizmo".to_string()));
        assert_eq!(execute_on(vec![record(1, "A")], &params).count, 1);
    }

    #[test]
    fn test_notice_period_is_upper_bound() {
        let params = params_with(|p| p.notice_period = Some("30".to_string()));
        assert_eq!(execute_on(vec![record(1, "A")], &params).count, 1);

        let params = params_with(|p| p.notice_period = Some("15".to_string()));
        assert_eq!(execute_on(vec![record(1, "A")], &params).count, 0);
    }

    #[test]
    fn test_updated_within_days() {
        let params = params_with(|p| p.updated_within = Some("7".to_string()));
        assert_eq!(execute_on(vec![record(1, "A")], &params).count, 1);

        let params = params_with(|p| p.updated_within = Some("1".to_string()));
        assert_eq!(execute_on(vec![record(1, "A")], &params).count, 0);
    }

    #[test]
    fn test_incomplete_profiles_are_hidden() {
        let mut sparse = record(1, "Sparse");
        sparse.summary = String::new();
        sparse.educations.clear();
        sparse.skills.clear();
        let params = params_with(|p| p.keywords = Some("sparse".to_string()));
        assert_eq!(execute_on(vec![sparse], &params).count, 0);
    }

    #[test]
    fn test_pagination_caps_results_but_not_count() {
        let records: Vec<_> = (0..25).map(|i| record(i, "Ananya")).collect();
        let params = params_with(|p| p.keywords = Some("ananya".to_string()));
        let first = execute_on(records.clone(), &params);
        assert_eq!(first.count, 25);
        assert_eq!(first.results.len(), PAGE_SIZE);

        let params = params_with(|p| {
            p.keywords = Some("ananya".to_string());
            p.page = Some(3);
        });
        let third = execute_on(records, &params);
        assert_eq!(third.count, 25);
        assert_eq!(third.results.len(), 5);
    }

    #[test]
    fn test_from_payload_maps_known_keys() {
        let draft = crate::domain::models::FilterDraft {
            keywords: "python".to_string(),
            exp_min: Some(3),
            ..Default::default()
        };
        let payload = crate::search::build_search_payload(&draft, &[]);
        let params = SearchParams::from_payload(&payload);
        assert_eq!(params.keywords.as_deref(), Some("python"));
        assert_eq!(params.exp_min.as_deref(), Some("3"));
        assert!(params.location.is_none());
    }

    #[test]
    fn test_results_are_newest_first() {
        let mut older = record(1, "Ananya");
        older.updated_at = Utc::now() - chrono::Duration::days(10);
        let newer = record(2, "Ananya");
        let params = params_with(|p| p.keywords = Some("ananya".to_string()));
        let response = execute_on(vec![older, newer], &params);
        assert_eq!(response.results[0].id, 2);
    }
}
