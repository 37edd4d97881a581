//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::domain::models::{
    CandidateDetail, EmployerAccount, Organization, SearchResponse, Skill,
};
use crate::search::SearchPayload;

/// Candidate id backing the demo candidate portal until real auth lands.
const DEMO_CANDIDATE_ID: u64 = 1;

/// Execute a candidate search for an applied payload.
///
/// The client only calls this with a non-empty payload (the query gate
/// suppresses empty ones); the server still short-circuits parameterless
/// requests to an empty response.
#[server]
pub async fn search_candidates(payload: SearchPayload) -> Result<SearchResponse, ServerFnError> {
    use crate::directory::{self, SearchParams};

    let params = SearchParams::from_payload(&payload);
    Ok(directory::execute(&params))
}

/// Canonical skill suggestions for the skill picker.
#[server]
pub async fn suggest_skills(fragment: String) -> Result<Vec<Skill>, ServerFnError> {
    use crate::handlers::skills;
    use crate::shared::logging;

    let suggestions = skills::suggest_skills(&fragment);
    logging::log_skill_suggest(&fragment, suggestions.len());
    Ok(suggestions)
}

/// Full candidate profile for the employer-facing detail page.
#[server]
pub async fn get_candidate(candidate_id: u64) -> Result<Option<CandidateDetail>, ServerFnError> {
    use crate::directory::CANDIDATES;
    use crate::shared::logging;

    let detail = CANDIDATES
        .get(&candidate_id)
        .map(|record| record.to_detail());
    logging::log_candidate_lookup(candidate_id, detail.is_some());
    Ok(detail)
}

/// The signed-in candidate's own profile (demo identity for now).
#[server]
pub async fn get_my_profile() -> Result<Option<CandidateDetail>, ServerFnError> {
    get_candidate(DEMO_CANDIDATE_ID).await
}

/// Organizations for the master-admin portal, newest first.
#[server]
pub async fn get_organizations() -> Result<Vec<Organization>, ServerFnError> {
    use crate::directory::ORGANIZATIONS;

    let mut orgs: Vec<Organization> = ORGANIZATIONS
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    orgs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(orgs)
}

/// Create a client organization from the master-admin portal.
#[server]
pub async fn create_organization(
    name: String,
    contact_email: String,
) -> Result<Organization, ServerFnError> {
    crate::handlers::admin::create_organization(&name, &contact_email)
        .map_err(ServerFnError::new)
}

/// Employer accounts across all organizations.
#[server]
pub async fn get_employers() -> Result<Vec<EmployerAccount>, ServerFnError> {
    Ok(crate::handlers::admin::list_employer_accounts())
}
