//! Structured logging module for Talent Hub
//!
//! Provides consistent, contextual logging across the server side.
//! Uses structured fields so search and admin operations can be traced.

/// Log levels for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    CandidateSearch,
    CandidateLookup,
    SkillSuggest,
    DirectorySeed,
    AdminCrud,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::CandidateSearch => "candidate_search",
            LogOperation::CandidateLookup => "candidate_lookup",
            LogOperation::SkillSuggest => "skill_suggest",
            LogOperation::DirectorySeed => "directory_seed",
            LogOperation::AdminCrud => "admin_crud",
        }
    }
}

/// Log a search that carried no recognized parameters and was short-circuited
pub fn log_search_skipped() {
    tracing::debug!(
        operation = LogOperation::CandidateSearch.as_str(),
        "Search request had no parameters - returning empty response"
    );
}

/// Log an executed candidate search
pub fn log_search_executed(param_count: usize, matched: usize, page: usize) {
    tracing::info!(
        operation = LogOperation::CandidateSearch.as_str(),
        param_count = param_count,
        matched = matched,
        page = page,
        "Candidate search executed"
    );
}

/// Log a candidate detail lookup
pub fn log_candidate_lookup(candidate_id: u64, found: bool) {
    if found {
        tracing::debug!(
            operation = LogOperation::CandidateLookup.as_str(),
            candidate_id = candidate_id,
            "Candidate profile loaded"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::CandidateLookup.as_str(),
            candidate_id = candidate_id,
            "Candidate profile not found"
        );
    }
}

/// Log skill suggestion queries
pub fn log_skill_suggest(fragment: &str, count: usize) {
    tracing::debug!(
        operation = LogOperation::SkillSuggest.as_str(),
        fragment = fragment,
        suggestion_count = count,
        "Skill suggestions computed"
    );
}

/// Log directory seeding at startup
pub fn log_directory_seeded(candidates: usize, skills: usize, organizations: usize) {
    tracing::info!(
        operation = LogOperation::DirectorySeed.as_str(),
        candidate_count = candidates,
        skill_count = skills,
        organization_count = organizations,
        "In-memory directory seeded"
    );
}

/// Log master-admin mutations
pub fn log_admin_mutation(entity: &str, action: &str, id: u64) {
    tracing::info!(
        operation = LogOperation::AdminCrud.as_str(),
        entity = entity,
        action = action,
        id = id,
        "Admin mutation applied"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::CandidateSearch.as_str(), "candidate_search");
        assert_eq!(LogOperation::CandidateLookup.as_str(), "candidate_lookup");
        assert_eq!(LogOperation::SkillSuggest.as_str(), "skill_suggest");
        assert_eq!(LogOperation::DirectorySeed.as_str(), "directory_seed");
        assert_eq!(LogOperation::AdminCrud.as_str(), "admin_crud");
    }
}
