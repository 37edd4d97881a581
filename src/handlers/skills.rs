use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::directory::SKILLS;
use crate::domain::models::{normalize_skill, Skill};
use crate::shared::logging;

const MAX_SUGGESTIONS: usize = 8;

#[derive(Debug, Deserialize)]
pub struct SkillSuggestQuery {
    #[serde(default)]
    pub q: String,
}

/// Canonical skills whose normalized name contains the typed fragment,
/// prefix matches first. Empty fragment yields nothing.
pub fn suggest_skills(fragment: &str) -> Vec<Skill> {
    let needle = normalize_skill(fragment);
    if needle.is_empty() {
        return Vec::new();
    }
    let mut matches: Vec<&Skill> = SKILLS
        .iter()
        .filter(|skill| normalize_skill(&skill.name).contains(&needle))
        .collect();
    matches.sort_by_key(|skill| !normalize_skill(&skill.name).starts_with(&needle));
    matches.into_iter().take(MAX_SUGGESTIONS).cloned().collect()
}

/// GET /api/skills?q=...
pub async fn suggest_skills_handler(Query(params): Query<SkillSuggestQuery>) -> Json<Vec<Skill>> {
    let suggestions = suggest_skills(&params.q);
    logging::log_skill_suggest(&params.q, suggestions.len());
    Json(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fragment_suggests_nothing() {
        assert!(suggest_skills("").is_empty());
        assert!(suggest_skills("   ").is_empty());
    }

    #[test]
    fn test_prefix_matches_rank_first() {
        let suggestions = suggest_skills("java");
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0].name, "Java");
    }

    #[test]
    fn test_contains_match_is_case_insensitive() {
        let suggestions = suggest_skills("SCRIPT");
        assert!(suggestions.iter().any(|s| s.name == "TypeScript"));
    }

    #[test]
    fn test_suggestions_are_capped() {
        // Single letters match broadly; the cap still applies.
        assert!(suggest_skills("a").len() <= MAX_SUGGESTIONS);
    }
}
