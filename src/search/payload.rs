//! Search payload construction
//!
//! Converts an in-progress [`FilterDraft`] plus the selected skill set into
//! the normalized query object the candidate search endpoint understands.
//! Empty fields never reach the wire; skills are flattened into an id list
//! (canonical) and a free-text list (custom).

use serde::{Deserialize, Serialize};

use crate::domain::models::{FilterDraft, SelectedSkill};

/// Normalized, immutable snapshot of search criteria at submit time.
///
/// Keys keep insertion order so the emitted query string is stable. Only
/// non-empty values are held; an empty payload means "nothing to search for"
/// and must never be sent to the network layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPayload {
    params: Vec<(String, String)>,
}

impl SearchPayload {
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Query-string form, percent-encoded, keys in insertion order.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn push(&mut self, key: &str, value: String) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        self.params.push((key.to_string(), trimmed.to_string()));
    }
}

/// Builds the server-ready payload from draft filters and selected skills.
///
/// Pure and idempotent: identical inputs always produce an equal payload,
/// and the inputs are never mutated. Canonical skills become `skill_ids`
/// (comma-joined, insertion order preserved); custom skills become `skills`.
pub fn build_search_payload(draft: &FilterDraft, skills: &[SelectedSkill]) -> SearchPayload {
    let mut payload = SearchPayload::default();

    payload.push("keywords", draft.keywords.clone());
    payload.push("location", draft.location.clone());
    if let Some(v) = draft.exp_min {
        payload.push("exp_min", v.to_string());
    }
    if let Some(v) = draft.exp_max {
        payload.push("exp_max", v.to_string());
    }
    if let Some(v) = draft.salary_min {
        payload.push("salary_min", v.to_string());
    }
    if let Some(v) = draft.salary_max {
        payload.push("salary_max", v.to_string());
    }
    if let Some(v) = draft.notice_period {
        payload.push("notice_period", v.days().to_string());
    }
    if let Some(v) = draft.work_status {
        payload.push("work_status", v.wire_code().to_string());
    }
    if let Some(v) = draft.availability_to_join {
        payload.push("availability_to_join", v.wire_code().to_string());
    }
    if let Some(v) = draft.education {
        payload.push("education", v.wire_code().to_string());
    }
    if let Some(v) = draft.updated_within {
        payload.push("updated_within", v.to_string());
    }

    let skill_ids = skills
        .iter()
        .filter_map(|skill| skill.id())
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let custom_skills = skills
        .iter()
        .filter(|skill| skill.id().is_none())
        .map(|skill| skill.name().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    payload.push("skill_ids", skill_ids);
    payload.push("skills", custom_skills);

    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{NoticePeriod, WorkStatus};

    fn canonical(id: u64, name: &str) -> SelectedSkill {
        SelectedSkill::Canonical {
            id,
            name: name.to_string(),
        }
    }

    fn custom(name: &str) -> SelectedSkill {
        SelectedSkill::Custom {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_empty_inputs_build_empty_payload() {
        let payload = build_search_payload(&FilterDraft::default(), &[]);
        assert!(payload.is_empty());
        assert_eq!(payload.to_query_string(), "");
    }

    #[test]
    fn test_keywords_only_payload() {
        let draft = FilterDraft {
            keywords: "python".to_string(),
            ..Default::default()
        };
        let payload = build_search_payload(&draft, &[]);
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("keywords"), Some("python"));
    }

    #[test]
    fn test_whitespace_values_are_dropped() {
        let draft = FilterDraft {
            keywords: "   ".to_string(),
            location: "\t".to_string(),
            ..Default::default()
        };
        assert!(build_search_payload(&draft, &[]).is_empty());
    }

    #[test]
    fn test_skill_partition() {
        let skills = vec![
            canonical(7, "React"),
            custom("Gizmo Query Language"),
            canonical(12, "Rust"),
        ];
        let payload = build_search_payload(&FilterDraft::default(), &skills);
        assert_eq!(payload.get("skill_ids"), Some("7,12"));
        assert_eq!(payload.get("skills"), Some("Gizmo Query Language"));
    }

    #[test]
    fn test_skill_id_order_preserved() {
        let skills = vec![canonical(30, "C"), canonical(2, "B"), canonical(19, "A")];
        let payload = build_search_payload(&FilterDraft::default(), &skills);
        assert_eq!(payload.get("skill_ids"), Some("30,2,19"));
    }

    #[test]
    fn test_enum_fields_use_wire_codes() {
        let draft = FilterDraft {
            notice_period: Some(NoticePeriod::OneMonth),
            work_status: Some(WorkStatus::Experienced),
            exp_min: Some(2),
            salary_max: Some(24),
            ..Default::default()
        };
        let payload = build_search_payload(&draft, &[]);
        assert_eq!(payload.get("notice_period"), Some("30"));
        assert_eq!(payload.get("work_status"), Some("EXPERIENCED"));
        assert_eq!(payload.get("exp_min"), Some("2"));
        assert_eq!(payload.get("salary_max"), Some("24"));
    }

    #[test]
    fn test_build_is_pure_and_idempotent() {
        let draft = FilterDraft {
            keywords: "backend".to_string(),
            exp_min: Some(3),
            ..Default::default()
        };
        let skills = vec![canonical(4, "Go"), custom("Terraform")];
        let draft_before = draft.clone();
        let skills_before = skills.clone();

        let first = build_search_payload(&draft, &skills);
        let second = build_search_payload(&draft, &skills);

        assert_eq!(first, second);
        assert_eq!(draft, draft_before);
        assert_eq!(skills, skills_before);
    }

    #[test]
    fn test_query_string_is_percent_encoded() {
        let draft = FilterDraft {
            keywords: "data engineer".to_string(),
            ..Default::default()
        };
        let payload = build_search_payload(&draft, &[]);
        assert_eq!(payload.to_query_string(), "keywords=data%20engineer");
    }
}
