//! Recent and saved search history
//!
//! Process-lifetime only: entries live as long as the session and are never
//! persisted. Recent entries are auto-recorded on every executed search and
//! ring-buffered to the 5 newest; saved entries are user-named, validated,
//! and capped at 20.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::{FilterDraft, SelectedSkill};
use crate::search::payload::build_search_payload;
use crate::shared::errors::{AppError, Result};

pub const MAX_RECENT: usize = 5;
pub const MAX_SAVED: usize = 20;

/// A full draft + skill snapshot captured for one-click reapplication.
/// Entries are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub id: Uuid,
    pub name: String,
    pub draft: FilterDraft,
    pub skills: Vec<SelectedSkill>,
    pub created_at: DateTime<Utc>,
}

impl SearchHistoryEntry {
    fn new(name: String, draft: FilterDraft, skills: Vec<SelectedSkill>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            draft,
            skills,
            created_at: Utc::now(),
        }
    }

    /// Returns the snapshot for the caller to install into the filter state
    /// and immediately re-execute.
    pub fn apply(&self) -> (FilterDraft, Vec<SelectedSkill>) {
        (self.draft.clone(), self.skills.clone())
    }
}

/// Human-readable summary: keywords, skill names, location, joined with a
/// separator. Falls back to a generic label when all three are empty.
pub fn build_search_label(draft: &FilterDraft, skills: &[SelectedSkill]) -> String {
    let mut parts = Vec::new();
    if !draft.keywords.trim().is_empty() {
        parts.push(draft.keywords.trim().to_string());
    }
    if !skills.is_empty() {
        parts.push(
            skills
                .iter()
                .map(|s| s.name().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        );
    }
    if !draft.location.trim().is_empty() {
        parts.push(draft.location.trim().to_string());
    }
    if parts.is_empty() {
        "Quick search".to_string()
    } else {
        parts.join(" · ")
    }
}

/// Recent + saved search lists, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHistory {
    pub recent: Vec<SearchHistoryEntry>,
    pub saved: Vec<SearchHistoryEntry>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends an auto-labeled entry; the oldest entry beyond
    /// [`MAX_RECENT`] is evicted.
    pub fn record_recent(&mut self, draft: FilterDraft, skills: Vec<SelectedSkill>) {
        let label = build_search_label(&draft, &skills);
        self.recent
            .insert(0, SearchHistoryEntry::new(label, draft, skills));
        self.recent.truncate(MAX_RECENT);
    }

    /// Saves under a user-chosen name. Fails if the name is blank or the
    /// snapshot normalizes to an empty payload; a failed save never touches
    /// the list.
    pub fn save_named(
        &mut self,
        name: &str,
        draft: FilterDraft,
        skills: Vec<SelectedSkill>,
    ) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Enter a name to save this search.".to_string(),
            ));
        }
        if build_search_payload(&draft, &skills).is_empty() {
            return Err(AppError::Validation(
                "Add filters before saving a search.".to_string(),
            ));
        }
        self.saved
            .insert(0, SearchHistoryEntry::new(name.to_string(), draft, skills));
        self.saved.truncate(MAX_SAVED);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_keywords(keywords: &str) -> FilterDraft {
        FilterDraft {
            keywords: keywords.to_string(),
            ..Default::default()
        }
    }

    fn custom(name: &str) -> SelectedSkill {
        SelectedSkill::Custom {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_recent_is_bounded_and_newest_first() {
        let mut history = SearchHistory::new();
        for i in 0..6 {
            history.record_recent(draft_with_keywords(&format!("query-{i}")), vec![]);
        }

        assert_eq!(history.recent.len(), MAX_RECENT);
        assert_eq!(history.recent[0].name, "query-5");
        // query-0 was evicted
        assert!(history.recent.iter().all(|e| e.name != "query-0"));
    }

    #[test]
    fn test_save_with_blank_name_fails() {
        let mut history = SearchHistory::new();
        let err = history
            .save_named("   ", draft_with_keywords("python"), vec![])
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(history.saved.is_empty());
    }

    #[test]
    fn test_save_with_empty_snapshot_fails() {
        let mut history = SearchHistory::new();
        let err = history
            .save_named("my search", FilterDraft::default(), vec![])
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(history.saved.is_empty());
    }

    #[test]
    fn test_save_trims_name_and_prepends() {
        let mut history = SearchHistory::new();
        history
            .save_named("  first ", draft_with_keywords("python"), vec![])
            .unwrap();
        history
            .save_named("second", draft_with_keywords("golang"), vec![])
            .unwrap();

        assert_eq!(history.saved.len(), 2);
        assert_eq!(history.saved[0].name, "second");
        assert_eq!(history.saved[1].name, "first");
    }

    #[test]
    fn test_saved_is_bounded() {
        let mut history = SearchHistory::new();
        for i in 0..25 {
            history
                .save_named(&format!("save-{i}"), draft_with_keywords("x"), vec![])
                .unwrap();
        }
        assert_eq!(history.saved.len(), MAX_SAVED);
        assert_eq!(history.saved[0].name, "save-24");
    }

    #[test]
    fn test_label_joins_keywords_skills_location() {
        let draft = FilterDraft {
            keywords: "frontend".to_string(),
            location: "Bengaluru".to_string(),
            ..Default::default()
        };
        let skills = vec![custom("React"), custom("CSS")];
        assert_eq!(
            build_search_label(&draft, &skills),
            "frontend · React, CSS · Bengaluru"
        );
    }

    #[test]
    fn test_label_falls_back_when_empty() {
        assert_eq!(
            build_search_label(&FilterDraft::default(), &[]),
            "Quick search"
        );
    }

    #[test]
    fn test_apply_returns_snapshot() {
        let mut history = SearchHistory::new();
        let draft = FilterDraft {
            location: "Bengaluru".to_string(),
            ..Default::default()
        };
        history
            .save_named("Frontend in Bengaluru", draft.clone(), vec![custom("React")])
            .unwrap();

        let (applied_draft, applied_skills) = history.saved[0].apply();
        assert_eq!(applied_draft, draft);
        assert_eq!(applied_skills, vec![custom("React")]);
    }
}
