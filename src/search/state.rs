//! Filter state store and query gate
//!
//! Holds the draft filters and selected skills independently of the fetch
//! lifecycle, and decides on each explicit search action whether a fetch
//! should happen at all. The applied query is a sum type, so "no search yet"
//! is a distinct state rather than an empty parameter object.

use serde::{Deserialize, Serialize};

use crate::domain::models::{dedupe_skills, FilterDraft, SelectedSkill};
use crate::search::history::SearchHistory;
use crate::search::payload::{build_search_payload, SearchPayload};

/// The query the data-fetching layer keys off.
///
/// `Idle` means no search has been applied and zero network calls may be
/// made; `Active` carries the last payload that was actually submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CandidateQuery {
    #[default]
    Idle,
    Active(SearchPayload),
}

impl CandidateQuery {
    pub fn payload(&self) -> Option<&SearchPayload> {
        match self {
            CandidateQuery::Idle => None,
            CandidateQuery::Active(payload) => Some(payload),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CandidateQuery::Active(_))
    }
}

/// Outcome of an explicit search action.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The payload normalized to nothing; no fetch happens.
    Skipped,
    /// The payload was applied and the fetch should run.
    Applied(SearchPayload),
}

/// Draft filters + selected skills + the last applied query.
///
/// All mutations are synchronous; draft edits never advance the applied
/// query. Only [`SearchState::submit`] does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub draft: FilterDraft,
    pub skills: Vec<SelectedSkill>,
    pub applied: CandidateQuery,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one draft via the provided closure; the rest of the state
    /// is untouched and no fetch is triggered.
    pub fn update_draft(&mut self, f: impl FnOnce(&mut FilterDraft)) {
        f(&mut self.draft);
    }

    /// Adds a skill unless its normalized name is already selected.
    pub fn add_skill(&mut self, skill: SelectedSkill) {
        let mut next = self.skills.clone();
        next.push(skill);
        self.skills = dedupe_skills(next);
    }

    pub fn remove_skill(&mut self, name: &str) {
        let key = crate::domain::models::normalize_skill(name);
        self.skills
            .retain(|s| crate::domain::models::normalize_skill(s.name()) != key);
    }

    /// Bulk replace, used when applying a recent or saved search.
    pub fn replace(&mut self, draft: FilterDraft, skills: Vec<SelectedSkill>) {
        self.draft = draft;
        self.skills = dedupe_skills(skills);
    }

    /// Clears the draft back to empty. Also resets the applied query to
    /// `Idle`, so stale results disappear (chosen policy; the alternative
    /// of leaving results visible is deliberately not implemented).
    pub fn clear(&mut self) {
        self.draft = FilterDraft::default();
        self.skills.clear();
        self.applied = CandidateQuery::Idle;
    }

    /// The explicit search action. Builds the payload; an empty payload
    /// resets the applied query to `Idle` and suppresses the fetch.
    pub fn submit(&mut self) -> SubmitOutcome {
        let payload = build_search_payload(&self.draft, &self.skills);
        if payload.is_empty() {
            self.applied = CandidateQuery::Idle;
            return SubmitOutcome::Skipped;
        }
        self.applied = CandidateQuery::Active(payload.clone());
        SubmitOutcome::Applied(payload)
    }

    /// [`SearchState::submit`] plus the history side effect: an applied
    /// search is auto-recorded as a recent entry, a skipped one is not.
    pub fn submit_with_history(&mut self, history: &mut SearchHistory) -> SubmitOutcome {
        let outcome = self.submit();
        if let SubmitOutcome::Applied(_) = &outcome {
            history.record_recent(self.draft.clone(), self.skills.clone());
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NoticePeriod;

    fn canonical(id: u64, name: &str) -> SelectedSkill {
        SelectedSkill::Canonical {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = SearchState::new();
        assert_eq!(state.applied, CandidateQuery::Idle);
        assert!(state.applied.payload().is_none());
    }

    #[test]
    fn test_submit_with_empty_draft_stays_idle() {
        let mut state = SearchState::new();
        let outcome = state.submit();
        assert_eq!(outcome, SubmitOutcome::Skipped);
        assert_eq!(state.applied, CandidateQuery::Idle);
    }

    #[test]
    fn test_submit_applies_payload() {
        let mut state = SearchState::new();
        state.update_draft(|d| d.keywords = "python".to_string());
        let outcome = state.submit();

        let SubmitOutcome::Applied(payload) = outcome else {
            panic!("expected an applied payload");
        };
        assert_eq!(payload.get("keywords"), Some("python"));
        assert_eq!(state.applied.payload(), Some(&payload));
    }

    #[test]
    fn test_draft_edits_do_not_advance_applied() {
        let mut state = SearchState::new();
        state.update_draft(|d| d.keywords = "python".to_string());
        state.submit();
        state.update_draft(|d| d.keywords = "golang".to_string());

        let applied = state.applied.payload().expect("applied payload");
        assert_eq!(applied.get("keywords"), Some("python"));
    }

    #[test]
    fn test_clearing_to_empty_then_submitting_resets_applied() {
        let mut state = SearchState::new();
        state.update_draft(|d| d.keywords = "python".to_string());
        state.submit();
        assert!(state.applied.is_active());

        state.update_draft(|d| d.keywords = String::new());
        assert_eq!(state.submit(), SubmitOutcome::Skipped);
        assert_eq!(state.applied, CandidateQuery::Idle);
    }

    #[test]
    fn test_clear_resets_draft_skills_and_applied() {
        let mut state = SearchState::new();
        state.update_draft(|d| d.notice_period = Some(NoticePeriod::FifteenDays));
        state.add_skill(canonical(7, "React"));
        state.submit();

        state.clear();
        assert!(state.draft.is_empty());
        assert!(state.skills.is_empty());
        assert_eq!(state.applied, CandidateQuery::Idle);
    }

    #[test]
    fn test_add_skill_rejects_duplicate_names() {
        let mut state = SearchState::new();
        state.add_skill(canonical(7, "React"));
        state.add_skill(SelectedSkill::Custom {
            name: "  react ".to_string(),
        });
        assert_eq!(state.skills.len(), 1);
    }

    #[test]
    fn test_applied_submit_records_a_recent_entry() {
        let mut state = SearchState::new();
        let mut history = SearchHistory::new();
        state.update_draft(|d| d.keywords = "python".to_string());

        let outcome = state.submit_with_history(&mut history);
        assert!(matches!(outcome, SubmitOutcome::Applied(_)));
        assert_eq!(history.recent.len(), 1);
        assert_eq!(history.recent[0].draft.keywords, "python");
    }

    #[test]
    fn test_skipped_submit_records_nothing_and_resets_applied() {
        let mut state = SearchState::new();
        let mut history = SearchHistory::new();
        state.update_draft(|d| d.keywords = "python".to_string());
        state.submit_with_history(&mut history);

        // Emptying the draft and searching again drops the applied query
        // along with the on-screen results; no new history entry appears.
        state.update_draft(|d| d.keywords = String::new());
        let outcome = state.submit_with_history(&mut history);
        assert_eq!(outcome, SubmitOutcome::Skipped);
        assert_eq!(state.applied, CandidateQuery::Idle);
        assert_eq!(history.recent.len(), 1);
    }

    #[test]
    fn test_replace_installs_snapshot() {
        let mut state = SearchState::new();
        let draft = FilterDraft {
            location: "Bengaluru".to_string(),
            ..Default::default()
        };
        state.replace(draft.clone(), vec![canonical(7, "React")]);
        assert_eq!(state.draft, draft);

        let SubmitOutcome::Applied(payload) = state.submit() else {
            panic!("expected an applied payload");
        };
        assert_eq!(payload.get("location"), Some("Bengaluru"));
        assert_eq!(payload.get("skill_ids"), Some("7"));
    }
}
