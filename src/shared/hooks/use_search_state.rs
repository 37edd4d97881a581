use dioxus::prelude::*;

use crate::domain::models::{FilterDraft, SelectedSkill};
use crate::search::{
    CandidateQuery, SearchHistory, SearchHistoryEntry, SearchState, SubmitOutcome,
};
use crate::shared::errors::Result;

/// Search console state hook
///
/// A thin signal wrapper over [`SearchState`]; every transition delegates to
/// the framework-free store so the tested logic is the logic that runs. The
/// applied query only advances through [`SearchPanelState::submit`], so the
/// fetch layer can key off `applied()` alone.
#[derive(Clone, Copy)]
pub struct SearchPanelState {
    pub state: Signal<SearchState>,
    pub history: Signal<SearchHistory>,
    pub save_name: Signal<String>,
}

impl SearchPanelState {
    pub fn applied(&self) -> CandidateQuery {
        self.state.read().applied.clone()
    }

    pub fn skills(&self) -> Vec<SelectedSkill> {
        self.state.read().skills.clone()
    }

    /// Replace one draft field; everything else is structurally shared.
    pub fn update_draft(&mut self, f: impl FnOnce(&mut FilterDraft)) {
        self.state.write().update_draft(f);
    }

    pub fn add_skill(&mut self, skill: SelectedSkill) {
        self.state.write().add_skill(skill);
    }

    pub fn remove_skill(&mut self, name: &str) {
        self.state.write().remove_skill(name);
    }

    /// The explicit search action. An empty payload resets the applied
    /// query to `Idle` (dropping any displayed results); an applied one is
    /// auto-recorded in the recent history.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut history = self.history.write();
        self.state.write().submit_with_history(&mut history)
    }

    /// Save the current draft under the typed name.
    pub fn save_search(&mut self) -> Result<()> {
        let name = self.save_name.read().clone();
        let (draft, skills) = {
            let state = self.state.read();
            (state.draft.clone(), state.skills.clone())
        };
        self.history.write().save_named(&name, draft, skills)?;
        self.save_name.set(String::new());
        Ok(())
    }

    /// Install a stored snapshot and immediately re-execute it.
    pub fn apply_stored(&mut self, entry: &SearchHistoryEntry) {
        let (draft, skills) = entry.apply();
        self.state.write().replace(draft, skills);
        self.submit();
    }

    /// Reset the draft and drop any displayed results.
    pub fn clear(&mut self) {
        self.state.write().clear();
    }
}

/// Hook to manage the search console state
pub fn use_search_state() -> SearchPanelState {
    let state = use_signal(SearchState::new);
    let history = use_signal(SearchHistory::new);
    let save_name = use_signal(String::new);

    SearchPanelState {
        state,
        history,
        save_name,
    }
}
