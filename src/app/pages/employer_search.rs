//! Employer candidate search page
//!
//! The page wires the filter form, skill select and history sidebar to the
//! shared search state. Fetches key off the applied query alone: while it is
//! idle nothing is requested, and every submit that produces a payload runs
//! exactly one request. Submitting an empty draft resets the applied query,
//! so stale results never outlive their filters.

use dioxus::prelude::*;

use crate::app::components::{
    ErrorMessage, FilterForm, HistorySidebar, ResultsList, SkillSelect, ToastHost,
};
use crate::app::pages::routes::Route;
use crate::search::{CandidateQuery, SubmitOutcome};
use crate::server_fns::search_candidates;
use crate::shared::hooks::{use_search_state, use_toast};

#[component]
pub fn EmployerSearch() -> Element {
    let mut state = use_search_state();
    let mut toast = use_toast();
    let navigator = use_navigator();

    // Memoized so draft edits (which share the state signal) never restart
    // the fetch; only an actual change of the applied query does.
    let applied = use_memo(move || state.applied());
    let results = use_resource(move || async move {
        match applied() {
            CandidateQuery::Idle => Ok(None),
            CandidateQuery::Active(payload) => search_candidates(payload).await.map(Some),
        }
    });

    let query_active = applied.read().is_active();
    // A restarted resource keeps its previous value while the new request is
    // in flight, so loading must come from the resource state, not from the
    // value's absence.
    let is_loading =
        query_active && matches!(*results.state().read(), UseResourceState::Pending);
    let (response, error) = match &*results.read() {
        Some(Ok(fetched)) => (fetched.clone(), None),
        Some(Err(e)) => (None, Some(e.to_string())),
        None => (None, None),
    };

    rsx! {
        div { class: "p-search",
            ToastHost { current: toast.current }

            aside { class: "p-search__filters",
                SkillSelect {
                    skills: state.skills(),
                    on_add: move |skill| state.add_skill(skill),
                    on_remove: move |name: String| state.remove_skill(&name),
                }
                FilterForm {
                    state: state.state,
                    on_submit: move |_| {
                        // An empty payload still goes through submit so the
                        // applied query resets to Idle and stale results drop.
                        if state.submit() == SubmitOutcome::Skipped {
                            toast.error("Add at least one filter to search.");
                        }
                    },
                    on_clear: move |_| state.clear(),
                }
            }

            section { class: "p-search__results",
                if is_loading {
                    ResultsList {
                        query_active,
                        is_loading: true,
                        response: None,
                        on_view_profile: move |_| {},
                    }
                } else if let Some(message) = error {
                    ErrorMessage { message }
                } else {
                    ResultsList {
                        query_active,
                        is_loading: false,
                        response,
                        on_view_profile: move |candidate_id| {
                            navigator.push(Route::CandidateProfile { candidate_id });
                        },
                    }
                }
            }

            HistorySidebar {
                history: state.history,
                save_name: state.save_name,
                on_apply: move |entry| state.apply_stored(&entry),
                on_save: move |_| {
                    match state.save_search() {
                        Ok(()) => toast.success("Search saved."),
                        Err(e) => toast.error(e.to_string()),
                    }
                },
            }
        }
    }
}
