//! Candidate results renderer
//!
//! Three mutually exclusive states keyed off the applied query: prompt
//! (no search yet), empty (search ran, nothing matched), and the result
//! list. A loading query preempts all three.

use dioxus::prelude::*;

use crate::app::components::common::{EmptyState, LoadingText};
use crate::domain::models::{CandidateResult, SearchResponse};
use crate::search::formatters::format_date;

#[component]
pub fn ResultsList(
    /// Whether a search has been applied at all
    query_active: bool,
    /// True while the search request is in flight
    is_loading: bool,
    /// Response for the applied query; absent on transport failure
    response: Option<SearchResponse>,
    on_view_profile: EventHandler<u64>,
) -> Element {
    if is_loading {
        return rsx! {
            LoadingText { message: "Searching candidates..." }
        };
    }

    if !query_active {
        return rsx! {
            EmptyState {
                icon: "🔍",
                title: "Results will appear here",
                description: "Set some filters and run a search to see matching candidates.",
            }
        };
    }

    // A missing response (failed request) renders like zero results.
    let response = response.unwrap_or_else(SearchResponse::empty);
    if response.results.is_empty() {
        return rsx! {
            EmptyState {
                icon: "🪹",
                title: "No candidates match these filters yet",
                description: "Loosen a filter or two and search again.",
            }
        };
    }

    rsx! {
        div { class: "c-results",
            p { class: "c-results__count", "{response.count} candidates found" }
            for candidate in response.results.iter() {
                ResultCard {
                    candidate: candidate.clone(),
                    on_view_profile: on_view_profile,
                }
            }
        }
    }
}

#[component]
fn ResultCard(candidate: CandidateResult, on_view_profile: EventHandler<u64>) -> Element {
    let candidate_id = candidate.id;
    let location = if candidate.location.is_empty() {
        "Location not provided".to_string()
    } else {
        candidate.location.clone()
    };
    let summary = if candidate.summary.is_empty() {
        "No summary yet.".to_string()
    } else {
        candidate.summary.clone()
    };
    let updated = format_date(&candidate.last_updated);

    rsx! {
        div { class: "c-result-card",
            div { class: "c-result-card__header",
                div {
                    h3 { class: "c-result-card__name", "{candidate.full_name}" }
                    p { class: "c-result-card__location", "{location}" }
                }
                span { class: "c-result-card__badge", "Exp: {candidate.total_experience}y" }
            }
            div { class: "c-result-card__skills",
                for skill in candidate.skills.iter().take(6) {
                    span { class: "c-result-card__skill", "{skill}" }
                }
            }
            p { class: "c-result-card__summary", "{summary}" }
            div { class: "c-result-card__footer",
                span { class: "c-result-card__updated", "Last updated {updated}" }
                button {
                    class: "c-button c-button--ghost",
                    onclick: move |_| on_view_profile.call(candidate_id),
                    "View Profile"
                }
            }
        }
    }
}
