//! Candidate portal dashboard
//!
//! Shows the signed-in candidate's own profile and how complete it is.
//! Profiles under the search threshold get a visibility warning, since the
//! directory hides them from employer results.

use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, LoadingText};
use crate::app::pages::candidate_profile::ProfileBody;
use crate::server_fns::get_my_profile;

/// Completion below this keeps a profile out of employer search.
const SEARCHABLE_COMPLETION_PERCENT: u8 = 60;

#[component]
pub fn CandidateDashboard() -> Element {
    let profile = use_server_future(|| async { get_my_profile().await })?;

    let content = match &*profile.read() {
        None => rsx! { LoadingText { message: "Loading your profile..." } },
        Some(Ok(Some(detail))) => rsx! {
            CompletionCard { percent: detail.profile_completion_percent }
            ProfileBody { detail: detail.clone() }
        },
        Some(Ok(None)) => rsx! {
            EmptyState {
                icon: "📝",
                title: "No profile yet",
                description: "Create your profile to start appearing in employer searches.",
            }
        },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.to_string() } },
    };

    rsx! {
        div { class: "p-dashboard",
            h1 { class: "p-dashboard__title", "My Profile" }
            {content}
        }
    }
}

#[component]
fn CompletionCard(percent: u8) -> Element {
    let searchable = percent >= SEARCHABLE_COMPLETION_PERCENT;

    rsx! {
        div { class: "p-dashboard__completion",
            div { class: "p-dashboard__completion-header",
                span { "Profile completion" }
                strong { "{percent}%" }
            }
            div { class: "p-dashboard__completion-track",
                div {
                    class: "p-dashboard__completion-bar",
                    style: "width: {percent}%;",
                }
            }
            if searchable {
                p { class: "p-dashboard__completion-note", "Your profile is visible to employers." }
            } else {
                p { class: "p-dashboard__completion-note p-dashboard__completion-note--warning",
                    "Profiles below {SEARCHABLE_COMPLETION_PERCENT}% completion are hidden from employer search. Add your summary, skills, work history and education to become visible."
                }
            }
        }
    }
}
