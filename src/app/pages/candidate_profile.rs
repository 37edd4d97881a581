//! Employer-facing candidate profile page

use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, LoadingText};
use crate::domain::models::CandidateDetail;
use crate::search::{format_date, format_date_range, group_inr};
use crate::server_fns::get_candidate;

#[component]
pub fn CandidateProfile(candidate_id: u64) -> Element {
    let profile = use_server_future(move || async move { get_candidate(candidate_id).await })?;

    let content = match &*profile.read() {
        None => rsx! { LoadingText { message: "Loading profile..." } },
        Some(Ok(Some(detail))) => rsx! { ProfileBody { detail: detail.clone() } },
        Some(Ok(None)) => rsx! {
            EmptyState {
                icon: "🕳",
                title: "Candidate not found",
                description: "The profile may have been removed or made private.",
            }
        },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.to_string() } },
    };

    rsx! {
        div { class: "p-profile", {content} }
    }
}

/// Full profile rendering, shared with the candidate's own dashboard.
#[component]
pub fn ProfileBody(detail: CandidateDetail) -> Element {
    let experience = format!("{:.1} years", detail.total_experience);
    let salary = detail
        .expected_salary
        .map(|amount| format!("₹ {}", group_inr(amount as u64)))
        .unwrap_or_else(|| "Not disclosed".to_string());
    let notice = detail
        .notice_period_days
        .map(|days| format!("{days} days"))
        .unwrap_or_else(|| "Not specified".to_string());

    rsx! {
        header { class: "p-profile__header",
            h1 { "{detail.full_name}" }
            p { class: "p-profile__meta",
                "{detail.location} · {experience} · Updated "
                {format_date(&detail.last_updated)}
            }
        }

        section { class: "p-profile__facts",
            FactRow { label: "Email", value: detail.email.clone() }
            FactRow { label: "Expected salary", value: salary }
            FactRow { label: "Notice period", value: notice }
            FactRow { label: "Work status", value: detail.work_status.clone() }
            FactRow { label: "Availability", value: detail.availability_to_join.clone() }
        }

        if !detail.summary.is_empty() {
            section { class: "p-profile__section",
                h2 { "About" }
                p { "{detail.summary}" }
            }
        }

        if !detail.skills.is_empty() {
            section { class: "p-profile__section",
                h2 { "Skills" }
                div { class: "p-profile__skills",
                    for skill in detail.skills.iter() {
                        span { class: "c-skill-chip", "{skill}" }
                    }
                }
            }
        }

        if !detail.employments.is_empty() {
            section { class: "p-profile__section",
                h2 { "Experience" }
                ul { class: "p-profile__timeline",
                    for job in detail.employments.iter() {
                        li {
                            strong { "{job.title}" }
                            span { " at {job.company}" }
                            p { class: "p-profile__dates",
                                {format_date_range(&job.start, job.end.as_ref())}
                            }
                        }
                    }
                }
            }
        }

        if !detail.educations.is_empty() {
            section { class: "p-profile__section",
                h2 { "Education" }
                ul { class: "p-profile__timeline",
                    for education in detail.educations.iter() {
                        li {
                            strong { "{education.degree}" }
                            span { ", {education.institution} ({education.year})" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FactRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "p-profile__fact",
            span { class: "p-profile__fact-label", "{label}" }
            span { class: "p-profile__fact-value", "{value}" }
        }
    }
}
