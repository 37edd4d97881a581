//! Filter form for the candidate search panel
//!
//! Inputs write straight into the shared search state's draft; nothing here triggers
//! a fetch. The search only runs when the user presses the Search button or
//! hits Enter in the keywords field.

use dioxus::prelude::*;

use crate::domain::models::{Availability, EducationLevel, NoticePeriod, WorkStatus};
use crate::search::{experience_options, format_experience, SearchState};

#[component]
pub fn FilterForm(
    mut state: Signal<SearchState>,
    on_submit: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "c-filters",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },

            div { class: "c-filters__field",
                label { "Keywords" }
                input {
                    r#type: "text",
                    placeholder: "Role, skill or company",
                    value: "{state.read().draft.keywords}",
                    oninput: move |evt| state.write().draft.keywords = evt.value(),
                }
            }

            div { class: "c-filters__field",
                label { "Location" }
                input {
                    r#type: "text",
                    placeholder: "City",
                    value: "{state.read().draft.location}",
                    oninput: move |evt| state.write().draft.location = evt.value(),
                }
            }

            div { class: "c-filters__row",
                ExperienceSelect {
                    label: "Min experience",
                    selected: state.read().draft.exp_min,
                    on_change: move |value| state.write().draft.exp_min = value,
                }
                ExperienceSelect {
                    label: "Max experience",
                    selected: state.read().draft.exp_max,
                    on_change: move |value| state.write().draft.exp_max = value,
                }
            }

            div { class: "c-filters__row",
                div { class: "c-filters__field",
                    label { "Min salary (LPA)" }
                    input {
                        r#type: "number",
                        min: "0",
                        value: state.read().draft.salary_min.map(|v| v.to_string()).unwrap_or_default(),
                        oninput: move |evt| state.write().draft.salary_min = evt.value().parse().ok(),
                    }
                }
                div { class: "c-filters__field",
                    label { "Max salary (LPA)" }
                    input {
                        r#type: "number",
                        min: "0",
                        value: state.read().draft.salary_max.map(|v| v.to_string()).unwrap_or_default(),
                        oninput: move |evt| state.write().draft.salary_max = evt.value().parse().ok(),
                    }
                }
            }

            NoticePeriodPills {
                selected: state.read().draft.notice_period,
                on_change: move |value| state.write().draft.notice_period = value,
            }

            div { class: "c-filters__field",
                label { "Work status" }
                select {
                    value: state.read().draft.work_status.map(|s| s.wire_code()).unwrap_or(""),
                    onchange: move |evt| {
                        state.write().draft.work_status = WorkStatus::from_wire(&evt.value());
                    },
                    option { value: "", "Any" }
                    for status in WorkStatus::options() {
                        option { value: status.wire_code(), {status.label()} }
                    }
                }
            }

            div { class: "c-filters__field",
                label { "Availability to join" }
                select {
                    value: state.read().draft.availability_to_join.map(|a| a.wire_code()).unwrap_or(""),
                    onchange: move |evt| {
                        state.write().draft.availability_to_join = Availability::from_wire(&evt.value());
                    },
                    option { value: "", "Any" }
                    for availability in Availability::options() {
                        option { value: availability.wire_code(), {availability.label()} }
                    }
                }
            }

            div { class: "c-filters__field",
                label { "Education" }
                select {
                    value: state.read().draft.education.map(|e| e.wire_code()).unwrap_or(""),
                    onchange: move |evt| {
                        state.write().draft.education = EducationLevel::from_wire(&evt.value());
                    },
                    option { value: "", "Any" }
                    for level in EducationLevel::options() {
                        option { value: level.wire_code(), {level.label()} }
                    }
                }
            }

            div { class: "c-filters__field",
                label { "Profile updated within" }
                select {
                    value: state.read().draft.updated_within.map(|d| d.to_string()).unwrap_or_default(),
                    onchange: move |evt| {
                        state.write().draft.updated_within = evt.value().parse().ok();
                    },
                    option { value: "", "Any time" }
                    option { value: "7", "Last 7 days" }
                    option { value: "15", "Last 15 days" }
                    option { value: "30", "Last 30 days" }
                    option { value: "90", "Last 90 days" }
                }
            }

            div { class: "c-filters__actions",
                button { r#type: "submit", class: "c-button c-button--primary", "Search" }
                button {
                    r#type: "button",
                    class: "c-button c-button--ghost",
                    onclick: move |_| on_clear.call(()),
                    "Clear all"
                }
            }
        }
    }
}

#[component]
fn ExperienceSelect(
    label: &'static str,
    selected: Option<u8>,
    on_change: EventHandler<Option<u8>>,
) -> Element {
    rsx! {
        div { class: "c-filters__field",
            label { "{label}" }
            select {
                value: selected.map(|v| v.to_string()).unwrap_or_default(),
                onchange: move |evt| on_change.call(evt.value().parse().ok()),
                option { value: "", {format_experience(None)} }
                for years in experience_options() {
                    option { value: "{years}", {format_experience(Some(years))} }
                }
            }
        }
    }
}

#[component]
fn NoticePeriodPills(
    selected: Option<NoticePeriod>,
    on_change: EventHandler<Option<NoticePeriod>>,
) -> Element {
    rsx! {
        div { class: "c-filters__field",
            label { "Notice period (up to)" }
            div { class: "c-filters__pills",
                for period in NoticePeriod::options().iter().copied() {
                    button {
                        r#type: "button",
                        class: if selected == Some(period) { "c-pill c-pill--active" } else { "c-pill" },
                        // Clicking the active pill toggles the filter back off
                        onclick: move |_| {
                            if selected == Some(period) {
                                on_change.call(None);
                            } else {
                                on_change.call(Some(period));
                            }
                        },
                        {period.label()}
                    }
                }
            }
        }
    }
}
