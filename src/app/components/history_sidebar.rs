//! Recent and saved search sidebar
//!
//! Two tabs over the shared search history. Clicking an entry re-applies its
//! stored draft and skill set. Saving requires a non-blank name and at least
//! one populated filter, enforced by the history store.

use dioxus::prelude::*;

use crate::search::{format_date, SearchHistory, SearchHistoryEntry};

#[derive(Debug, Clone, Copy, PartialEq)]
enum HistoryTab {
    Recent,
    Saved,
}

#[component]
pub fn HistorySidebar(
    history: Signal<SearchHistory>,
    mut save_name: Signal<String>,
    on_apply: EventHandler<SearchHistoryEntry>,
    on_save: EventHandler<()>,
) -> Element {
    let mut tab = use_signal(|| HistoryTab::Recent);

    let active = *tab.read();
    let entries: Vec<SearchHistoryEntry> = match active {
        HistoryTab::Recent => history.read().recent.clone(),
        HistoryTab::Saved => history.read().saved.clone(),
    };

    rsx! {
        aside { class: "c-history",
            div { class: "c-history__tabs",
                button {
                    class: if active == HistoryTab::Recent { "c-history__tab c-history__tab--active" } else { "c-history__tab" },
                    onclick: move |_| tab.set(HistoryTab::Recent),
                    "Recent"
                }
                button {
                    class: if active == HistoryTab::Saved { "c-history__tab c-history__tab--active" } else { "c-history__tab" },
                    onclick: move |_| tab.set(HistoryTab::Saved),
                    "Saved"
                }
            }

            if entries.is_empty() {
                p { class: "c-history__empty",
                    {match active {
                        HistoryTab::Recent => "No recent searches yet.",
                        HistoryTab::Saved => "No saved searches yet.",
                    }}
                }
            } else {
                ul { class: "c-history__list",
                    for entry in entries {
                        HistoryRow { entry: entry.clone(), on_apply: on_apply }
                    }
                }
            }

            div { class: "c-history__save",
                input {
                    r#type: "text",
                    class: "c-history__save-input",
                    placeholder: "Name this search",
                    value: "{save_name}",
                    oninput: move |evt| save_name.set(evt.value()),
                }
                button {
                    class: "c-history__save-button",
                    onclick: move |_| on_save.call(()),
                    "Save search"
                }
            }
        }
    }
}

#[component]
fn HistoryRow(entry: SearchHistoryEntry, on_apply: EventHandler<SearchHistoryEntry>) -> Element {
    let entry_for_apply = entry.clone();

    rsx! {
        li { class: "c-history__item",
            button {
                class: "c-history__apply",
                onclick: move |_| on_apply.call(entry_for_apply.clone()),
                span { class: "c-history__name", "{entry.name}" }
                span { class: "c-history__date", {format_date(&entry.created_at)} }
            }
        }
    }
}
