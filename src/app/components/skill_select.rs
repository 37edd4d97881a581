//! Skill multi-select
//!
//! Chips for the selected set, a text input that commits custom skills on
//! Enter, and (on the client) debounced canonical suggestions fetched from
//! the skills endpoint. Duplicate names are rejected upstream by the
//! normalized-name dedupe.

use dioxus::prelude::*;

use crate::domain::models::{format_skill, SelectedSkill, Skill};

#[component]
pub fn SkillSelect(
    skills: Vec<SelectedSkill>,
    on_add: EventHandler<SelectedSkill>,
    on_remove: EventHandler<String>,
) -> Element {
    let mut input = use_signal(String::new);
    let suggestions = use_signal(Vec::<Skill>::new);
    // Bumped on every keystroke so stale suggestion fetches discard themselves
    let generation = use_signal(|| 0u32);

    let mut commit_custom = {
        let mut input = input;
        move || {
            let name = format_skill(&input.read());
            if name.is_empty() {
                return;
            }
            on_add.call(SelectedSkill::Custom { name });
            input.set(String::new());
        }
    };

    let on_input = {
        let mut input = input;
        #[allow(unused_mut, unused_variables)]
        let mut suggestions = suggestions;
        let mut generation = generation;
        move |evt: FormEvent| {
            let value = evt.value();
            input.set(value.clone());
            let current = *generation.read() + 1;
            generation.set(current);

            #[cfg(not(target_arch = "wasm32"))]
            let _ = value; // Suggestions only fetch client-side

            #[cfg(target_arch = "wasm32")]
            {
                let mut suggestions = suggestions;
                let generation = generation;
                wasm_bindgen_futures::spawn_local(async move {
                    // Debounce: wait out further keystrokes before fetching
                    gloo_timers::future::sleep(std::time::Duration::from_millis(250)).await;
                    if *generation.read() != current {
                        return;
                    }
                    let fragment = value.trim().to_string();
                    if fragment.is_empty() {
                        suggestions.set(Vec::new());
                        return;
                    }
                    let url = format!("/api/skills?q={}", urlencoding::encode(&fragment));
                    match gloo_net::http::Request::get(&url).send().await {
                        Ok(response) => match response.json::<Vec<Skill>>().await {
                            Ok(fetched) => {
                                if *generation.read() == current {
                                    suggestions.set(fetched);
                                }
                            }
                            Err(e) => {
                                tracing::error!("Skill suggestion parse error: {}", e);
                            }
                        },
                        Err(e) => {
                            tracing::error!("Skill suggestion request error: {}", e);
                        }
                    }
                });
            }
        }
    };

    rsx! {
        div { class: "c-skill-select",
            label { class: "c-skill-select__label", "Skills" }

            if !skills.is_empty() {
                div { class: "c-skill-select__chips",
                    for selected in skills.iter() {
                        SkillChip {
                            name: selected.name().to_string(),
                            canonical: selected.id().is_some(),
                            on_remove: on_remove,
                        }
                    }
                }
            }

            input {
                r#type: "text",
                class: "c-skill-select__input",
                placeholder: "Type a skill and press Enter",
                value: "{input}",
                oninput: on_input,
                onkeypress: move |evt| {
                    if evt.key() == Key::Enter {
                        commit_custom();
                    }
                },
            }

            if !suggestions.read().is_empty() {
                div { class: "c-skill-select__suggestions",
                    for suggestion in suggestions.read().iter() {
                        {
                            let suggestion = suggestion.clone();
                            let mut input = input;
                            let mut suggestions = suggestions;
                            rsx! {
                                button {
                                    class: "c-skill-select__suggestion",
                                    onclick: move |_| {
                                        on_add.call(suggestion.clone().into());
                                        input.set(String::new());
                                        suggestions.set(Vec::new());
                                    },
                                    "{suggestion.name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillChip(name: String, canonical: bool, on_remove: EventHandler<String>) -> Element {
    let chip_class = if canonical {
        "c-skill-chip c-skill-chip--canonical"
    } else {
        "c-skill-chip"
    };
    let name_for_remove = name.clone();

    rsx! {
        span { class: "{chip_class}",
            "{name}"
            button {
                class: "c-skill-chip__remove",
                onclick: move |_| on_remove.call(name_for_remove.clone()),
                "✕"
            }
        }
    }
}
