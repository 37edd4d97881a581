use dioxus::prelude::*;

use crate::shared::hooks::{Toast, ToastTone};

/// Renders the current transient notification, if any, with a dismiss
/// control. The newest toast replaces the previous one.
#[component]
pub fn ToastHost(mut current: Signal<Option<Toast>>) -> Element {
    let Some(toast) = current.read().clone() else {
        return rsx! {};
    };

    let tone_class = match toast.tone {
        ToastTone::Success => "c-toast c-toast--success",
        ToastTone::Error => "c-toast c-toast--error",
    };

    rsx! {
        div { class: "{tone_class}",
            span { class: "c-toast__message", "{toast.message}" }
            button {
                class: "c-toast__close",
                onclick: move |_| current.set(None),
                "✕"
            }
        }
    }
}
