use dioxus::prelude::*;

/// Tone of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub tone: ToastTone,
}

/// Transient notification state. The latest toast replaces any visible one;
/// dismissal is explicit (close button) to keep the hook timer-free.
#[derive(Clone, Copy)]
pub struct ToastState {
    pub current: Signal<Option<Toast>>,
}

impl ToastState {
    pub fn success(&mut self, message: impl Into<String>) {
        self.current.set(Some(Toast {
            message: message.into(),
            tone: ToastTone::Success,
        }));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.current.set(Some(Toast {
            message: message.into(),
            tone: ToastTone::Error,
        }));
    }

    pub fn dismiss(&mut self) {
        self.current.set(None);
    }
}

/// Hook to manage transient notifications
pub fn use_toast() -> ToastState {
    let current = use_signal(|| None::<Toast>);
    ToastState { current }
}
