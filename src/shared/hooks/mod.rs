// Custom Dioxus hooks
pub mod use_search_state;
pub mod use_toast;

pub use use_search_state::{use_search_state, SearchPanelState};
pub use use_toast::{use_toast, Toast, ToastState, ToastTone};
