pub mod common;
pub mod filter_form;
pub mod history_sidebar;
pub mod results_list;
pub mod skill_select;
pub mod toast;

pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use filter_form::FilterForm;
pub use history_sidebar::HistorySidebar;
pub use results_list::ResultsList;
pub use skill_select::SkillSelect;
pub use toast::ToastHost;
