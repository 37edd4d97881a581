pub mod candidate_dashboard;
pub mod candidate_profile;
pub mod employer_search;
pub mod home;
pub mod master_admin;
pub mod routes;

pub use candidate_dashboard::CandidateDashboard;
pub use candidate_profile::CandidateProfile;
pub use employer_search::EmployerSearch;
pub use home::Home;
pub use master_admin::MasterAdmin;
pub use routes::{App, Route};
