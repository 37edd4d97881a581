pub mod admin;
pub mod candidates;
pub mod skills;

pub use admin::{
    create_organization_handler, list_employers_handler, list_organizations_handler,
};
pub use candidates::{candidate_detail_handler, search_candidates_handler};
pub use skills::suggest_skills_handler;
