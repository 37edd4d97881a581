// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod candidate;
pub mod filters;
pub mod organization;
pub mod skill;

pub use candidate::{
    CandidateDetail, CandidateResult, EducationEntry, EmploymentEntry, SearchResponse,
};
pub use filters::{Availability, EducationLevel, FilterDraft, NoticePeriod, WorkStatus};
pub use organization::{EmployerAccount, Organization};
pub use skill::{dedupe_skills, format_skill, normalize_skill, SelectedSkill, Skill};
