//! Candidate-search pipeline
//!
//! Draft filters flow through the payload builder on each explicit search
//! action; the query gate (`CandidateQuery`) decides whether a fetch happens
//! at all, and every executed search lands in the history store. The whole
//! module is framework-free so the pipeline can be tested without a renderer.

pub mod formatters;
pub mod history;
pub mod payload;
pub mod state;

pub use formatters::{
    experience_options, format_date, format_date_range, format_experience, format_notice_period,
    group_inr,
};
pub use history::{build_search_label, SearchHistory, SearchHistoryEntry, MAX_RECENT, MAX_SAVED};
pub use payload::{build_search_payload, SearchPayload};
pub use state::{CandidateQuery, SearchState, SubmitOutcome};
