//! Server-side candidate directory and query engine
//! In-memory stores seeded at startup; no database behind them.

pub mod query;
pub mod store;

pub use query::{execute, execute_on, SearchParams, PAGE_SIZE};
pub use store::{ensure_seeded, CandidateRecord, CANDIDATES, EMPLOYERS, ORGANIZATIONS, SKILLS};
