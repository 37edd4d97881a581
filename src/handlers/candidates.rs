use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};

use crate::directory::{self, SearchParams};
use crate::domain::models::{CandidateDetail, SearchResponse};
use crate::shared::logging;

/// GET /api/employer/candidates/
/// Candidate search, parameterized by the SearchPayload keys. A request
/// with no recognized parameter returns `{count: 0, results: []}` without
/// touching the directory.
pub async fn search_candidates_handler(
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    Json(directory::execute(&params))
}

/// GET /api/employer/candidates/{candidate_id}
pub async fn candidate_detail_handler(
    Path(candidate_id): Path<u64>,
) -> Result<Json<CandidateDetail>, StatusCode> {
    let detail = directory::CANDIDATES
        .get(&candidate_id)
        .map(|record| record.to_detail());
    logging::log_candidate_lookup(candidate_id, detail.is_some());
    detail.map(Json).ok_or(StatusCode::NOT_FOUND)
}
