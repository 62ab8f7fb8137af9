use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, rank::PaginatedLeaderboardDto},
    server::{error::AppError, service::rank::RankService, state::AppState},
};

/// Tag for grouping leaderboard endpoints in OpenAPI documentation
pub static RANK_TAG: &str = "rank";

#[derive(Deserialize)]
pub struct LeaderboardParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    #[serde(default)]
    pub category_id: Option<i32>,
}

fn default_entries() -> u64 {
    10
}

/// Get the leaderboard.
///
/// Ranks users by the total score of their scored original and counter posts,
/// optionally within one category. Equal totals share a rank.
///
/// # Returns
/// - `200 OK` - Paginated leaderboard
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/ranks",
    tag = RANK_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("category_id" = Option<i32>, Query, description = "Only score predictions in this category")
    ),
    responses(
        (status = 200, description = "Successfully retrieved leaderboard", body = PaginatedLeaderboardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<impl IntoResponse, AppError> {
    let leaderboard = RankService::new(&state.db)
        .get_leaderboard(params.category_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(leaderboard.into_dto())))
}
