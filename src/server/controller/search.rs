use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, search::SearchResultsDto},
    server::{error::AppError, service::search::SearchService, state::AppState},
};

/// Tag for grouping search endpoints in OpenAPI documentation
pub static SEARCH_TAG: &str = "search";

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Search predictions, users and teams.
///
/// Case-insensitive substring match on published prediction titles, user names and
/// team names, at most 20 results of each.
#[utoipa::path(
    get,
    path = "/api/search",
    tag = SEARCH_TAG,
    params(
        ("q" = String, Query, description = "Search text")
    ),
    responses(
        (status = 200, description = "Search results", body = SearchResultsDto),
        (status = 400, description = "Blank query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let results = SearchService::new(&state.db).search(&params.q).await?;

    Ok((StatusCode::OK, Json(results.into_dto())))
}
