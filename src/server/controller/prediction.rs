use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        post::{CreatePostDto, PostFormat},
        prediction::{
            PaginatedPredictionsDto, PredictionDetailDto, PredictionDto, UpsertPredictionDto,
        },
        results::PredictionResultsDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            post::Submission,
            prediction::{PredictionFilter, UpsertPredictionParams},
        },
        service::{prediction::PredictionService, results::ResultsService},
        state::AppState,
    },
};

/// Tag for grouping prediction endpoints in OpenAPI documentation
pub static PREDICTION_TAG: &str = "prediction";

/// Query parameters for listing predictions.
#[derive(Deserialize)]
pub struct PredictionListParams {
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

/// Get paginated published predictions.
///
/// Returns published predictions newest first, optionally restricted to one category.
/// Drafts are never listed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters and optional category filter
///
/// # Returns
/// - `200 OK` - Paginated list of predictions
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/predictions",
    tag = PREDICTION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("category_id" = Option<i32>, Query, description = "Only predictions in this category")
    ),
    responses(
        (status = 200, description = "Successfully retrieved predictions", body = PaginatedPredictionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_predictions(
    State(state): State<AppState>,
    Query(params): Query<PredictionListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = PredictionFilter {
        category_id: params.category_id,
        ..Default::default()
    };

    let predictions = PredictionService::new(&state.db)
        .get_paginated(filter, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(predictions.into_dto())))
}

/// Get a prediction with summaries of its posts.
///
/// Drafts are only visible to their owner; for anyone else they do not exist.
///
/// # Returns
/// - `200 OK` - Prediction detail
/// - `404 Not Found` - Prediction missing or a draft of another user
#[utoipa::path(
    get,
    path = "/api/predictions/{prediction_id}",
    tag = PREDICTION_TAG,
    params(
        ("prediction_id" = i32, Path, description = "Prediction ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved prediction", body = PredictionDetailDto),
        (status = 404, description = "Prediction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_prediction(
    State(state): State<AppState>,
    session: Session,
    Path(prediction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let detail = PredictionService::new(&state.db)
        .get_detail(prediction_id, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Update a prediction's details.
///
/// # Access Control
/// - Prediction owner
///
/// # Returns
/// - `200 OK` - The updated prediction
/// - `400 Bad Request` - Blank title or unknown category
/// - `403 Forbidden` - Caller does not own the prediction
/// - `404 Not Found` - Prediction missing or not visible
#[utoipa::path(
    put,
    path = "/api/predictions/{prediction_id}",
    tag = PREDICTION_TAG,
    params(
        ("prediction_id" = i32, Path, description = "Prediction ID")
    ),
    request_body = UpsertPredictionDto,
    responses(
        (status = 200, description = "Successfully updated prediction", body = PredictionDto),
        (status = 400, description = "Invalid prediction data", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "Not the prediction's owner", body = ErrorDto),
        (status = 404, description = "Prediction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_prediction(
    State(state): State<AppState>,
    session: Session,
    Path(prediction_id): Path<i32>,
    Json(payload): Json<UpsertPredictionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let prediction = PredictionService::new(&state.db)
        .update(
            prediction_id,
            &user,
            UpsertPredictionParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(prediction.into_dto())))
}

/// Delete a prediction with its posts and discussion.
///
/// # Access Control
/// - Prediction owner or admin
#[utoipa::path(
    delete,
    path = "/api/predictions/{prediction_id}",
    tag = PREDICTION_TAG,
    params(
        ("prediction_id" = i32, Path, description = "Prediction ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted prediction"),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "Not the prediction's owner", body = ErrorDto),
        (status = 404, description = "Prediction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_prediction(
    State(state): State<AppState>,
    session: Session,
    Path(prediction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    PredictionService::new(&state.db)
        .delete(prediction_id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Publish the official results of one format.
///
/// Stores the result, replacing an earlier one, then scores every original and
/// counter post of the format against it. The body must fit the original post the
/// same way a counter does.
///
/// # Access Control
/// - Prediction owner or admin
///
/// # Arguments
/// - `prediction_id` - Prediction to publish results for
/// - `format` - Format of the results, must match the body
/// - `payload` - Ranking, bracket or bingo body
///
/// # Returns
/// - `201 Created` - Results published, standings returned
/// - `400 Bad Request` - Invalid body, draft prediction or no original post
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - Prediction missing or not visible
#[utoipa::path(
    post,
    path = "/api/predictions/{prediction_id}/results/{format}",
    tag = PREDICTION_TAG,
    params(
        ("prediction_id" = i32, Path, description = "Prediction ID"),
        ("format" = PostFormat, Path, description = "Results format")
    ),
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Results published", body = PredictionResultsDto),
        (status = 400, description = "Invalid results", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "Not the prediction's owner", body = ErrorDto),
        (status = 404, description = "Prediction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn publish_results(
    State(state): State<AppState>,
    session: Session,
    Path((prediction_id, format)): Path<(i32, PostFormat)>,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let results = ResultsService::new(&state.db)
        .publish(prediction_id, &user, format, Submission::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(results.into_dto())))
}

/// Get the published results of one format with the ranked standings.
///
/// # Returns
/// - `200 OK` - Results and standings ordered by rank
/// - `404 Not Found` - Prediction not visible or no results published for the format
#[utoipa::path(
    get,
    path = "/api/predictions/{prediction_id}/results/{format}",
    tag = PREDICTION_TAG,
    params(
        ("prediction_id" = i32, Path, description = "Prediction ID"),
        ("format" = PostFormat, Path, description = "Results format")
    ),
    responses(
        (status = 200, description = "Successfully retrieved results", body = PredictionResultsDto),
        (status = 404, description = "No results published", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_results(
    State(state): State<AppState>,
    session: Session,
    Path((prediction_id, format)): Path<(i32, PostFormat)>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let results = ResultsService::new(&state.db)
        .get(prediction_id, format, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(results.into_dto())))
}
