use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        prediction::PaginatedPredictionsDto,
        user::{UpdateUserDto, UserDto, UserProfileDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::prediction::PredictionFilter,
        service::{prediction::PredictionService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get a user's public profile.
///
/// Includes the number of published predictions and the total score over scored posts.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved profile", body = UserProfileDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let profile = UserService::new(&state.db).get_profile(user_id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Get a user's published predictions, newest first.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/predictions",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved predictions", body = PaginatedPredictionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_predictions(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = PredictionFilter {
        user_id: Some(user_id),
        ..Default::default()
    };

    let predictions = PredictionService::new(&state.db)
        .get_paginated(filter, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(predictions.into_dto())))
}

/// Rename the logged-in user.
///
/// # Returns
/// - `200 OK` - The renamed user
/// - `400 Bad Request` - Blank name or longer than 64 characters
/// - `401 Unauthorized` - User not logged in
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully renamed user", body = UserDto),
        (status = 400, description = "Invalid name", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .rename(user.id, &payload.name)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
