use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        discussion::{CommentDto, CreateMessageDto, DiscussionPostDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::discussion::DiscussionService,
        state::AppState,
    },
};

/// Tag for grouping discussion endpoints in OpenAPI documentation
pub static DISCUSSION_TAG: &str = "discussion";

/// Get a prediction's discussion.
///
/// Threads and their comments are ordered oldest first.
#[utoipa::path(
    get,
    path = "/api/predictions/{prediction_id}/discussion",
    tag = DISCUSSION_TAG,
    params(
        ("prediction_id" = i32, Path, description = "Prediction ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved discussion", body = Vec<DiscussionPostDto>),
        (status = 404, description = "Prediction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_discussion(
    State(state): State<AppState>,
    session: Session,
    Path(prediction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let posts = DiscussionService::new(&state.db)
        .get_for_prediction(prediction_id, viewer.map(|u| u.id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Start a discussion thread on a published prediction.
#[utoipa::path(
    post,
    path = "/api/predictions/{prediction_id}/discussion",
    tag = DISCUSSION_TAG,
    params(
        ("prediction_id" = i32, Path, description = "Prediction ID")
    ),
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Successfully created thread", body = DiscussionPostDto),
        (status = 400, description = "Blank message", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Prediction not found or still a draft", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_discussion_post(
    State(state): State<AppState>,
    session: Session,
    Path(prediction_id): Path<i32>,
    Json(payload): Json<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let post = DiscussionService::new(&state.db)
        .create_post(prediction_id, &user, &payload.body)
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Delete a discussion thread and its comments.
///
/// # Access Control
/// - Thread author or admin; other users get 404
#[utoipa::path(
    delete,
    path = "/api/discussion/{discussion_post_id}",
    tag = DISCUSSION_TAG,
    params(
        ("discussion_post_id" = i32, Path, description = "Discussion post ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted thread"),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Discussion post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_discussion_post(
    State(state): State<AppState>,
    session: Session,
    Path(discussion_post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    DiscussionService::new(&state.db)
        .delete_post(discussion_post_id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Comment on a discussion thread.
#[utoipa::path(
    post,
    path = "/api/discussion/{discussion_post_id}/comments",
    tag = DISCUSSION_TAG,
    params(
        ("discussion_post_id" = i32, Path, description = "Discussion post ID")
    ),
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Blank comment", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Discussion post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(discussion_post_id): Path<i32>,
    Json(payload): Json<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comment = DiscussionService::new(&state.db)
        .create_comment(discussion_post_id, &user, &payload.body)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// # Access Control
/// - Comment author or admin; other users get 404
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = DISCUSSION_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    DiscussionService::new(&state.db)
        .delete_comment(comment_id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
