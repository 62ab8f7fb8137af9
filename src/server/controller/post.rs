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
        post::{CreatePostDto, PostDto, PostFormat, PostSummaryDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::post::Submission,
        service::post::PostService, state::AppState,
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// Get summaries of every post on a prediction.
///
/// Lists ranking, bracket and bingo posts of every kind with author and score,
/// oldest first.
///
/// # Returns
/// - `200 OK` - Post summaries
/// - `404 Not Found` - Prediction missing or a draft of another user
#[utoipa::path(
    get,
    path = "/api/predictions/{prediction_id}/posts",
    tag = POST_TAG,
    params(
        ("prediction_id" = i32, Path, description = "Prediction ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved posts", body = Vec<PostSummaryDto>),
        (status = 404, description = "Prediction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    session: Session,
    Path(prediction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let posts = PostService::new(&state.db)
        .get_summaries(prediction_id, viewer.map(|u| u.id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a full post.
///
/// Returns the grid, bracket or card of the post with per-cell correctness once
/// results are published.
#[utoipa::path(
    get,
    path = "/api/posts/{format}/{post_id}",
    tag = POST_TAG,
    params(
        ("format" = PostFormat, Path, description = "Post format"),
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved post", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    session: Session,
    Path((format, post_id)): Path<(PostFormat, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let post = PostService::new(&state.db)
        .get(format, post_id, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Submit a post on a prediction.
///
/// The prediction owner's post becomes the original of its format. Any other user's
/// post becomes a counter, which must fit the original: same ranking dimensions,
/// same bracket rounds and seeding, or the original bingo card with the counter's
/// checked cells.
///
/// # Arguments
/// - `prediction_id` - Prediction to post on
/// - `format` - Post format, must match the body
/// - `payload` - Ranking, bracket or bingo body
///
/// # Returns
/// - `201 Created` - The stored post
/// - `400 Bad Request` - Invalid body, duplicate post, no original or results published
/// - `401 Unauthorized` - User not logged in
/// - `404 Not Found` - Prediction missing or not visible
#[utoipa::path(
    post,
    path = "/api/predictions/{prediction_id}/posts/{format}",
    tag = POST_TAG,
    params(
        ("prediction_id" = i32, Path, description = "Prediction ID"),
        ("format" = PostFormat, Path, description = "Post format")
    ),
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Successfully submitted post", body = PostDto),
        (status = 400, description = "Invalid post", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Prediction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    Path((prediction_id, format)): Path<(i32, PostFormat)>,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let post = PostService::new(&state.db)
        .submit(prediction_id, &user, format, Submission::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Delete a post.
///
/// Deleting a result also clears every score computed from it.
///
/// # Access Control
/// - Post author or admin
#[utoipa::path(
    delete,
    path = "/api/posts/{format}/{post_id}",
    tag = POST_TAG,
    params(
        ("format" = PostFormat, Path, description = "Post format"),
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted post"),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "Not the post's author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path((format, post_id)): Path<(PostFormat, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    PostService::new(&state.db)
        .delete(format, post_id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
