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
        creation_flow::CreationFlowDto,
        post::{CreatePostDto, PostDto, PostFormat},
        prediction::{PredictionDto, UpsertPredictionDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{post::Submission, prediction::UpsertPredictionParams},
        service::{creation_flow::CreationFlowService, post::ensure_format},
        state::AppState,
    },
};

/// Tag for grouping creation flow endpoints in OpenAPI documentation
pub static CREATION_FLOW_TAG: &str = "creation-flow";

/// Start a creation flow.
///
/// Returns the token shared by the remaining steps. The flow expires after one hour.
#[utoipa::path(
    post,
    path = "/api/creation-flow",
    tag = CREATION_FLOW_TAG,
    responses(
        (status = 201, description = "Flow started", body = CreationFlowDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_flow(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let flow = CreationFlowService::new(&state.db).start(&user).await?;

    Ok((StatusCode::CREATED, Json(flow.into_dto())))
}

/// Get the state of a creation flow.
#[utoipa::path(
    get,
    path = "/api/creation-flow/{token}",
    tag = CREATION_FLOW_TAG,
    params(
        ("token" = String, Path, description = "Creation flow token")
    ),
    responses(
        (status = 200, description = "Flow state", body = CreationFlowDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Flow not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flow(
    State(state): State<AppState>,
    session: Session,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let flow = CreationFlowService::new(&state.db).get(&token, &user).await?;

    Ok((StatusCode::OK, Json(flow.into_dto())))
}

/// Set the details of the flow's prediction.
///
/// The first call creates the draft prediction, later calls update it.
///
/// # Returns
/// - `200 OK` - The draft prediction
/// - `400 Bad Request` - Blank title, unknown category, or the flow is no longer open
/// - `404 Not Found` - Unknown token or another user's flow
#[utoipa::path(
    put,
    path = "/api/creation-flow/{token}/prediction",
    tag = CREATION_FLOW_TAG,
    params(
        ("token" = String, Path, description = "Creation flow token")
    ),
    request_body = UpsertPredictionDto,
    responses(
        (status = 200, description = "Draft prediction stored", body = PredictionDto),
        (status = 400, description = "Invalid details or closed flow", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Flow not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_prediction(
    State(state): State<AppState>,
    session: Session,
    Path(token): Path<String>,
    Json(payload): Json<UpsertPredictionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let prediction = CreationFlowService::new(&state.db)
        .set_prediction(&token, &user, UpsertPredictionParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(prediction.into_dto())))
}

/// Add the original post of one format to the flow's draft.
///
/// A second post of the same format replaces the first.
///
/// # Returns
/// - `201 Created` - The stored post
/// - `400 Bad Request` - Invalid body, details not set yet, or the flow is no longer open
/// - `404 Not Found` - Unknown token or another user's flow
#[utoipa::path(
    post,
    path = "/api/creation-flow/{token}/posts/{format}",
    tag = CREATION_FLOW_TAG,
    params(
        ("token" = String, Path, description = "Creation flow token"),
        ("format" = PostFormat, Path, description = "Post format")
    ),
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post stored on the draft", body = PostDto),
        (status = 400, description = "Invalid post or closed flow", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Flow not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_post(
    State(state): State<AppState>,
    session: Session,
    Path((token, format)): Path<(String, PostFormat)>,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let submission = Submission::from_dto(payload);
    ensure_format(format, &submission)?;

    let post = CreationFlowService::new(&state.db)
        .add_post(&token, &user, submission)
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Complete the flow and publish its prediction.
///
/// # Returns
/// - `200 OK` - The completed flow
/// - `400 Bad Request` - No details or no post yet, or the flow is no longer open
/// - `404 Not Found` - Unknown token or another user's flow
#[utoipa::path(
    post,
    path = "/api/creation-flow/{token}/complete",
    tag = CREATION_FLOW_TAG,
    params(
        ("token" = String, Path, description = "Creation flow token")
    ),
    responses(
        (status = 200, description = "Prediction published", body = CreationFlowDto),
        (status = 400, description = "Flow cannot be completed", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Flow not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_flow(
    State(state): State<AppState>,
    session: Session,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let flow = CreationFlowService::new(&state.db)
        .complete(&token, &user)
        .await?;

    Ok((StatusCode::OK, Json(flow.into_dto())))
}
