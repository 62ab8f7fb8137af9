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
        post::PostFormat,
        template::{CreateTemplateDto, TemplateDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::template::CreateTemplateParams,
        service::template::TemplateService, state::AppState,
    },
};

/// Tag for grouping template endpoints in OpenAPI documentation
pub static TEMPLATE_TAG: &str = "template";

/// Get the templates of a format.
///
/// Returns the official templates plus, when logged in, the caller's own.
///
/// # Returns
/// - `200 OK` - Official and own templates
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/templates/{format}",
    tag = TEMPLATE_TAG,
    params(
        ("format" = PostFormat, Path, description = "Template format")
    ),
    responses(
        (status = 200, description = "Successfully retrieved templates", body = Vec<TemplateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_templates(
    State(state): State<AppState>,
    session: Session,
    Path(format): Path<PostFormat>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let templates = TemplateService::new(&state.db)
        .get_visible(format, viewer.map(|u| u.id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            templates
                .into_iter()
                .map(|t| t.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a template by ID.
///
/// Private templates of other users are reported as missing.
#[utoipa::path(
    get,
    path = "/api/templates/{format}/{template_id}",
    tag = TEMPLATE_TAG,
    params(
        ("format" = PostFormat, Path, description = "Template format"),
        ("template_id" = i32, Path, description = "Template ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved template", body = TemplateDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_template(
    State(state): State<AppState>,
    session: Session,
    Path((format, template_id)): Path<(PostFormat, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let template = TemplateService::new(&state.db)
        .get_by_id(format, template_id, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(template.into_dto())))
}

/// Create a template.
///
/// The shape is tagged by `format` and uses the same bounds as posts of that format.
///
/// # Returns
/// - `201 Created` - Successfully created template
/// - `400 Bad Request` - Blank name or dimensions out of bounds
/// - `401 Unauthorized` - User not logged in
#[utoipa::path(
    post,
    path = "/api/templates",
    tag = TEMPLATE_TAG,
    request_body = CreateTemplateDto,
    responses(
        (status = 201, description = "Successfully created template", body = TemplateDto),
        (status = 400, description = "Invalid template data", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_template(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTemplateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let template = TemplateService::new(&state.db)
        .create(user.id, CreateTemplateParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(template.into_dto())))
}

/// Delete a template.
///
/// Posts built from the template keep their data without a template reference.
///
/// # Access Control
/// - Template owner or admin
///
/// # Returns
/// - `204 No Content` - Template deleted
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - Template missing or not visible
#[utoipa::path(
    delete,
    path = "/api/templates/{format}/{template_id}",
    tag = TEMPLATE_TAG,
    params(
        ("format" = PostFormat, Path, description = "Template format"),
        ("template_id" = i32, Path, description = "Template ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted template"),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "Not the template's owner", body = ErrorDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_template(
    State(state): State<AppState>,
    session: Session,
    Path((format, template_id)): Path<(PostFormat, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    TemplateService::new(&state.db)
        .delete(format, template_id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
