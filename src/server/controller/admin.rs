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
        post::PostFormat,
        template::{SetOfficialDto, TemplateDto},
        user::{PaginatedUsersDto, SetAdminDto, UserDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{admin::AdminService, template::TemplateService},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get paginated users.
///
/// Returns every user ordered by name. Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Paginated list of users
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedUsersDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = AdminService::new(&state.db)
        .get_users(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Grant or revoke admin permissions.
///
/// Admins cannot revoke their own admin flag.
///
/// # Access Control
/// - `Admin` - Only admins can change admin permissions
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Admin tried to revoke their own flag
/// - `404 Not Found` - Unknown user
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/admin",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = SetAdminDto,
    responses(
        (status = 200, description = "Admin flag updated", body = UserDto),
        (status = 400, description = "Cannot revoke own admin flag", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_admin(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let acting = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = AdminService::new(&state.db)
        .set_admin(&acting, user_id, payload.admin)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Mark a template official or private.
///
/// Official templates are listed for every user.
///
/// # Access Control
/// - `Admin` - Only admins can change official templates
///
/// # Returns
/// - `200 OK` - The updated template
/// - `404 Not Found` - Unknown template
#[utoipa::path(
    put,
    path = "/api/admin/templates/{format}/{template_id}/official",
    tag = ADMIN_TAG,
    params(
        ("format" = PostFormat, Path, description = "Template format"),
        ("template_id" = i32, Path, description = "Template ID")
    ),
    request_body = SetOfficialDto,
    responses(
        (status = 200, description = "Template updated", body = TemplateDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_template_official(
    State(state): State<AppState>,
    session: Session,
    Path((format, template_id)): Path<(PostFormat, i32)>,
    Json(payload): Json<SetOfficialDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let template = TemplateService::new(&state.db)
        .set_official(format, template_id, payload.official)
        .await?;

    Ok((StatusCode::OK, Json(template.into_dto())))
}
