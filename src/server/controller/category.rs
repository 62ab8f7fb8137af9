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
        category::{CategoryDto, UpsertCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::category::UpsertCategoryParams,
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get all categories.
///
/// Returns every category ordered by name. Public.
///
/// # Returns
/// - `200 OK` - List of categories
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a category by ID.
///
/// # Returns
/// - `200 OK` - The category
/// - `404 Not Found` - Category does not exist
#[utoipa::path(
    get,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db).get_by_id(category_id).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Create a new category.
///
/// The name must be non-blank and not used by another category.
///
/// # Access Control
/// - `Admin` - Only admins can create categories
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Category name and optional description
///
/// # Returns
/// - `201 Created` - Successfully created category
/// - `400 Bad Request` - Blank or duplicate name
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = UpsertCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let category = CategoryService::new(&state.db)
        .create(UpsertCategoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Update a category.
///
/// # Access Control
/// - `Admin` - Only admins can update categories
///
/// # Returns
/// - `200 OK` - The updated category
/// - `400 Bad Request` - Blank name or name used by another category
/// - `404 Not Found` - Category does not exist
#[utoipa::path(
    put,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    request_body = UpsertCategoryDto,
    responses(
        (status = 200, description = "Successfully updated category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
    Json(payload): Json<UpsertCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let category = CategoryService::new(&state.db)
        .update(category_id, UpsertCategoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a category.
///
/// Predictions in the category are kept without a category.
///
/// # Access Control
/// - `Admin` - Only admins can delete categories
///
/// # Returns
/// - `204 No Content` - Category deleted
/// - `404 Not Found` - Category does not exist
#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db).delete(category_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
