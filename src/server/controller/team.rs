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
        team::{TeamDto, UpsertTeamDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::team::UpsertTeamParams,
        service::team::TeamService, state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Get the logged-in user's teams ordered by name.
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved teams", body = Vec<TeamDto>),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let teams = TeamService::new(&state.db).get_own(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(teams.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get any team by ID.
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get_by_id(team_id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Create a team.
///
/// Team names are unique per user.
///
/// # Returns
/// - `201 Created` - Successfully created team
/// - `400 Bad Request` - Blank name or a team of that name already exists
/// - `401 Unauthorized` - User not logged in
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = UpsertTeamDto,
    responses(
        (status = 201, description = "Successfully created team", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let team = TeamService::new(&state.db)
        .create(user.id, UpsertTeamParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

/// Update one of the logged-in user's teams.
///
/// # Returns
/// - `200 OK` - The updated team
/// - `400 Bad Request` - Blank or duplicate name
/// - `404 Not Found` - Team missing or owned by another user
#[utoipa::path(
    put,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    request_body = UpsertTeamDto,
    responses(
        (status = 200, description = "Successfully updated team", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(payload): Json<UpsertTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let team = TeamService::new(&state.db)
        .update(team_id, user.id, UpsertTeamParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete one of the logged-in user's teams.
///
/// Ranking cells and bracket slots holding the team become empty.
#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted team"),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    TeamService::new(&state.db).delete(team_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
