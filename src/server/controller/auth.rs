use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        service::account::AccountService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Start a Google login.
///
/// Stores a fresh CSRF token in the session and redirects the browser to Google's
/// consent screen.
///
/// # Returns
/// - `307 Temporary Redirect` - Redirect to Google
/// - `500 Internal Server Error` - Session store error
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the Google consent screen"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let service = AccountService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );

    let (url, csrf_token) = service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete a Google login.
///
/// Validates the CSRF state, exchanges the authorization code, creates or updates the
/// user and stores their id in the session before redirecting back to the web client.
///
/// # Arguments
/// - `params` - `state` and `code` returned by Google
///
/// # Returns
/// - `307 Temporary Redirect` - Redirect to the web client
/// - `400 Bad Request` - CSRF mismatch or rejected authorization code
/// - `500 Internal Server Error` - Userinfo request or database error
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state token"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Logged in, redirect to the web client"),
        (status = 400, description = "CSRF validation or code exchange failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let service = AccountService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );
    let user = service.callback(params.code).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::debug!("User {} logged in", user.id);

    Ok(Redirect::temporary(&state.app_url))
}

/// Log out.
///
/// # Returns
/// - `200 OK` - Session cleared
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::OK)
}

/// Get the logged-in user.
///
/// # Returns
/// - `200 OK` - The current user
/// - `404 Not Found` - Nobody is logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The current user", body = UserDto),
        (status = 404, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .optional()
        .await?
        .ok_or_else(|| AppError::NotFound("Not logged in".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if stored_state.as_deref() == Some(csrf_state) {
        return Ok(());
    }

    Err(AuthError::CsrfValidationFailed.into())
}
