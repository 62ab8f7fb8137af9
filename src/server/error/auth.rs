use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use oauth2::{basic::BasicErrorResponseType, HttpClientError, RequestTokenError, StandardErrorResponse};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Error returned by the oauth2 crate when exchanging an authorization code.
pub type OAuthTokenError = RequestTokenError<
    HttpClientError<reqwest::Error>,
    StandardErrorResponse<BasicErrorResponseType>,
>;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session; the request is anonymous.
    #[error("No user is logged in")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    #[error("User {0} stored in session was not found in the database")]
    UserNotInDatabase(i32),

    /// The user lacks a required permission.
    ///
    /// Holds the user id and a message describing the attempted action.
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange OAuth2 authorization code: {0}")]
    TokenExchange(#[from] Box<OAuthTokenError>),
}

impl From<OAuthTokenError> for AuthError {
    fn from(err: OAuthTokenError) -> Self {
        AuthError::TokenExchange(Box::new(err))
    }
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` / `TokenExchange` → 400 Bad Request
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "You must be logged in"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
            Self::CsrfValidationFailed | Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
