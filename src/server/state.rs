//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. It holds the database pool, the outbound HTTP client, the
//! Google OAuth2 client and the URLs needed to build redirects.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone: `DatabaseConnection` and `reqwest::Client` share
/// their pools internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client for the token exchange and the userinfo request.
    ///
    /// Configured without redirects to prevent SSRF.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google login flow.
    pub oauth_client: OAuth2Client,

    /// Google endpoint returning the authenticated user's profile.
    pub userinfo_url: String,

    /// Base URL of the web client; users are redirected here after login.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        userinfo_url: String,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
            app_url,
        }
    }
}
