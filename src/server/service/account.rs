use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

/// Subset of Google's OpenID Connect userinfo document.
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Stable Google account identifier.
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl GoogleUserInfo {
    /// Display name for a new account, falling back to the email's local part.
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| {
                self.email
                    .as_deref()
                    .and_then(|email| email.split('@').next())
                    .filter(|local| !local.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "Anonymous".to_string())
    }
}

/// Service for the Google OAuth2 login flow.
///
/// Builds the consent URL, exchanges the callback code for a token, fetches the
/// user's profile and creates or updates the local user.
pub struct AccountService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub userinfo_url: &'a str,
}

impl<'a> AccountService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Generates the Google consent URL with a fresh CSRF state token.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - The authorization URL and the state to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Completes a login from the OAuth2 callback.
    ///
    /// The first user to log in while no admin exists is made admin.
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AuthError::TokenExchange)` - Google rejected the authorization code
    /// - `Err(AppError::ReqwestErr)` - Fetching the userinfo document failed
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let info = self.fetch_user_info(&token).await?;

        let user_repo = UserRepository::new(self.db);
        let make_admin = !user_repo.admin_exists().await?;

        let user = user_repo
            .upsert(UpsertUserParam {
                name: info.display_name(),
                email: info.email.unwrap_or_default(),
                google_id: info.sub,
                is_admin: make_admin.then_some(true),
            })
            .await?;

        if make_admin {
            tracing::info!("User {} has been set as admin", user.name);
        }

        Ok(user)
    }

    async fn fetch_user_info(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<GoogleUserInfo, AppError> {
        let info = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleUserInfo>()
            .await?;

        Ok(info)
    }
}
