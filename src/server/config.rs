use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,

    pub google_auth_url: String,
    pub google_token_url: String,
    pub google_userinfo_url: String,

    /// Origin of the web client, used for CORS and the post-login redirect.
    pub app_url: String,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            google_client_id: required("GOOGLE_CLIENT_ID")?,
            google_client_secret: required("GOOGLE_CLIENT_SECRET")?,
            google_redirect_url: required("GOOGLE_REDIRECT_URL")?,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            google_userinfo_url: GOOGLE_USERINFO_URL.to_string(),
            app_url: required("APP_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
