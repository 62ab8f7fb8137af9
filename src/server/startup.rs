use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use time::Duration;
use tower_sessions::{cookie::SameSite, ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request
/// is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by a SQLite store on the application database.
///
/// Runs the session store's own migration and spawns a background task that purges
/// expired sessions every minute. Sessions expire after 7 days of inactivity.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    tokio::task::spawn(
        session_store
            .clone()
            .continuously_delete_expired(tokio::time::Duration::from_secs(60)),
    );

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Builds the reqwest client used for OAuth2 requests.
///
/// Redirects are disabled to prevent SSRF through the token endpoint.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Google OAuth2 client from configuration.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token and redirect URLs set
/// - `Err(AppError::ConfigErr)` - One of the configured URLs failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.google_auth_url.clone())
        .map_err(|e| invalid_url("GOOGLE_AUTH_URL", e))?;
    let token_url = TokenUrl::new(config.google_token_url.clone())
        .map_err(|e| invalid_url("GOOGLE_TOKEN_URL", e))?;
    let redirect_url = RedirectUrl::new(config.google_redirect_url.clone())
        .map_err(|e| invalid_url("GOOGLE_REDIRECT_URL", e))?;

    let client = BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

fn invalid_url(name: &str, err: url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: err.to_string(),
    }
}
