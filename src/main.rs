mod model;
mod server;

use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    router,
    scheduler::creation_flow_sweep,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("predictboard=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    // Start creation flow sweep
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = creation_flow_sweep::start_scheduler(scheduler_db).await {
            tracing::error!("Creation flow sweep scheduler error: {}", e);
        }
    });

    let app_origin = HeaderValue::from_str(&config.app_url).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        }
    })?;
    let cors = CorsLayer::new()
        .allow_origin(app_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = router::router()
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            config.google_userinfo_url.clone(),
            config.app_url.clone(),
        ))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
