//! HTTP request handlers.
//!
//! Controllers resolve the caller through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs into service parameters, call the matching service and convert the
//! domain result back into a DTO. Every handler carries a `#[utoipa::path]`
//! annotation collected by [`ApiDoc`](crate::server::router::ApiDoc).

use serde::Deserialize;

pub mod admin;
pub mod auth;
pub mod category;
pub mod creation_flow;
pub mod discussion;
pub mod post;
pub mod prediction;
pub mod rank;
pub mod search;
pub mod team;
pub mod template;
pub mod user;

/// Query parameters shared by paginated endpoints.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
