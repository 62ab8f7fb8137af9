//! API data transfer objects.
//!
//! Every type here is part of the JSON wire format consumed by the web client and
//! derives `ToSchema` so it appears in the generated OpenAPI document.

pub mod api;
pub mod category;
pub mod creation_flow;
pub mod discussion;
pub mod post;
pub mod prediction;
pub mod rank;
pub mod results;
pub mod search;
pub mod team;
pub mod template;
pub mod user;
