//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! request data from controllers into services.

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

use sea_orm::DbErr;

/// Builds the error returned when a stored enum column holds an unknown value.
pub(crate) fn unknown_value(kind: &str, value: &str) -> DbErr {
    DbErr::Type(format!("unknown {} '{}' stored in database", kind, value))
}
