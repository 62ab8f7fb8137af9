//! Factories that insert entities with sensible defaults.
//!
//! Each factory exposes a builder (`XFactory::new(db, ..).field(..).build()`) plus a
//! `create_x` shortcut for the common case. Unique fields are derived from a shared
//! counter so repeated calls never collide.

pub mod category;
pub mod creation_flow;
pub mod helpers;
pub mod prediction;
pub mod team;
pub mod template;
pub mod user;

pub use category::create_category;
pub use creation_flow::create_creation_flow;
pub use prediction::create_prediction;
pub use team::create_team;
pub use user::create_user;
