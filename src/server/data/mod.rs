//! Data access layer.
//!
//! Repositories wrap SeaORM queries and convert entity models into domain models.
//! Repositories used inside transactions are generic over `ConnectionTrait`.

pub mod category;
pub mod creation_flow;
pub mod discussion;
pub mod leaderboard;
pub mod post;
pub mod prediction;
pub mod team;
pub mod template;
pub mod user;

#[cfg(test)]
mod test;
