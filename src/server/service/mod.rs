//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, validation and scoring
//! - **Orchestration**: Coordinating multiple repository calls and the Google API
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Post graphs, result publishing and the creation flow
//!   run inside one database transaction

pub mod account;
pub mod admin;
pub mod category;
pub mod creation_flow;
pub mod discussion;
pub mod post;
pub mod prediction;
pub mod rank;
pub mod results;
pub mod scoring;
pub mod search;
pub mod team;
pub mod template;
pub mod user;

#[cfg(test)]
mod test;
