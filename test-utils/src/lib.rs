//! Predictboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the predictboard
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories that insert entities with
//! sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_team() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_prediction_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::user::create_user(db).await?;
//!     let team = factory::team::create_team(db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
