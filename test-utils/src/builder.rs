use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Team};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Team)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables every prediction test needs.
    ///
    /// Adds, in dependency order: User, Category, Team, Prediction and the three
    /// template tables.
    pub fn with_prediction_tables(self) -> Self {
        self.with_table(User)
            .with_table(Category)
            .with_table(Team)
            .with_table(Prediction)
            .with_table(RankingTemplate)
            .with_table(BracketTemplate)
            .with_table(BingoTemplate)
    }

    /// Adds the prediction tables plus every post table (ranking, bracket, bingo).
    ///
    /// Use this for tests that submit posts or publish results.
    pub fn with_post_tables(self) -> Self {
        self.with_prediction_tables()
            .with_table(PostRank)
            .with_table(RankTable)
            .with_table(RankRow)
            .with_table(RankColumn)
            .with_table(PostBracket)
            .with_table(RootBracket)
            .with_table(Bracket)
            .with_table(PostBingo)
            .with_table(BingoCell)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_post_tables()
            .with_table(DiscussionPost)
            .with_table(Comment)
            .with_table(CreationFlow)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
