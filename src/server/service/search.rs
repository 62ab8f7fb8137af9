use sea_orm::DatabaseConnection;

use crate::server::{
    data::{prediction::PredictionRepository, team::TeamRepository, user::UserRepository},
    error::AppError,
    model::search::SearchResults,
};

/// Maximum results returned per kind.
pub const SEARCH_LIMIT: u64 = 20;

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Case-insensitive substring search over published prediction titles, user names
    /// and team names.
    pub async fn search(&self, query: &str) -> Result<SearchResults, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::BadRequest(
                "Search query must not be empty".to_string(),
            ));
        }

        let predictions = PredictionRepository::new(self.db)
            .search_published(query, SEARCH_LIMIT)
            .await?;
        let users = UserRepository::new(self.db)
            .search_by_name(query, SEARCH_LIMIT)
            .await?;
        let teams = TeamRepository::new(self.db)
            .search_by_name(query, SEARCH_LIMIT)
            .await?;

        Ok(SearchResults {
            predictions,
            users,
            teams,
        })
    }
}
