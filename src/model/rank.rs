use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LeaderboardEntryDto {
    pub rank: u32,
    pub user_id: i32,
    pub user_name: String,
    pub total_score: i64,
    pub scored_posts: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedLeaderboardDto {
    pub entries: Vec<LeaderboardEntryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
