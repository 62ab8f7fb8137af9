use crate::model::rank::{LeaderboardEntryDto, PaginatedLeaderboardDto};

/// Aggregated score of one user before ranks are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct UserScore {
    pub user_id: i32,
    pub user_name: String,
    pub total_score: i64,
    pub scored_posts: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub score: UserScore,
}

impl LeaderboardEntry {
    pub fn into_dto(self) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            rank: self.rank,
            user_id: self.score.user_id,
            user_name: self.score.user_name,
            total_score: self.score.total_score,
            scored_posts: self.score.scored_posts,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedLeaderboard {
    pub entries: Vec<LeaderboardEntry>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedLeaderboard {
    pub fn into_dto(self) -> PaginatedLeaderboardDto {
        PaginatedLeaderboardDto {
            entries: self
                .entries
                .into_iter()
                .map(LeaderboardEntry::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
