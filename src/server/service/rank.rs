//! Global leaderboard over scored posts.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::leaderboard::LeaderboardRepository,
    error::AppError,
    model::rank::{LeaderboardEntry, PaginatedLeaderboard},
    service::scoring::competition_ranks,
    util::pagination::{offset, per_page, total_pages},
};

pub struct RankService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ranks users by their total score, optionally within one category.
    ///
    /// Equal totals share a rank and are ordered by name.
    pub async fn get_leaderboard(
        &self,
        category_id: Option<i32>,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedLeaderboard, AppError> {
        let per_page = per_page(entries);
        let skip = usize::try_from(offset(page, per_page)?).unwrap_or(usize::MAX);

        let mut totals = LeaderboardRepository::new(self.db)
            .user_totals(category_id)
            .await?;
        totals.sort_by(|a, b| {
            b.total_score
                .cmp(&a.total_score)
                .then_with(|| a.user_name.cmp(&b.user_name))
                .then(a.user_id.cmp(&b.user_id))
        });

        let scores: Vec<i64> = totals.iter().map(|t| t.total_score).collect();
        let ranks = competition_ranks(&scores);
        let total = totals.len() as u64;

        let entries = totals
            .into_iter()
            .zip(ranks)
            .skip(skip)
            .take(per_page as usize)
            .map(|(score, rank)| LeaderboardEntry { rank, score })
            .collect();

        Ok(PaginatedLeaderboard {
            entries,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
