//! Aggregation of scored posts into per-user totals.
//!
//! Scores live on the three post tables. Each table is queried for the scored original
//! and counter posts, optionally restricted to predictions of one category, and the rows
//! are summed per user.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait,
};
use std::collections::HashMap;

use crate::{
    model::post::PostKind,
    server::{data::post::kind_values, model::rank::UserScore},
};

pub struct LeaderboardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sums the scores of every user with at least one scored post.
    ///
    /// Unordered; callers sort and rank.
    pub async fn user_totals(&self, category_id: Option<i32>) -> Result<Vec<UserScore>, DbErr> {
        let scored_kinds = kind_values(&[PostKind::Original, PostKind::Counter]);
        let mut rows: Vec<(i32, i32)> = Vec::new();

        {
            use entity::post_rank::{Column, Relation};
            let mut query = entity::prelude::PostRank::find()
                .select_only()
                .column(Column::UserId)
                .column(Column::Score)
                .filter(Column::Kind.is_in(scored_kinds.clone()))
                .filter(Column::Score.is_not_null());
            if let Some(category_id) = category_id {
                query = query
                    .join(JoinType::InnerJoin, Relation::Prediction.def())
                    .filter(entity::prediction::Column::CategoryId.eq(category_id));
            }
            rows.extend(query.into_tuple::<(i32, i32)>().all(self.db).await?);
        }

        {
            use entity::post_bracket::{Column, Relation};
            let mut query = entity::prelude::PostBracket::find()
                .select_only()
                .column(Column::UserId)
                .column(Column::Score)
                .filter(Column::Kind.is_in(scored_kinds.clone()))
                .filter(Column::Score.is_not_null());
            if let Some(category_id) = category_id {
                query = query
                    .join(JoinType::InnerJoin, Relation::Prediction.def())
                    .filter(entity::prediction::Column::CategoryId.eq(category_id));
            }
            rows.extend(query.into_tuple::<(i32, i32)>().all(self.db).await?);
        }

        {
            use entity::post_bingo::{Column, Relation};
            let mut query = entity::prelude::PostBingo::find()
                .select_only()
                .column(Column::UserId)
                .column(Column::Score)
                .filter(Column::Kind.is_in(scored_kinds))
                .filter(Column::Score.is_not_null());
            if let Some(category_id) = category_id {
                query = query
                    .join(JoinType::InnerJoin, Relation::Prediction.def())
                    .filter(entity::prediction::Column::CategoryId.eq(category_id));
            }
            rows.extend(query.into_tuple::<(i32, i32)>().all(self.db).await?);
        }

        let mut totals: HashMap<i32, (i64, u64)> = HashMap::new();
        for (user_id, score) in rows {
            let entry = totals.entry(user_id).or_insert((0, 0));
            entry.0 += i64::from(score);
            entry.1 += 1;
        }

        if totals.is_empty() {
            return Ok(Vec::new());
        }

        let names: HashMap<i32, String> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(totals.keys().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        Ok(totals
            .into_iter()
            .map(|(user_id, (total_score, scored_posts))| UserScore {
                user_id,
                user_name: names.get(&user_id).cloned().unwrap_or_default(),
                total_score,
                scored_posts,
            })
            .collect())
    }

    /// Sum of one user's scored posts across all categories.
    pub async fn total_for_user(&self, user_id: i32) -> Result<i64, DbErr> {
        let scored_kinds = kind_values(&[PostKind::Original, PostKind::Counter]);
        let mut total = 0;

        {
            use entity::post_rank::Column;
            total += entity::prelude::PostRank::find()
                .select_only()
                .column_as(Column::Score.sum(), "total")
                .filter(Column::UserId.eq(user_id))
                .filter(Column::Kind.is_in(scored_kinds.clone()))
                .into_tuple::<Option<i64>>()
                .one(self.db)
                .await?
                .flatten()
                .unwrap_or(0);
        }

        {
            use entity::post_bracket::Column;
            total += entity::prelude::PostBracket::find()
                .select_only()
                .column_as(Column::Score.sum(), "total")
                .filter(Column::UserId.eq(user_id))
                .filter(Column::Kind.is_in(scored_kinds.clone()))
                .into_tuple::<Option<i64>>()
                .one(self.db)
                .await?
                .flatten()
                .unwrap_or(0);
        }

        {
            use entity::post_bingo::Column;
            total += entity::prelude::PostBingo::find()
                .select_only()
                .column_as(Column::Score.sum(), "total")
                .filter(Column::UserId.eq(user_id))
                .filter(Column::Kind.is_in(scored_kinds))
                .into_tuple::<Option<i64>>()
                .one(self.db)
                .await?
                .flatten()
                .unwrap_or(0);
        }

        Ok(total)
    }
}
