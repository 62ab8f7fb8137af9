//! Ranking post repository.
//!
//! A ranking is stored as `post_rank` → `rank_table` → `rank_row` → `rank_column`. Every
//! cell of the grid is stored, with a null team for empty cells.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::{
    model::post::PostKind,
    server::{
        data::post::{kind_values, team_names, write_marks},
        model::{
            post::{NewPost, PostHeader, RankCell, RankingPost, RankingSubmission},
            results::PostScore,
        },
    },
};

pub struct RankingPostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RankingPostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a ranking post and its full grid.
    ///
    /// Cells missing from `submission.cells` are stored empty.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new post
    pub async fn create(&self, post: NewPost, submission: &RankingSubmission) -> Result<i32, DbErr> {
        let post_row = entity::post_rank::ActiveModel {
            prediction_id: ActiveValue::Set(post.prediction_id),
            user_id: ActiveValue::Set(post.user_id),
            template_id: ActiveValue::Set(submission.template_id),
            kind: ActiveValue::Set(post.kind.as_str().to_string()),
            score: ActiveValue::Set(None),
            max_score: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let table = entity::rank_table::ActiveModel {
            post_rank_id: ActiveValue::Set(post_row.id),
            number_of_rows: ActiveValue::Set(submission.number_of_rows),
            number_of_columns: ActiveValue::Set(submission.number_of_columns),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let filled: HashMap<(i32, i32), Option<i32>> = submission
            .cells
            .iter()
            .map(|c| ((c.row, c.column), c.team_id))
            .collect();

        for row_index in 0..submission.number_of_rows {
            let row = entity::rank_row::ActiveModel {
                rank_table_id: ActiveValue::Set(table.id),
                row_index: ActiveValue::Set(row_index),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            let columns: Vec<entity::rank_column::ActiveModel> = (0..submission.number_of_columns)
                .map(|column_index| entity::rank_column::ActiveModel {
                    rank_row_id: ActiveValue::Set(row.id),
                    column_index: ActiveValue::Set(column_index),
                    team_id: ActiveValue::Set(
                        filled.get(&(row_index, column_index)).copied().flatten(),
                    ),
                    correct: ActiveValue::Set(None),
                    ..Default::default()
                })
                .collect();

            entity::prelude::RankColumn::insert_many(columns)
                .exec(self.db)
                .await?;
        }

        Ok(post_row.id)
    }

    pub async fn find_header(&self, id: i32) -> Result<Option<PostHeader>, DbErr> {
        let Some((post, user)) = entity::prelude::PostRank::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(PostHeader::from_ranking(post, user)?))
    }

    /// Gets the headers of a prediction's ranking posts of the given kinds, oldest first.
    pub async fn headers(
        &self,
        prediction_id: i32,
        kinds: &[PostKind],
    ) -> Result<Vec<PostHeader>, DbErr> {
        let rows = entity::prelude::PostRank::find()
            .filter(entity::post_rank::Column::PredictionId.eq(prediction_id))
            .filter(entity::post_rank::Column::Kind.is_in(kind_values(kinds)))
            .order_by_asc(entity::post_rank::Column::CreatedAt)
            .order_by_asc(entity::post_rank::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(post, user)| PostHeader::from_ranking(post, user))
            .collect()
    }

    /// Finds the ranking post `user_id` submitted on the prediction with the given kind.
    pub async fn find_header_by_user(
        &self,
        prediction_id: i32,
        user_id: i32,
        kind: PostKind,
    ) -> Result<Option<PostHeader>, DbErr> {
        let row = entity::prelude::PostRank::find()
            .filter(entity::post_rank::Column::PredictionId.eq(prediction_id))
            .filter(entity::post_rank::Column::UserId.eq(user_id))
            .filter(entity::post_rank::Column::Kind.eq(kind.as_str()))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        row.map(|(post, user)| PostHeader::from_ranking(post, user))
            .transpose()
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<RankingPost>, DbErr> {
        let Some(header) = self.find_header(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.load(header).await?))
    }

    /// Loads the grid belonging to `header`.
    pub async fn load(&self, header: PostHeader) -> Result<RankingPost, DbErr> {
        let table = entity::prelude::RankTable::find()
            .filter(entity::rank_table::Column::PostRankId.eq(header.id))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Rank table for ranking post {} not found",
                header.id
            )))?;

        let rows = entity::prelude::RankRow::find()
            .filter(entity::rank_row::Column::RankTableId.eq(table.id))
            .all(self.db)
            .await?;
        let row_index: HashMap<i32, i32> = rows.iter().map(|r| (r.id, r.row_index)).collect();

        let columns = if rows.is_empty() {
            Vec::new()
        } else {
            entity::prelude::RankColumn::find()
                .filter(entity::rank_column::Column::RankRowId.is_in(row_index.keys().copied()))
                .all(self.db)
                .await?
        };

        let names = team_names(self.db, columns.iter().filter_map(|c| c.team_id).collect()).await?;

        let mut cells: Vec<RankCell> = columns
            .into_iter()
            .map(|c| RankCell {
                id: c.id,
                row: row_index.get(&c.rank_row_id).copied().unwrap_or_default(),
                column: c.column_index,
                team_name: c.team_id.and_then(|id| names.get(&id).cloned()),
                team_id: c.team_id,
                correct: c.correct,
            })
            .collect();
        cells.sort_by_key(|c| (c.row, c.column));

        Ok(RankingPost {
            header,
            number_of_rows: table.number_of_rows,
            number_of_columns: table.number_of_columns,
            cells,
        })
    }

    /// Loads every ranking post of the given kinds on a prediction.
    pub async fn find_all(
        &self,
        prediction_id: i32,
        kinds: &[PostKind],
    ) -> Result<Vec<RankingPost>, DbErr> {
        let mut posts = Vec::new();
        for header in self.headers(prediction_id, kinds).await? {
            posts.push(self.load(header).await?);
        }

        Ok(posts)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PostRank::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every ranking post of `kind` on the prediction.
    pub async fn delete_by_kind(&self, prediction_id: i32, kind: PostKind) -> Result<u64, DbErr> {
        let result = entity::prelude::PostRank::delete_many()
            .filter(entity::post_rank::Column::PredictionId.eq(prediction_id))
            .filter(entity::post_rank::Column::Kind.eq(kind.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Persists the score of one post and the correctness of each of its cells.
    pub async fn save_score(&self, post_id: i32, score: &PostScore) -> Result<(), DbErr> {
        entity::prelude::PostRank::update_many()
            .col_expr(entity::post_rank::Column::Score, Expr::value(score.score))
            .col_expr(
                entity::post_rank::Column::MaxScore,
                Expr::value(score.max_score),
            )
            .filter(entity::post_rank::Column::Id.eq(post_id))
            .exec(self.db)
            .await?;

        write_marks::<entity::prelude::RankColumn, _>(
            self.db,
            entity::rank_column::Column::Id,
            entity::rank_column::Column::Correct,
            score,
        )
        .await
    }

    /// Removes scores and correctness flags from every ranking post of the prediction.
    ///
    /// Used when the official result is withdrawn.
    pub async fn clear_scores(&self, prediction_id: i32) -> Result<(), DbErr> {
        entity::prelude::PostRank::update_many()
            .col_expr(entity::post_rank::Column::Score, Expr::value(Option::<i32>::None))
            .col_expr(
                entity::post_rank::Column::MaxScore,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::post_rank::Column::PredictionId.eq(prediction_id))
            .exec(self.db)
            .await?;

        let cell_ids: Vec<i32> = entity::prelude::RankColumn::find()
            .select_only()
            .column(entity::rank_column::Column::Id)
            .join(JoinType::InnerJoin, entity::rank_column::Relation::RankRow.def())
            .join(JoinType::InnerJoin, entity::rank_row::Relation::RankTable.def())
            .join(JoinType::InnerJoin, entity::rank_table::Relation::PostRank.def())
            .filter(entity::post_rank::Column::PredictionId.eq(prediction_id))
            .into_tuple()
            .all(self.db)
            .await?;

        if cell_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::RankColumn::update_many()
            .col_expr(
                entity::rank_column::Column::Correct,
                Expr::value(Option::<bool>::None),
            )
            .filter(entity::rank_column::Column::Id.is_in(cell_ids))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
