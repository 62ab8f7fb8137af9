//! Bingo post repository.
//!
//! A bingo card is stored as `post_bingo` (holding the grid size) and one `bingo_cell`
//! row per coordinate.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::{
    model::post::PostKind,
    server::{
        data::post::{kind_values, write_marks},
        model::{
            post::{BingoCell, BingoPost, BingoSubmission, NewPost, PostHeader},
            results::PostScore,
        },
    },
};

pub struct BingoPostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BingoPostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a bingo post and its cells.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new post
    pub async fn create(&self, post: NewPost, submission: &BingoSubmission) -> Result<i32, DbErr> {
        let post_row = entity::post_bingo::ActiveModel {
            prediction_id: ActiveValue::Set(post.prediction_id),
            user_id: ActiveValue::Set(post.user_id),
            template_id: ActiveValue::Set(submission.template_id),
            kind: ActiveValue::Set(post.kind.as_str().to_string()),
            grid_size: ActiveValue::Set(submission.grid_size),
            score: ActiveValue::Set(None),
            max_score: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let cells: Vec<entity::bingo_cell::ActiveModel> = submission
            .cells
            .iter()
            .map(|c| entity::bingo_cell::ActiveModel {
                post_bingo_id: ActiveValue::Set(post_row.id),
                row_index: ActiveValue::Set(c.row),
                column_index: ActiveValue::Set(c.column),
                content: ActiveValue::Set(c.content.clone()),
                checked: ActiveValue::Set(c.checked),
                correct: ActiveValue::Set(None),
                ..Default::default()
            })
            .collect();

        entity::prelude::BingoCell::insert_many(cells)
            .exec(self.db)
            .await?;

        Ok(post_row.id)
    }

    pub async fn find_header(&self, id: i32) -> Result<Option<PostHeader>, DbErr> {
        let Some((post, user)) = entity::prelude::PostBingo::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(PostHeader::from_bingo(post, user)?))
    }

    pub async fn headers(
        &self,
        prediction_id: i32,
        kinds: &[PostKind],
    ) -> Result<Vec<PostHeader>, DbErr> {
        let rows = entity::prelude::PostBingo::find()
            .filter(entity::post_bingo::Column::PredictionId.eq(prediction_id))
            .filter(entity::post_bingo::Column::Kind.is_in(kind_values(kinds)))
            .order_by_asc(entity::post_bingo::Column::CreatedAt)
            .order_by_asc(entity::post_bingo::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(post, user)| PostHeader::from_bingo(post, user))
            .collect()
    }

    pub async fn find_header_by_user(
        &self,
        prediction_id: i32,
        user_id: i32,
        kind: PostKind,
    ) -> Result<Option<PostHeader>, DbErr> {
        let row = entity::prelude::PostBingo::find()
            .filter(entity::post_bingo::Column::PredictionId.eq(prediction_id))
            .filter(entity::post_bingo::Column::UserId.eq(user_id))
            .filter(entity::post_bingo::Column::Kind.eq(kind.as_str()))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        row.map(|(post, user)| PostHeader::from_bingo(post, user))
            .transpose()
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<BingoPost>, DbErr> {
        let Some(header) = self.find_header(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.load(header).await?))
    }

    /// Loads the cells belonging to `header`, ordered by row then column.
    pub async fn load(&self, header: PostHeader) -> Result<BingoPost, DbErr> {
        let post = entity::prelude::PostBingo::find_by_id(header.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Bingo post {} not found",
                header.id
            )))?;

        let cells = entity::prelude::BingoCell::find()
            .filter(entity::bingo_cell::Column::PostBingoId.eq(header.id))
            .order_by_asc(entity::bingo_cell::Column::RowIndex)
            .order_by_asc(entity::bingo_cell::Column::ColumnIndex)
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| BingoCell {
                id: c.id,
                row: c.row_index,
                column: c.column_index,
                content: c.content,
                checked: c.checked,
                correct: c.correct,
            })
            .collect();

        Ok(BingoPost {
            header,
            grid_size: post.grid_size,
            cells,
        })
    }

    pub async fn find_all(
        &self,
        prediction_id: i32,
        kinds: &[PostKind],
    ) -> Result<Vec<BingoPost>, DbErr> {
        let mut posts = Vec::new();
        for header in self.headers(prediction_id, kinds).await? {
            posts.push(self.load(header).await?);
        }

        Ok(posts)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PostBingo::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_kind(&self, prediction_id: i32, kind: PostKind) -> Result<u64, DbErr> {
        let result = entity::prelude::PostBingo::delete_many()
            .filter(entity::post_bingo::Column::PredictionId.eq(prediction_id))
            .filter(entity::post_bingo::Column::Kind.eq(kind.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn save_score(&self, post_id: i32, score: &PostScore) -> Result<(), DbErr> {
        entity::prelude::PostBingo::update_many()
            .col_expr(entity::post_bingo::Column::Score, Expr::value(score.score))
            .col_expr(
                entity::post_bingo::Column::MaxScore,
                Expr::value(score.max_score),
            )
            .filter(entity::post_bingo::Column::Id.eq(post_id))
            .exec(self.db)
            .await?;

        write_marks::<entity::prelude::BingoCell, _>(
            self.db,
            entity::bingo_cell::Column::Id,
            entity::bingo_cell::Column::Correct,
            score,
        )
        .await
    }

    pub async fn clear_scores(&self, prediction_id: i32) -> Result<(), DbErr> {
        entity::prelude::PostBingo::update_many()
            .col_expr(
                entity::post_bingo::Column::Score,
                Expr::value(Option::<i32>::None),
            )
            .col_expr(
                entity::post_bingo::Column::MaxScore,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::post_bingo::Column::PredictionId.eq(prediction_id))
            .exec(self.db)
            .await?;

        let cell_ids: Vec<i32> = entity::prelude::BingoCell::find()
            .select_only()
            .column(entity::bingo_cell::Column::Id)
            .join(JoinType::InnerJoin, entity::bingo_cell::Relation::PostBingo.def())
            .filter(entity::post_bingo::Column::PredictionId.eq(prediction_id))
            .into_tuple()
            .all(self.db)
            .await?;

        if cell_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::BingoCell::update_many()
            .col_expr(
                entity::bingo_cell::Column::Correct,
                Expr::value(Option::<bool>::None),
            )
            .filter(entity::bingo_cell::Column::Id.is_in(cell_ids))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
