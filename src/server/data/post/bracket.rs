//! Bracket post repository.
//!
//! A bracket is stored as `post_bracket` → `root_bracket` → `bracket` slots, one slot per
//! `(round, position)`. Round 0 holds `2^rounds` seeds; round `r` holds `2^(rounds - r)`
//! slots.

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
            post::{BracketPost, BracketSlot, BracketSubmission, NewPost, PostHeader},
            results::PostScore,
        },
    },
};

pub struct BracketPostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BracketPostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a bracket post with every slot of every round.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new post
    pub async fn create(&self, post: NewPost, submission: &BracketSubmission) -> Result<i32, DbErr> {
        let post_row = entity::post_bracket::ActiveModel {
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

        let root = entity::root_bracket::ActiveModel {
            post_bracket_id: ActiveValue::Set(post_row.id),
            number_of_rounds: ActiveValue::Set(submission.number_of_rounds),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let filled: HashMap<(i32, i32), Option<i32>> = submission
            .slots
            .iter()
            .map(|s| ((s.round, s.position), s.team_id))
            .collect();

        let rounds = submission.number_of_rounds;
        let mut slots = Vec::new();
        for round in 0..=rounds {
            for position in 0..(1_i32 << (rounds - round)) {
                slots.push(entity::bracket::ActiveModel {
                    root_bracket_id: ActiveValue::Set(root.id),
                    round: ActiveValue::Set(round),
                    position: ActiveValue::Set(position),
                    team_id: ActiveValue::Set(filled.get(&(round, position)).copied().flatten()),
                    correct: ActiveValue::Set(None),
                    ..Default::default()
                });
            }
        }

        entity::prelude::Bracket::insert_many(slots)
            .exec(self.db)
            .await?;

        Ok(post_row.id)
    }

    pub async fn find_header(&self, id: i32) -> Result<Option<PostHeader>, DbErr> {
        let Some((post, user)) = entity::prelude::PostBracket::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(PostHeader::from_bracket(post, user)?))
    }

    /// Gets the headers of a prediction's bracket posts of the given kinds, oldest first.
    pub async fn headers(
        &self,
        prediction_id: i32,
        kinds: &[PostKind],
    ) -> Result<Vec<PostHeader>, DbErr> {
        let rows = entity::prelude::PostBracket::find()
            .filter(entity::post_bracket::Column::PredictionId.eq(prediction_id))
            .filter(entity::post_bracket::Column::Kind.is_in(kind_values(kinds)))
            .order_by_asc(entity::post_bracket::Column::CreatedAt)
            .order_by_asc(entity::post_bracket::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(post, user)| PostHeader::from_bracket(post, user))
            .collect()
    }

    pub async fn find_header_by_user(
        &self,
        prediction_id: i32,
        user_id: i32,
        kind: PostKind,
    ) -> Result<Option<PostHeader>, DbErr> {
        let row = entity::prelude::PostBracket::find()
            .filter(entity::post_bracket::Column::PredictionId.eq(prediction_id))
            .filter(entity::post_bracket::Column::UserId.eq(user_id))
            .filter(entity::post_bracket::Column::Kind.eq(kind.as_str()))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        row.map(|(post, user)| PostHeader::from_bracket(post, user))
            .transpose()
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<BracketPost>, DbErr> {
        let Some(header) = self.find_header(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.load(header).await?))
    }

    /// Loads the slots belonging to `header`.
    pub async fn load(&self, header: PostHeader) -> Result<BracketPost, DbErr> {
        let root = entity::prelude::RootBracket::find()
            .filter(entity::root_bracket::Column::PostBracketId.eq(header.id))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Root bracket for bracket post {} not found",
                header.id
            )))?;

        let rows = entity::prelude::Bracket::find()
            .filter(entity::bracket::Column::RootBracketId.eq(root.id))
            .order_by_asc(entity::bracket::Column::Round)
            .order_by_asc(entity::bracket::Column::Position)
            .all(self.db)
            .await?;

        let names = team_names(self.db, rows.iter().filter_map(|s| s.team_id).collect()).await?;

        let slots = rows
            .into_iter()
            .map(|s| BracketSlot {
                id: s.id,
                round: s.round,
                position: s.position,
                team_name: s.team_id.and_then(|id| names.get(&id).cloned()),
                team_id: s.team_id,
                correct: s.correct,
            })
            .collect();

        Ok(BracketPost {
            header,
            number_of_rounds: root.number_of_rounds,
            slots,
        })
    }

    pub async fn find_all(
        &self,
        prediction_id: i32,
        kinds: &[PostKind],
    ) -> Result<Vec<BracketPost>, DbErr> {
        let mut posts = Vec::new();
        for header in self.headers(prediction_id, kinds).await? {
            posts.push(self.load(header).await?);
        }

        Ok(posts)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PostBracket::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_kind(&self, prediction_id: i32, kind: PostKind) -> Result<u64, DbErr> {
        let result = entity::prelude::PostBracket::delete_many()
            .filter(entity::post_bracket::Column::PredictionId.eq(prediction_id))
            .filter(entity::post_bracket::Column::Kind.eq(kind.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn save_score(&self, post_id: i32, score: &PostScore) -> Result<(), DbErr> {
        entity::prelude::PostBracket::update_many()
            .col_expr(entity::post_bracket::Column::Score, Expr::value(score.score))
            .col_expr(
                entity::post_bracket::Column::MaxScore,
                Expr::value(score.max_score),
            )
            .filter(entity::post_bracket::Column::Id.eq(post_id))
            .exec(self.db)
            .await?;

        write_marks::<entity::prelude::Bracket, _>(
            self.db,
            entity::bracket::Column::Id,
            entity::bracket::Column::Correct,
            score,
        )
        .await
    }

    pub async fn clear_scores(&self, prediction_id: i32) -> Result<(), DbErr> {
        entity::prelude::PostBracket::update_many()
            .col_expr(
                entity::post_bracket::Column::Score,
                Expr::value(Option::<i32>::None),
            )
            .col_expr(
                entity::post_bracket::Column::MaxScore,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::post_bracket::Column::PredictionId.eq(prediction_id))
            .exec(self.db)
            .await?;

        let slot_ids: Vec<i32> = entity::prelude::Bracket::find()
            .select_only()
            .column(entity::bracket::Column::Id)
            .join(JoinType::InnerJoin, entity::bracket::Relation::RootBracket.def())
            .join(
                JoinType::InnerJoin,
                entity::root_bracket::Relation::PostBracket.def(),
            )
            .filter(entity::post_bracket::Column::PredictionId.eq(prediction_id))
            .into_tuple()
            .all(self.db)
            .await?;

        if slot_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::Bracket::update_many()
            .col_expr(
                entity::bracket::Column::Correct,
                Expr::value(Option::<bool>::None),
            )
            .filter(entity::bracket::Column::Id.is_in(slot_ids))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
