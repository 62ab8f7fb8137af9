//! Post repositories, one per format.
//!
//! Every format stores a header row (`post_rank`, `post_bracket`, `post_bingo`) and a
//! tree of child rows holding the cells. The repositories write the whole tree on
//! create, load it back into the domain model, and persist scoring outcomes.

pub mod bingo;
pub mod bracket;
pub mod ranking;

use sea_orm::{sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::{
    model::post::{PostFormat, PostKind},
    server::{
        data::post::{
            bingo::BingoPostRepository, bracket::BracketPostRepository,
            ranking::RankingPostRepository,
        },
        model::{
            post::{NewPost, Post, PostHeader, PostSummary, Submission},
            results::PostScore,
        },
    },
};

/// Format-agnostic access to the three post repositories.
///
/// Dispatches on `PostFormat` (or the `Submission`/`Post` variant) so services can
/// handle every format with one code path.
pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a post and returns its id.
    pub async fn create(&self, post: NewPost, submission: &Submission) -> Result<i32, DbErr> {
        match submission {
            Submission::Ranking(s) => RankingPostRepository::new(self.db).create(post, s).await,
            Submission::Bracket(s) => BracketPostRepository::new(self.db).create(post, s).await,
            Submission::Bingo(s) => BingoPostRepository::new(self.db).create(post, s).await,
        }
    }

    pub async fn find_header(&self, format: PostFormat, id: i32) -> Result<Option<PostHeader>, DbErr> {
        match format {
            PostFormat::Ranking => RankingPostRepository::new(self.db).find_header(id).await,
            PostFormat::Bracket => BracketPostRepository::new(self.db).find_header(id).await,
            PostFormat::Bingo => BingoPostRepository::new(self.db).find_header(id).await,
        }
    }

    /// Headers of one format's posts of the given kinds, oldest first.
    pub async fn headers(
        &self,
        format: PostFormat,
        prediction_id: i32,
        kinds: &[PostKind],
    ) -> Result<Vec<PostHeader>, DbErr> {
        match format {
            PostFormat::Ranking => {
                RankingPostRepository::new(self.db)
                    .headers(prediction_id, kinds)
                    .await
            }
            PostFormat::Bracket => {
                BracketPostRepository::new(self.db)
                    .headers(prediction_id, kinds)
                    .await
            }
            PostFormat::Bingo => {
                BingoPostRepository::new(self.db)
                    .headers(prediction_id, kinds)
                    .await
            }
        }
    }

    /// Summaries of every post of a prediction across all formats, oldest first.
    pub async fn summaries(&self, prediction_id: i32) -> Result<Vec<PostSummary>, DbErr> {
        let kinds = [PostKind::Original, PostKind::Counter, PostKind::Result];
        let mut summaries = Vec::new();

        for format in [PostFormat::Ranking, PostFormat::Bracket, PostFormat::Bingo] {
            for header in self.headers(format, prediction_id, &kinds).await? {
                summaries.push(PostSummary { format, header });
            }
        }
        summaries.sort_by_key(|s| (s.header.created_at, s.header.id));

        Ok(summaries)
    }

    pub async fn find_header_by_user(
        &self,
        format: PostFormat,
        prediction_id: i32,
        user_id: i32,
        kind: PostKind,
    ) -> Result<Option<PostHeader>, DbErr> {
        match format {
            PostFormat::Ranking => {
                RankingPostRepository::new(self.db)
                    .find_header_by_user(prediction_id, user_id, kind)
                    .await
            }
            PostFormat::Bracket => {
                BracketPostRepository::new(self.db)
                    .find_header_by_user(prediction_id, user_id, kind)
                    .await
            }
            PostFormat::Bingo => {
                BingoPostRepository::new(self.db)
                    .find_header_by_user(prediction_id, user_id, kind)
                    .await
            }
        }
    }

    /// Finds the single post of `kind` for a format, regardless of author.
    ///
    /// Used for the original and the result, of which a prediction holds at most one
    /// per format.
    pub async fn find_single(
        &self,
        format: PostFormat,
        prediction_id: i32,
        kind: PostKind,
    ) -> Result<Option<Post>, DbErr> {
        let header = self
            .headers(format, prediction_id, &[kind])
            .await?
            .into_iter()
            .next();

        match header {
            Some(header) => Ok(Some(self.load(format, header).await?)),
            None => Ok(None),
        }
    }

    pub async fn find_by_id(&self, format: PostFormat, id: i32) -> Result<Option<Post>, DbErr> {
        let Some(header) = self.find_header(format, id).await? else {
            return Ok(None);
        };

        Ok(Some(self.load(format, header).await?))
    }

    /// Loads the body belonging to `header`.
    pub async fn load(&self, format: PostFormat, header: PostHeader) -> Result<Post, DbErr> {
        let post = match format {
            PostFormat::Ranking => Post::Ranking(RankingPostRepository::new(self.db).load(header).await?),
            PostFormat::Bracket => Post::Bracket(BracketPostRepository::new(self.db).load(header).await?),
            PostFormat::Bingo => Post::Bingo(BingoPostRepository::new(self.db).load(header).await?),
        };

        Ok(post)
    }

    /// Loads every post of the given kinds for one format, oldest first.
    pub async fn find_all(
        &self,
        format: PostFormat,
        prediction_id: i32,
        kinds: &[PostKind],
    ) -> Result<Vec<Post>, DbErr> {
        let mut posts = Vec::new();
        for header in self.headers(format, prediction_id, kinds).await? {
            posts.push(self.load(format, header).await?);
        }

        Ok(posts)
    }

    pub async fn delete(&self, format: PostFormat, id: i32) -> Result<bool, DbErr> {
        match format {
            PostFormat::Ranking => RankingPostRepository::new(self.db).delete(id).await,
            PostFormat::Bracket => BracketPostRepository::new(self.db).delete(id).await,
            PostFormat::Bingo => BingoPostRepository::new(self.db).delete(id).await,
        }
    }

    pub async fn delete_by_kind(
        &self,
        format: PostFormat,
        prediction_id: i32,
        kind: PostKind,
    ) -> Result<u64, DbErr> {
        match format {
            PostFormat::Ranking => {
                RankingPostRepository::new(self.db)
                    .delete_by_kind(prediction_id, kind)
                    .await
            }
            PostFormat::Bracket => {
                BracketPostRepository::new(self.db)
                    .delete_by_kind(prediction_id, kind)
                    .await
            }
            PostFormat::Bingo => {
                BingoPostRepository::new(self.db)
                    .delete_by_kind(prediction_id, kind)
                    .await
            }
        }
    }

    pub async fn save_score(
        &self,
        format: PostFormat,
        post_id: i32,
        score: &PostScore,
    ) -> Result<(), DbErr> {
        match format {
            PostFormat::Ranking => RankingPostRepository::new(self.db).save_score(post_id, score).await,
            PostFormat::Bracket => BracketPostRepository::new(self.db).save_score(post_id, score).await,
            PostFormat::Bingo => BingoPostRepository::new(self.db).save_score(post_id, score).await,
        }
    }

    /// Removes every score of one format from the prediction's posts.
    pub async fn clear_scores(&self, format: PostFormat, prediction_id: i32) -> Result<(), DbErr> {
        match format {
            PostFormat::Ranking => RankingPostRepository::new(self.db).clear_scores(prediction_id).await,
            PostFormat::Bracket => BracketPostRepository::new(self.db).clear_scores(prediction_id).await,
            PostFormat::Bingo => BingoPostRepository::new(self.db).clear_scores(prediction_id).await,
        }
    }
}

/// Writes the correctness flags of a `PostScore` to a cell table.
///
/// Issues at most three updates: ids marked correct, incorrect and unscored.
pub(crate) async fn write_marks<E: EntityTrait, C: ConnectionTrait>(
    db: &C,
    id_column: E::Column,
    correct_column: E::Column,
    score: &PostScore,
) -> Result<(), DbErr> {
    let (correct, incorrect, unscored) = score.partition_marks();

    for (ids, flag) in [(correct, Some(true)), (incorrect, Some(false)), (unscored, None)] {
        if ids.is_empty() {
            continue;
        }

        E::update_many()
            .col_expr(correct_column, Expr::value(flag))
            .filter(id_column.is_in(ids))
            .exec(db)
            .await?;
    }

    Ok(())
}

/// Loads the names of the given teams in one query.
pub(crate) async fn team_names<C: ConnectionTrait>(
    db: &C,
    team_ids: Vec<i32>,
) -> Result<std::collections::HashMap<i32, String>, DbErr> {
    if team_ids.is_empty() {
        return Ok(std::collections::HashMap::new());
    }

    let teams = entity::prelude::Team::find()
        .filter(entity::team::Column::Id.is_in(team_ids))
        .all(db)
        .await?;

    Ok(teams.into_iter().map(|t| (t.id, t.name)).collect())
}

/// Storage values of a set of kinds, for `is_in` filters.
pub(crate) fn kind_values(kinds: &[PostKind]) -> Vec<String> {
    kinds.iter().map(|k| k.as_str().to_string()).collect()
}
