use chrono::{DateTime, Utc};

use crate::{
    model::{
        post::{PostFormat, PostKind},
        results::{PredictionResultsDto, ScoredCounterPredictionDto},
    },
    server::model::post::PostHeader,
};

/// A scored post placed in the standings of a prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub rank: u32,
    pub post_id: i32,
    pub kind: PostKind,
    pub user_id: i32,
    pub user_name: String,
    pub score: i32,
    pub max_score: i32,
    pub created_at: DateTime<Utc>,
}

impl ScoredEntry {
    pub fn into_dto(self) -> ScoredCounterPredictionDto {
        ScoredCounterPredictionDto {
            rank: self.rank,
            post_id: self.post_id,
            kind: self.kind,
            user_id: self.user_id,
            user_name: self.user_name,
            score: self.score,
            max_score: self.max_score,
            created_at: self.created_at,
        }
    }
}

/// Published results of one format and the standings they produce.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResults {
    pub prediction_id: i32,
    pub format: PostFormat,
    pub result: PostHeader,
    pub entries: Vec<ScoredEntry>,
}

impl PredictionResults {
    pub fn into_dto(self) -> PredictionResultsDto {
        PredictionResultsDto {
            prediction_id: self.prediction_id,
            format: self.format,
            result_post_id: self.result.id,
            published_at: self.result.created_at,
            entries: self.entries.into_iter().map(ScoredEntry::into_dto).collect(),
        }
    }
}

/// Outcome of scoring one post against the official result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostScore {
    pub score: i32,
    pub max_score: i32,
    /// Correctness of each stored cell or slot, keyed by its row id.
    /// `None` marks a cell that is not scored (empty or seeding).
    pub marks: Vec<(i32, Option<bool>)>,
}

impl PostScore {
    /// Splits the marks into ids marked correct, incorrect and unscored.
    pub fn partition_marks(&self) -> (Vec<i32>, Vec<i32>, Vec<i32>) {
        let mut correct = Vec::new();
        let mut incorrect = Vec::new();
        let mut unscored = Vec::new();

        for (id, mark) in &self.marks {
            match mark {
                Some(true) => correct.push(*id),
                Some(false) => incorrect.push(*id),
                None => unscored.push(*id),
            }
        }

        (correct, incorrect, unscored)
    }
}
