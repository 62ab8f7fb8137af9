use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The three prediction formats. Used as the `{format}` path segment.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PostFormat {
    Ranking,
    Bracket,
    Bingo,
}

impl PostFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ranking => "ranking",
            Self::Bracket => "bracket",
            Self::Bingo => "bingo",
        }
    }
}

/// Role of a post within its prediction.
///
/// `Original` is the prediction owner's forecast, `Counter` a competing forecast by
/// another user and `Result` the official outcome used for scoring.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Original,
    Counter,
    Result,
}

impl PostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Counter => "counter",
            Self::Result => "result",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "original" => Some(Self::Original),
            "counter" => Some(Self::Counter),
            "result" => Some(Self::Result),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PostSummaryDto {
    pub id: i32,
    pub format: PostFormat,
    pub kind: PostKind,
    pub prediction_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub score: Option<i32>,
    pub max_score: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RankCellDto {
    pub row: i32,
    pub column: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub correct: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RankingPostDto {
    pub id: i32,
    pub prediction_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub template_id: Option<i32>,
    pub kind: PostKind,
    pub number_of_rows: i32,
    pub number_of_columns: i32,
    pub cells: Vec<RankCellDto>,
    pub score: Option<i32>,
    pub max_score: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RankCellInputDto {
    pub row: i32,
    pub column: i32,
    pub team_id: Option<i32>,
}

/// Request body for a ranking post. Cells left out of `cells` stay empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateRankingDto {
    #[serde(default)]
    pub template_id: Option<i32>,
    pub number_of_rows: i32,
    pub number_of_columns: i32,
    pub cells: Vec<RankCellInputDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BracketSlotDto {
    pub round: i32,
    pub position: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub correct: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BracketPostDto {
    pub id: i32,
    pub prediction_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub template_id: Option<i32>,
    pub kind: PostKind,
    pub number_of_rounds: i32,
    pub slots: Vec<BracketSlotDto>,
    pub score: Option<i32>,
    pub max_score: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BracketSlotInputDto {
    pub round: i32,
    pub position: i32,
    pub team_id: Option<i32>,
}

/// Request body for a bracket post.
///
/// Round 0 holds the seeding; round `r` holds the teams advancing out of round `r - 1`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateBracketDto {
    #[serde(default)]
    pub template_id: Option<i32>,
    pub number_of_rounds: i32,
    pub slots: Vec<BracketSlotInputDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BingoCellDto {
    pub row: i32,
    pub column: i32,
    pub content: String,
    pub checked: bool,
    pub correct: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BingoPostDto {
    pub id: i32,
    pub prediction_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub template_id: Option<i32>,
    pub kind: PostKind,
    pub grid_size: i32,
    pub cells: Vec<BingoCellDto>,
    pub score: Option<i32>,
    pub max_score: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BingoCellInputDto {
    pub row: i32,
    pub column: i32,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub checked: bool,
}

/// Request body for a bingo post. Counter-predictions and results reuse the
/// original's cell contents, so only `checked` is read for them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateBingoDto {
    #[serde(default)]
    pub template_id: Option<i32>,
    pub grid_size: i32,
    pub cells: Vec<BingoCellInputDto>,
}

/// Request body of any post format.
///
/// The formats are told apart by their dimension field (`number_of_rows`,
/// `number_of_rounds` or `grid_size`); the route's `{format}` must agree with it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum CreatePostDto {
    Ranking(CreateRankingDto),
    Bracket(CreateBracketDto),
    Bingo(CreateBingoDto),
}

impl CreatePostDto {
    pub fn format(&self) -> PostFormat {
        match self {
            Self::Ranking(_) => PostFormat::Ranking,
            Self::Bracket(_) => PostFormat::Bracket,
            Self::Bingo(_) => PostFormat::Bingo,
        }
    }
}

/// A full post of any format, tagged by `format`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum PostDto {
    Ranking(RankingPostDto),
    Bracket(BracketPostDto),
    Bingo(BingoPostDto),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_kind_parses_stored_values() {
        for kind in [PostKind::Original, PostKind::Counter, PostKind::Result] {
            assert_eq!(PostKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(PostKind::parse("draft"), None);
    }

    #[test]
    fn post_format_uses_lowercase_names() {
        let json = serde_json::to_string(&PostFormat::Bracket).unwrap();
        assert_eq!(json, "\"bracket\"");

        let format: PostFormat = serde_json::from_str("\"bingo\"").unwrap();
        assert_eq!(format, PostFormat::Bingo);
    }

    #[test]
    fn post_body_is_told_apart_by_dimension_field() {
        let bracket: CreatePostDto = serde_json::from_str(
            r#"{"number_of_rounds": 2, "slots": [{"round": 0, "position": 0, "team_id": 4}]}"#,
        )
        .unwrap();
        assert_eq!(bracket.format(), PostFormat::Bracket);

        let bingo: CreatePostDto = serde_json::from_str(
            r#"{"grid_size": 3, "cells": [{"row": 0, "column": 0, "checked": true}]}"#,
        )
        .unwrap();
        assert_eq!(bingo.format(), PostFormat::Bingo);

        let ranking: CreatePostDto = serde_json::from_str(
            r#"{"template_id": 1, "number_of_rows": 3, "number_of_columns": 1, "cells": []}"#,
        )
        .unwrap();
        assert_eq!(ranking.format(), PostFormat::Ranking);
    }
}
