//! Post domain models and submissions.
//!
//! A post is one format-specific body attached to a prediction: a ranking grid, a
//! knockout bracket or a bingo card. Every post carries a `PostHeader` with its author,
//! kind and score; the body differs per format. Submissions are the validated inputs a
//! service hands to the repositories.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::post::{
        BingoCellDto, BingoPostDto, BracketPostDto, BracketSlotDto, CreateBingoDto,
        CreateBracketDto, CreatePostDto, CreateRankingDto, PostDto, PostFormat, PostKind,
        PostSummaryDto, RankCellDto, RankingPostDto,
    },
    server::model::unknown_value,
};

/// Columns shared by the three post tables.
#[derive(Debug, Clone, PartialEq)]
pub struct PostHeader {
    pub id: i32,
    pub prediction_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub template_id: Option<i32>,
    pub kind: PostKind,
    pub score: Option<i32>,
    pub max_score: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl PostHeader {
    pub fn parse_kind(value: &str) -> Result<PostKind, DbErr> {
        PostKind::parse(value).ok_or_else(|| unknown_value("post kind", value))
    }

    pub fn from_ranking(
        entity: entity::post_rank::Model,
        user: Option<entity::user::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            prediction_id: entity.prediction_id,
            user_id: entity.user_id,
            user_name: user.map(|u| u.name).unwrap_or_default(),
            template_id: entity.template_id,
            kind: Self::parse_kind(&entity.kind)?,
            score: entity.score,
            max_score: entity.max_score,
            created_at: entity.created_at,
        })
    }

    pub fn from_bracket(
        entity: entity::post_bracket::Model,
        user: Option<entity::user::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            prediction_id: entity.prediction_id,
            user_id: entity.user_id,
            user_name: user.map(|u| u.name).unwrap_or_default(),
            template_id: entity.template_id,
            kind: Self::parse_kind(&entity.kind)?,
            score: entity.score,
            max_score: entity.max_score,
            created_at: entity.created_at,
        })
    }

    pub fn from_bingo(
        entity: entity::post_bingo::Model,
        user: Option<entity::user::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            prediction_id: entity.prediction_id,
            user_id: entity.user_id,
            user_name: user.map(|u| u.name).unwrap_or_default(),
            template_id: entity.template_id,
            kind: Self::parse_kind(&entity.kind)?,
            score: entity.score,
            max_score: entity.max_score,
            created_at: entity.created_at,
        })
    }
}

/// A post header tagged with its format, as listed on a prediction page.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub format: PostFormat,
    pub header: PostHeader,
}

impl PostSummary {
    pub fn into_dto(self) -> PostSummaryDto {
        PostSummaryDto {
            id: self.header.id,
            format: self.format,
            kind: self.header.kind,
            prediction_id: self.header.prediction_id,
            user_id: self.header.user_id,
            user_name: self.header.user_name,
            score: self.header.score,
            max_score: self.header.max_score,
            created_at: self.header.created_at,
        }
    }
}

/// One cell of a ranking grid. `id` is the stored `rank_column` row.
#[derive(Debug, Clone, PartialEq)]
pub struct RankCell {
    pub id: i32,
    pub row: i32,
    pub column: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub correct: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingPost {
    pub header: PostHeader,
    pub number_of_rows: i32,
    pub number_of_columns: i32,
    /// Every cell of the grid ordered by row, then column.
    pub cells: Vec<RankCell>,
}

impl RankingPost {
    pub fn into_dto(self) -> RankingPostDto {
        RankingPostDto {
            id: self.header.id,
            prediction_id: self.header.prediction_id,
            user_id: self.header.user_id,
            user_name: self.header.user_name,
            template_id: self.header.template_id,
            kind: self.header.kind,
            number_of_rows: self.number_of_rows,
            number_of_columns: self.number_of_columns,
            cells: self
                .cells
                .into_iter()
                .map(|c| RankCellDto {
                    row: c.row,
                    column: c.column,
                    team_id: c.team_id,
                    team_name: c.team_name,
                    correct: c.correct,
                })
                .collect(),
            score: self.header.score,
            max_score: self.header.max_score,
            created_at: self.header.created_at,
        }
    }
}

/// One slot of a bracket. Round 0 is the seeding.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketSlot {
    pub id: i32,
    pub round: i32,
    pub position: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub correct: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BracketPost {
    pub header: PostHeader,
    pub number_of_rounds: i32,
    /// Every slot ordered by round, then position.
    pub slots: Vec<BracketSlot>,
}

impl BracketPost {
    pub fn into_dto(self) -> BracketPostDto {
        BracketPostDto {
            id: self.header.id,
            prediction_id: self.header.prediction_id,
            user_id: self.header.user_id,
            user_name: self.header.user_name,
            template_id: self.header.template_id,
            kind: self.header.kind,
            number_of_rounds: self.number_of_rounds,
            slots: self
                .slots
                .into_iter()
                .map(|s| BracketSlotDto {
                    round: s.round,
                    position: s.position,
                    team_id: s.team_id,
                    team_name: s.team_name,
                    correct: s.correct,
                })
                .collect(),
            score: self.header.score,
            max_score: self.header.max_score,
            created_at: self.header.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BingoCell {
    pub id: i32,
    pub row: i32,
    pub column: i32,
    pub content: String,
    pub checked: bool,
    pub correct: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BingoPost {
    pub header: PostHeader,
    pub grid_size: i32,
    /// Every cell ordered by row, then column.
    pub cells: Vec<BingoCell>,
}

impl BingoPost {
    pub fn into_dto(self) -> BingoPostDto {
        BingoPostDto {
            id: self.header.id,
            prediction_id: self.header.prediction_id,
            user_id: self.header.user_id,
            user_name: self.header.user_name,
            template_id: self.header.template_id,
            kind: self.header.kind,
            grid_size: self.grid_size,
            cells: self
                .cells
                .into_iter()
                .map(|c| BingoCellDto {
                    row: c.row,
                    column: c.column,
                    content: c.content,
                    checked: c.checked,
                    correct: c.correct,
                })
                .collect(),
            score: self.header.score,
            max_score: self.header.max_score,
            created_at: self.header.created_at,
        }
    }
}

/// Who is submitting a post, to which prediction and in which role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewPost {
    pub prediction_id: i32,
    pub user_id: i32,
    pub kind: PostKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankCellInput {
    pub row: i32,
    pub column: i32,
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingSubmission {
    pub template_id: Option<i32>,
    pub number_of_rows: i32,
    pub number_of_columns: i32,
    /// Filled cells only; cells not listed are stored empty.
    pub cells: Vec<RankCellInput>,
}

impl RankingSubmission {
    pub fn from_dto(dto: CreateRankingDto) -> Self {
        Self {
            template_id: dto.template_id,
            number_of_rows: dto.number_of_rows,
            number_of_columns: dto.number_of_columns,
            cells: dto
                .cells
                .into_iter()
                .map(|c| RankCellInput {
                    row: c.row,
                    column: c.column,
                    team_id: c.team_id,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketSlotInput {
    pub round: i32,
    pub position: i32,
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BracketSubmission {
    pub template_id: Option<i32>,
    pub number_of_rounds: i32,
    /// Filled slots only; slots not listed are stored empty.
    pub slots: Vec<BracketSlotInput>,
}

impl BracketSubmission {
    pub fn from_dto(dto: CreateBracketDto) -> Self {
        Self {
            template_id: dto.template_id,
            number_of_rounds: dto.number_of_rounds,
            slots: dto
                .slots
                .into_iter()
                .map(|s| BracketSlotInput {
                    round: s.round,
                    position: s.position,
                    team_id: s.team_id,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BingoCellInput {
    pub row: i32,
    pub column: i32,
    pub content: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BingoSubmission {
    pub template_id: Option<i32>,
    pub grid_size: i32,
    pub cells: Vec<BingoCellInput>,
}

impl BingoSubmission {
    pub fn from_dto(dto: CreateBingoDto) -> Self {
        Self {
            template_id: dto.template_id,
            grid_size: dto.grid_size,
            cells: dto
                .cells
                .into_iter()
                .map(|c| BingoCellInput {
                    row: c.row,
                    column: c.column,
                    content: c.content.trim().to_string(),
                    checked: c.checked,
                })
                .collect(),
        }
    }
}

/// A validated post body of any format.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Ranking(RankingSubmission),
    Bracket(BracketSubmission),
    Bingo(BingoSubmission),
}

impl Submission {
    pub fn from_dto(dto: CreatePostDto) -> Self {
        match dto {
            CreatePostDto::Ranking(dto) => Self::Ranking(RankingSubmission::from_dto(dto)),
            CreatePostDto::Bracket(dto) => Self::Bracket(BracketSubmission::from_dto(dto)),
            CreatePostDto::Bingo(dto) => Self::Bingo(BingoSubmission::from_dto(dto)),
        }
    }

    pub fn format(&self) -> PostFormat {
        match self {
            Self::Ranking(_) => PostFormat::Ranking,
            Self::Bracket(_) => PostFormat::Bracket,
            Self::Bingo(_) => PostFormat::Bingo,
        }
    }

    pub fn template_id(&self) -> Option<i32> {
        match self {
            Self::Ranking(s) => s.template_id,
            Self::Bracket(s) => s.template_id,
            Self::Bingo(s) => s.template_id,
        }
    }

    /// Teams referenced anywhere in the body.
    pub fn team_ids(&self) -> Vec<i32> {
        match self {
            Self::Ranking(s) => s.cells.iter().filter_map(|c| c.team_id).collect(),
            Self::Bracket(s) => s.slots.iter().filter_map(|s| s.team_id).collect(),
            Self::Bingo(_) => Vec::new(),
        }
    }
}

/// A stored post of any format.
#[derive(Debug, Clone, PartialEq)]
pub enum Post {
    Ranking(RankingPost),
    Bracket(BracketPost),
    Bingo(BingoPost),
}

impl Post {
    pub fn format(&self) -> PostFormat {
        match self {
            Self::Ranking(_) => PostFormat::Ranking,
            Self::Bracket(_) => PostFormat::Bracket,
            Self::Bingo(_) => PostFormat::Bingo,
        }
    }

    pub fn header(&self) -> &PostHeader {
        match self {
            Self::Ranking(p) => &p.header,
            Self::Bracket(p) => &p.header,
            Self::Bingo(p) => &p.header,
        }
    }

    pub fn into_dto(self) -> PostDto {
        match self {
            Self::Ranking(p) => PostDto::Ranking(p.into_dto()),
            Self::Bracket(p) => PostDto::Bracket(p.into_dto()),
            Self::Bingo(p) => PostDto::Bingo(p.into_dto()),
        }
    }
}
