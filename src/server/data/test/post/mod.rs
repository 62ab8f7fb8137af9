use crate::{
    model::post::PostKind,
    server::{
        data::post::{
            bingo::BingoPostRepository, bracket::BracketPostRepository,
            ranking::RankingPostRepository,
        },
        model::{
            post::{
                BingoCellInput, BingoSubmission, BracketSlotInput, BracketSubmission, NewPost,
                RankCellInput, RankingSubmission,
            },
            results::PostScore,
        },
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod bingo;
mod bracket;
mod ranking;
