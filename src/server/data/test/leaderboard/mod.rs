use crate::{
    model::post::PostKind,
    server::{
        data::{leaderboard::LeaderboardRepository, post::ranking::RankingPostRepository},
        model::{
            post::{NewPost, RankingSubmission},
            results::PostScore,
        },
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod user_totals;
