use crate::server::{
    data::prediction::PredictionRepository,
    model::prediction::{PredictionFilter, UpsertPredictionParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_published_paginated;
mod publish;
mod update;
