use crate::{
    model::creation_flow::CreationFlowStatus,
    server::data::creation_flow::CreationFlowRepository,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod abandon_expired;
mod create;
