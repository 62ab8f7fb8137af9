use crate::server::data::discussion::DiscussionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_for_prediction;
