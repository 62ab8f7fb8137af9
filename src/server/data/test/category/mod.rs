use crate::server::{data::category::CategoryRepository, model::category::UpsertCategoryParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;
