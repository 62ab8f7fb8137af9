use crate::server::{data::user::UserRepository, model::user::UpsertUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod get_all_paginated;
mod search_by_name;
mod set_admin;
mod upsert;
