use crate::{
    model::post::PostFormat,
    server::{
        data::template::TemplateRepository,
        model::template::{CreateTemplateParams, TemplateShape},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_visible;
mod set_official;
