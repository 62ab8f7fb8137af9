use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};
use entity::prelude::User;
use test_utils::{builder::TestBuilder, factory};

mod optional;
mod require;
