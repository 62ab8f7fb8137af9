//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns a process-wide unique number for building unique names and ids.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a published prediction owned by that user.
pub async fn create_prediction_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::prediction::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let prediction = crate::factory::prediction::create_prediction(db, user.id).await?;

    Ok((user, prediction))
}

/// Creates `count` teams owned by `user_id` and returns them in creation order.
pub async fn create_teams(
    db: &DatabaseConnection,
    user_id: i32,
    count: usize,
) -> Result<Vec<entity::team::Model>, DbErr> {
    let mut teams = Vec::with_capacity(count);
    for _ in 0..count {
        teams.push(crate::factory::team::create_team(db, user_id).await?);
    }

    Ok(teams)
}
