use super::*;
use crate::{
    model::post::PostFormat,
    server::{
        error::AppError,
        service::{post::PostService, rank::RankService, results::ResultsService},
    },
};
use test_utils::builder::TestBuilder;

/// Tests the leaderboard after one published result.
///
/// Verifies that equal totals share a rank and that pagination keeps the global rank.
///
/// Expected: ranks 1, 1, 3 and the second page holding rank 3
#[tokio::test]
async fn ranks_users_by_total_score() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let first = create_user(db).await?;
    let second = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;
    let teams = factory::helpers::create_teams(db, owner.id, 2).await?;
    let (a, b) = (teams[0].id, teams[1].id);

    let posts = PostService::new(db);
    posts
        .submit(prediction.id, &owner, PostFormat::Ranking, ranking(&[a, b]))
        .await?;
    posts
        .submit(prediction.id, &first, PostFormat::Ranking, ranking(&[a, b]))
        .await?;
    posts
        .submit(prediction.id, &second, PostFormat::Ranking, ranking(&[b, a]))
        .await?;
    ResultsService::new(db)
        .publish(prediction.id, &owner, PostFormat::Ranking, ranking(&[a, b]))
        .await?;

    let service = RankService::new(db);
    let board = service.get_leaderboard(None, 0, 10).await?;

    let ranks: Vec<u32> = board.entries.iter().map(|e| e.rank).collect();
    assert_eq!(ranks, vec![1, 1, 3]);
    assert_eq!(board.entries[0].score.total_score, 2);
    assert_eq!(board.entries[2].score.user_id, second.id);
    assert_eq!(board.entries[2].score.total_score, 0);

    let page = service.get_leaderboard(None, 1, 2).await?;
    assert_eq!(page.total, 3);
    assert_eq!(page.entries.len(), 1);
    assert_eq!(page.entries[0].rank, 3);

    Ok(())
}

/// Tests that an unscored board is empty.
///
/// Expected: no entries
#[tokio::test]
async fn empty_without_results() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_user(db).await?;

    let board = RankService::new(db).get_leaderboard(None, 0, 10).await?;

    assert!(board.entries.is_empty());
    assert_eq!(board.total, 0);

    Ok(())
}

/// Tests a page number whose offset overflows.
///
/// Expected: Err(AppError::BadRequest) instead of a panic or a wrapped offset
#[tokio::test]
async fn rejects_out_of_range_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;
    let teams = factory::helpers::create_teams(db, owner.id, 2).await?;
    let (a, b) = (teams[0].id, teams[1].id);
    PostService::new(db)
        .submit(prediction.id, &owner, PostFormat::Ranking, ranking(&[a, b]))
        .await?;
    ResultsService::new(db)
        .publish(prediction.id, &owner, PostFormat::Ranking, ranking(&[a, b]))
        .await?;

    let result = RankService::new(db)
        .get_leaderboard(None, u64::MAX / 10, 100)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
