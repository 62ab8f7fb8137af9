use super::*;
use crate::{
    model::post::{PostFormat, PostKind},
    server::{
        error::{auth::AuthError, AppError},
        service::{post::PostService, results::ResultsService},
    },
};
use test_utils::builder::TestBuilder;

/// Tests publishing ranking results.
///
/// Verifies that every original and counter is scored and that equal scores share a
/// rank, with the earlier post listed first.
///
/// Expected: standings 1, 1, 3 with scores 3, 3, 1
#[tokio::test]
async fn publish_scores_and_ranks_posts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let first = create_user(db).await?;
    let second = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;
    let teams = factory::helpers::create_teams(db, owner.id, 3).await?;
    let (a, b, c) = (teams[0].id, teams[1].id, teams[2].id);

    let posts = PostService::new(db);
    let original = posts
        .submit(prediction.id, &owner, PostFormat::Ranking, ranking(&[a, b, c]))
        .await?;
    posts
        .submit(prediction.id, &first, PostFormat::Ranking, ranking(&[a, b, c]))
        .await?;
    posts
        .submit(prediction.id, &second, PostFormat::Ranking, ranking(&[c, b, a]))
        .await?;

    let results = ResultsService::new(db)
        .publish(prediction.id, &owner, PostFormat::Ranking, ranking(&[a, b, c]))
        .await?;

    assert_eq!(results.format, PostFormat::Ranking);
    assert_eq!(results.result.kind, PostKind::Result);

    let ranks: Vec<u32> = results.entries.iter().map(|e| e.rank).collect();
    let scores: Vec<i32> = results.entries.iter().map(|e| e.score).collect();
    assert_eq!(ranks, vec![1, 1, 3]);
    assert_eq!(scores, vec![3, 3, 1]);
    assert!(results.entries.iter().all(|e| e.max_score == 3));
    assert_eq!(results.entries[0].post_id, original.header().id);
    assert_eq!(results.entries[2].user_id, second.id);

    Ok(())
}

/// Tests that publishing again replaces the earlier result and rescoring follows it.
///
/// Expected: the original's score drops from 2 to 0
#[tokio::test]
async fn republishing_rescores_posts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;
    let teams = factory::helpers::create_teams(db, owner.id, 2).await?;
    let (a, b) = (teams[0].id, teams[1].id);

    PostService::new(db)
        .submit(prediction.id, &owner, PostFormat::Ranking, ranking(&[a, b]))
        .await?;

    let service = ResultsService::new(db);
    let first = service
        .publish(prediction.id, &owner, PostFormat::Ranking, ranking(&[a, b]))
        .await?;
    assert_eq!(first.entries[0].score, 2);

    let second = service
        .publish(prediction.id, &owner, PostFormat::Ranking, ranking(&[b, a]))
        .await?;
    assert_eq!(second.entries.len(), 1);
    assert_eq!(second.entries[0].score, 0);

    Ok(())
}

/// Tests the access rules for publishing.
///
/// Expected: 404 before publishing, `AccessDenied` for non-owners, 400 without an
/// original post
#[tokio::test]
async fn publish_access_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let other = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;

    let service = ResultsService::new(db);

    let missing = service
        .get(prediction.id, PostFormat::Bingo, None)
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    let no_original = service
        .publish(prediction.id, &owner, PostFormat::Bingo, bingo(&[]))
        .await;
    assert!(matches!(no_original, Err(AppError::BadRequest(_))));

    PostService::new(db)
        .submit(prediction.id, &owner, PostFormat::Bingo, bingo(&[]))
        .await?;

    let denied = service
        .publish(prediction.id, &other, PostFormat::Bingo, bingo(&[(0, 0)]))
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that admins may publish results for any prediction.
///
/// Expected: Ok with the owner's original scored
#[tokio::test]
async fn admin_publishes_for_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let admin = create_admin(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;

    PostService::new(db)
        .submit(prediction.id, &owner, PostFormat::Bingo, bingo(&[(0, 0)]))
        .await?;

    let results = ResultsService::new(db)
        .publish(prediction.id, &admin, PostFormat::Bingo, bingo(&[(0, 0)]))
        .await?;

    assert_eq!(results.entries.len(), 1);
    assert_eq!(results.entries[0].user_id, owner.id);
    assert_eq!(results.entries[0].score, 9);

    Ok(())
}

/// Tests that deleting the result clears the scores it produced.
///
/// Expected: results 404 and the original unscored
#[tokio::test]
async fn deleting_result_clears_scores() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;
    let teams = factory::helpers::create_teams(db, owner.id, 2).await?;
    let ids: Vec<i32> = teams.iter().map(|t| t.id).collect();

    let posts = PostService::new(db);
    let original = posts
        .submit(prediction.id, &owner, PostFormat::Ranking, ranking(&ids))
        .await?;
    let results = ResultsService::new(db)
        .publish(prediction.id, &owner, PostFormat::Ranking, ranking(&ids))
        .await?;

    posts
        .delete(PostFormat::Ranking, results.result.id, &owner)
        .await?;

    let after = ResultsService::new(db)
        .get(prediction.id, PostFormat::Ranking, None)
        .await;
    assert!(matches!(after, Err(AppError::NotFound(_))));

    let original = posts
        .get(PostFormat::Ranking, original.header().id, None)
        .await?;
    assert_eq!(original.header().score, None);

    Ok(())
}
