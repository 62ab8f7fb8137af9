use super::*;
use crate::server::{error::AppError, service::discussion::DiscussionService};
use test_utils::builder::TestBuilder;

/// Tests threads and comments on a published prediction.
///
/// Expected: one thread with one comment, blank bodies rejected with 400
#[tokio::test]
async fn creates_threads_and_comments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let other = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;
    let service = DiscussionService::new(db);

    let blank = service.create_post(prediction.id, &other, "  ").await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    let post = service
        .create_post(prediction.id, &other, "Bold call")
        .await?;
    service.create_comment(post.id, &owner, "We'll see").await?;

    let discussion = service.get_for_prediction(prediction.id, None).await?;
    assert_eq!(discussion.len(), 1);
    assert_eq!(discussion[0].body, "Bold call");
    assert_eq!(discussion[0].comments.len(), 1);
    assert_eq!(discussion[0].comments[0].user_id, owner.id);

    Ok(())
}

/// Tests that drafts cannot be discussed.
///
/// Expected: 404 even for the draft's owner
#[tokio::test]
async fn drafts_cannot_be_discussed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let draft = factory::prediction::create_draft_prediction(db, owner.id).await?;

    let result = DiscussionService::new(db)
        .create_post(draft.id, &owner, "Hello")
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests who may delete discussion posts and comments.
///
/// Expected: 404 for other users, Ok for the author and for admins
#[tokio::test]
async fn only_author_or_admin_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let author = create_user(db).await?;
    let admin = create_admin(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;
    let service = DiscussionService::new(db);

    let post = service.create_post(prediction.id, &author, "Thread").await?;
    let comment = service.create_comment(post.id, &author, "Reply").await?;

    let denied = service.delete_comment(comment.id, &owner).await;
    assert!(matches!(denied, Err(AppError::NotFound(_))));
    service.delete_comment(comment.id, &author).await?;

    let denied = service.delete_post(post.id, &owner).await;
    assert!(matches!(denied, Err(AppError::NotFound(_))));
    service.delete_post(post.id, &admin).await?;

    assert!(service
        .get_for_prediction(prediction.id, None)
        .await?
        .is_empty());

    Ok(())
}
