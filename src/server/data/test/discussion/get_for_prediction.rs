use super::*;

/// Tests that discussion posts come back oldest first with their comments attached.
///
/// Expected: 2 posts; the first with 2 comments in insertion order, the second with none
#[tokio::test]
async fn groups_comments_under_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, prediction) = factory::helpers::create_prediction_with_owner(db).await?;
    let commenter = factory::create_user(db).await?;

    let repo = DiscussionRepository::new(db);
    let first = repo
        .create_post(prediction.id, owner.id, "Who wins the final?".to_string())
        .await?;
    repo.create_post(prediction.id, commenter.id, "Second thread".to_string())
        .await?;
    repo.create_comment(first.id, commenter.id, "The underdog".to_string())
        .await?;
    repo.create_comment(first.id, owner.id, "Bold".to_string())
        .await?;

    let posts = repo.get_for_prediction(prediction.id).await?;

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, first.id);
    assert_eq!(posts[0].user_name, owner.name);
    let bodies: Vec<&str> = posts[0].comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["The underdog", "Bold"]);
    assert_eq!(posts[0].comments[0].user_name, commenter.name);
    assert!(posts[1].comments.is_empty());

    Ok(())
}

/// Tests that deleting a discussion post removes its comments.
///
/// Expected: comment no longer found
#[tokio::test]
async fn deleting_post_removes_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, prediction) = factory::helpers::create_prediction_with_owner(db).await?;

    let repo = DiscussionRepository::new(db);
    let post = repo
        .create_post(prediction.id, owner.id, "Thread".to_string())
        .await?;
    let comment = repo
        .create_comment(post.id, owner.id, "Reply".to_string())
        .await?;

    assert!(repo.delete_post(post.id).await?);
    assert!(repo.find_comment(comment.id).await?.is_none());

    Ok(())
}
