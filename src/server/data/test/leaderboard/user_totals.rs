use super::*;

async fn scored_ranking(
    db: &sea_orm::DatabaseConnection,
    prediction_id: i32,
    user_id: i32,
    kind: PostKind,
    score: i32,
) -> Result<(), DbErr> {
    let repo = RankingPostRepository::new(db);
    let post_id = repo
        .create(
            NewPost {
                prediction_id,
                user_id,
                kind,
            },
            &RankingSubmission {
                template_id: None,
                number_of_rows: 1,
                number_of_columns: 1,
                cells: vec![],
            },
        )
        .await?;

    repo.save_score(
        post_id,
        &PostScore {
            score,
            max_score: 10,
            marks: vec![],
        },
    )
    .await
}

/// Tests summing scores per user, ignoring result posts and unscored posts.
///
/// Expected: owner 7 over 1 post, challenger 3 over 1 post
#[tokio::test]
async fn sums_scored_posts_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, prediction) = factory::helpers::create_prediction_with_owner(db).await?;
    let challenger = factory::create_user(db).await?;

    scored_ranking(db, prediction.id, owner.id, PostKind::Original, 7).await?;
    scored_ranking(db, prediction.id, challenger.id, PostKind::Counter, 3).await?;
    scored_ranking(db, prediction.id, owner.id, PostKind::Result, 10).await?;

    let mut totals = LeaderboardRepository::new(db).user_totals(None).await?;
    totals.sort_by_key(|t| -t.total_score);

    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].user_id, owner.id);
    assert_eq!(totals[0].total_score, 7);
    assert_eq!(totals[0].scored_posts, 1);
    assert_eq!(totals[1].user_id, challenger.id);
    assert_eq!(totals[1].total_score, 3);

    Ok(())
}

/// Tests restricting totals to predictions of one category.
///
/// Expected: only the post on the categorized prediction counts
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let categorized = factory::prediction::PredictionFactory::new(db, user.id)
        .category_id(Some(category.id))
        .build()
        .await?;
    let uncategorized = factory::create_prediction(db, user.id).await?;

    scored_ranking(db, categorized.id, user.id, PostKind::Original, 4).await?;
    scored_ranking(db, uncategorized.id, user.id, PostKind::Original, 6).await?;

    let repo = LeaderboardRepository::new(db);
    let totals = repo.user_totals(Some(category.id)).await?;

    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].total_score, 4);
    assert_eq!(repo.total_for_user(user.id).await?, 10);

    let unscored = factory::create_user(db).await?;
    assert_eq!(repo.total_for_user(unscored.id).await?, 0);

    Ok(())
}
