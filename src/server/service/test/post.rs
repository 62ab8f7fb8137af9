use super::*;
use crate::{
    model::post::{PostFormat, PostKind},
    server::{
        error::AppError,
        model::post::Post,
        service::{post::PostService, results::ResultsService},
    },
};
use test_utils::builder::TestBuilder;

/// Tests that the prediction owner's post becomes the original.
///
/// Expected: original ranking, second original rejected with 400
#[tokio::test]
async fn owner_submits_single_original() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;
    let teams = factory::helpers::create_teams(db, owner.id, 3).await?;
    let ids: Vec<i32> = teams.iter().map(|t| t.id).collect();

    let service = PostService::new(db);
    let post = service
        .submit(prediction.id, &owner, PostFormat::Ranking, ranking(&ids))
        .await?;

    assert_eq!(post.header().kind, PostKind::Original);
    assert_eq!(post.format(), PostFormat::Ranking);

    let again = service
        .submit(prediction.id, &owner, PostFormat::Ranking, ranking(&ids))
        .await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the counter-prediction rules.
///
/// Verifies that a counter needs an original, that it must have the original's
/// dimensions and that each user counters a format once.
///
/// Expected: first counter stored, the other attempts rejected with 400
#[tokio::test]
async fn counter_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let challenger = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;
    let teams = factory::helpers::create_teams(db, owner.id, 3).await?;
    let ids: Vec<i32> = teams.iter().map(|t| t.id).collect();

    let service = PostService::new(db);

    let no_original = service
        .submit(prediction.id, &challenger, PostFormat::Ranking, ranking(&ids))
        .await;
    assert!(matches!(no_original, Err(AppError::BadRequest(_))));

    service
        .submit(prediction.id, &owner, PostFormat::Ranking, ranking(&ids))
        .await?;

    let wrong_size = service
        .submit(prediction.id, &challenger, PostFormat::Ranking, ranking(&ids[..2]))
        .await;
    assert!(matches!(wrong_size, Err(AppError::BadRequest(_))));

    let counter = service
        .submit(
            prediction.id,
            &challenger,
            PostFormat::Ranking,
            ranking(&[ids[2], ids[1], ids[0]]),
        )
        .await?;
    assert_eq!(counter.header().kind, PostKind::Counter);

    let second = service
        .submit(prediction.id, &challenger, PostFormat::Ranking, ranking(&ids))
        .await;
    assert!(matches!(second, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a rejected duplicate leaves nothing behind.
///
/// The duplicate checks run in the transaction of the insert, so a rejected submit
/// rolls back and the connection stays usable.
///
/// Expected: one original and one counter stored, later submits still succeed
#[tokio::test]
async fn rejected_duplicates_roll_back() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let challenger = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;
    let teams = factory::helpers::create_teams(db, owner.id, 2).await?;
    let (a, b) = (teams[0].id, teams[1].id);

    let service = PostService::new(db);
    service
        .submit(prediction.id, &owner, PostFormat::Ranking, ranking(&[a, b]))
        .await?;
    service
        .submit(prediction.id, &challenger, PostFormat::Ranking, ranking(&[b, a]))
        .await?;

    for (user, submission) in [(&owner, ranking(&[b, a])), (&challenger, ranking(&[a, b]))] {
        let duplicate = service
            .submit(prediction.id, user, PostFormat::Ranking, submission)
            .await;
        assert!(matches!(duplicate, Err(AppError::BadRequest(_))));
    }

    let summaries = service.get_summaries(prediction.id, Some(owner.id)).await?;
    assert_eq!(summaries.len(), 2);

    service
        .submit(prediction.id, &owner, PostFormat::Bracket, bracket(a, b, a))
        .await?;

    Ok(())
}

/// Tests that a bracket counter must keep the original's seeding.
///
/// Expected: 400 for changed seeding, counter stored otherwise
#[tokio::test]
async fn bracket_counter_keeps_seeding() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let challenger = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;
    let teams = factory::helpers::create_teams(db, owner.id, 3).await?;
    let (a, b, c) = (teams[0].id, teams[1].id, teams[2].id);

    let service = PostService::new(db);
    service
        .submit(prediction.id, &owner, PostFormat::Bracket, bracket(a, b, a))
        .await?;

    let reseeded = service
        .submit(prediction.id, &challenger, PostFormat::Bracket, bracket(a, c, c))
        .await;
    assert!(matches!(reseeded, Err(AppError::BadRequest(_))));

    let counter = service
        .submit(prediction.id, &challenger, PostFormat::Bracket, bracket(a, b, b))
        .await?;
    assert_eq!(counter.header().kind, PostKind::Counter);

    Ok(())
}

/// Tests that a bingo counter takes the original's cell contents.
///
/// Expected: counter cells carry the original's content and the counter's flags
#[tokio::test]
async fn bingo_counter_uses_original_contents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let challenger = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;

    let service = PostService::new(db);
    service
        .submit(prediction.id, &owner, PostFormat::Bingo, bingo(&[(0, 0)]))
        .await?;

    let Submission::Bingo(mut flags_only) = bingo(&[(1, 1)]) else {
        unreachable!()
    };
    for cell in &mut flags_only.cells {
        cell.content = String::new();
    }

    let counter = service
        .submit(
            prediction.id,
            &challenger,
            PostFormat::Bingo,
            Submission::Bingo(flags_only),
        )
        .await?;

    let Post::Bingo(card) = counter else {
        panic!("expected a bingo post");
    };
    assert_eq!(card.cells.len(), 9);
    assert_eq!(card.cells[4].content, "Event 4");
    assert!(card.cells[4].checked);
    assert!(!card.cells[0].checked);

    Ok(())
}

/// Tests that counters are closed once results are published.
///
/// Expected: 400 after publishing
#[tokio::test]
async fn counters_close_after_results() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let late = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;
    let teams = factory::helpers::create_teams(db, owner.id, 2).await?;
    let ids: Vec<i32> = teams.iter().map(|t| t.id).collect();

    PostService::new(db)
        .submit(prediction.id, &owner, PostFormat::Ranking, ranking(&ids))
        .await?;
    ResultsService::new(db)
        .publish(prediction.id, &owner, PostFormat::Ranking, ranking(&ids))
        .await?;

    let result = PostService::new(db)
        .submit(prediction.id, &late, PostFormat::Ranking, ranking(&ids))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that unknown teams and mismatched bodies are rejected.
///
/// Expected: 400 for both
#[tokio::test]
async fn rejects_unknown_teams_and_wrong_format() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;

    let service = PostService::new(db);
    let unknown_team = service
        .submit(prediction.id, &owner, PostFormat::Ranking, ranking(&[9999]))
        .await;
    assert!(matches!(unknown_team, Err(AppError::BadRequest(_))));

    let wrong_format = service
        .submit(prediction.id, &owner, PostFormat::Bracket, bingo(&[]))
        .await;
    assert!(matches!(wrong_format, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that another user's draft is hidden.
///
/// Expected: 404
#[tokio::test]
async fn drafts_are_hidden_from_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let other = create_user(db).await?;
    let draft = factory::prediction::create_draft_prediction(db, owner.id).await?;

    let result = PostService::new(db)
        .submit(draft.id, &other, PostFormat::Bingo, bingo(&[]))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
