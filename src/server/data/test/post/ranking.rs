use super::*;

/// Tests that a ranking post stores every cell of its grid.
///
/// Verifies that filled cells keep their team and name and that omitted cells are
/// stored empty, ordered by row then column.
///
/// Expected: 3x2 grid with 2 filled cells
#[tokio::test]
async fn creates_and_loads_full_grid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, prediction) = factory::helpers::create_prediction_with_owner(db).await?;
    let teams = factory::helpers::create_teams(db, owner.id, 2).await?;

    let repo = RankingPostRepository::new(db);
    let post_id = repo
        .create(
            NewPost {
                prediction_id: prediction.id,
                user_id: owner.id,
                kind: PostKind::Original,
            },
            &RankingSubmission {
                template_id: None,
                number_of_rows: 3,
                number_of_columns: 2,
                cells: vec![
                    RankCellInput {
                        row: 0,
                        column: 0,
                        team_id: Some(teams[0].id),
                    },
                    RankCellInput {
                        row: 2,
                        column: 1,
                        team_id: Some(teams[1].id),
                    },
                ],
            },
        )
        .await?;

    let post = repo.find_by_id(post_id).await?.expect("post exists");

    assert_eq!(post.header.kind, PostKind::Original);
    assert_eq!(post.header.user_name, owner.name);
    assert_eq!(post.cells.len(), 6);
    assert_eq!(post.cells[0].team_id, Some(teams[0].id));
    assert_eq!(post.cells[0].team_name.as_deref(), Some(teams[0].name.as_str()));
    assert_eq!(post.cells[1].team_id, None);
    assert_eq!((post.cells[5].row, post.cells[5].column), (2, 1));
    assert_eq!(post.cells[5].team_id, Some(teams[1].id));

    Ok(())
}

/// Tests persisting a score and withdrawing it again.
///
/// Expected: score and flags stored, then cleared back to null
#[tokio::test]
async fn saves_and_clears_scores() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, prediction) = factory::helpers::create_prediction_with_owner(db).await?;
    let team = factory::create_team(db, owner.id).await?;

    let repo = RankingPostRepository::new(db);
    let post_id = repo
        .create(
            NewPost {
                prediction_id: prediction.id,
                user_id: owner.id,
                kind: PostKind::Original,
            },
            &RankingSubmission {
                template_id: None,
                number_of_rows: 2,
                number_of_columns: 1,
                cells: vec![RankCellInput {
                    row: 0,
                    column: 0,
                    team_id: Some(team.id),
                }],
            },
        )
        .await?;
    let post = repo.find_by_id(post_id).await?.expect("post exists");

    let score = PostScore {
        score: 1,
        max_score: 2,
        marks: vec![(post.cells[0].id, Some(true)), (post.cells[1].id, None)],
    };
    repo.save_score(post_id, &score).await?;

    let scored = repo.find_by_id(post_id).await?.expect("post exists");
    assert_eq!(scored.header.score, Some(1));
    assert_eq!(scored.header.max_score, Some(2));
    assert_eq!(scored.cells[0].correct, Some(true));
    assert_eq!(scored.cells[1].correct, None);

    repo.clear_scores(prediction.id).await?;

    let cleared = repo.find_by_id(post_id).await?.expect("post exists");
    assert_eq!(cleared.header.score, None);
    assert_eq!(cleared.cells[0].correct, None);

    Ok(())
}

/// Tests looking up a user's post of a given kind and deleting by kind.
///
/// Expected: counter found for its author; deleting counters leaves the original
#[tokio::test]
async fn finds_by_user_and_deletes_by_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, prediction) = factory::helpers::create_prediction_with_owner(db).await?;
    let challenger = factory::create_user(db).await?;
    let submission = RankingSubmission {
        template_id: None,
        number_of_rows: 1,
        number_of_columns: 1,
        cells: vec![],
    };

    let repo = RankingPostRepository::new(db);
    repo.create(
        NewPost {
            prediction_id: prediction.id,
            user_id: owner.id,
            kind: PostKind::Original,
        },
        &submission,
    )
    .await?;
    let counter_id = repo
        .create(
            NewPost {
                prediction_id: prediction.id,
                user_id: challenger.id,
                kind: PostKind::Counter,
            },
            &submission,
        )
        .await?;

    let found = repo
        .find_header_by_user(prediction.id, challenger.id, PostKind::Counter)
        .await?;
    assert_eq!(found.map(|h| h.id), Some(counter_id));

    let deleted = repo.delete_by_kind(prediction.id, PostKind::Counter).await?;
    assert_eq!(deleted, 1);

    let remaining = repo
        .headers(prediction.id, &[PostKind::Original, PostKind::Counter])
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].kind, PostKind::Original);

    Ok(())
}
