use super::*;

fn card(grid_size: i32, checked: &[(i32, i32)]) -> BingoSubmission {
    let mut cells = Vec::new();
    for row in 0..grid_size {
        for column in 0..grid_size {
            cells.push(BingoCellInput {
                row,
                column,
                content: format!("Event {}-{}", row, column),
                checked: checked.contains(&(row, column)),
            });
        }
    }

    BingoSubmission {
        template_id: None,
        grid_size,
        cells,
    }
}

/// Tests storing and loading a bingo card.
///
/// Expected: 9 cells in row-major order with the checked flag preserved
#[tokio::test]
async fn creates_and_loads_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, prediction) = factory::helpers::create_prediction_with_owner(db).await?;

    let repo = BingoPostRepository::new(db);
    let post_id = repo
        .create(
            NewPost {
                prediction_id: prediction.id,
                user_id: owner.id,
                kind: PostKind::Original,
            },
            &card(3, &[(1, 1)]),
        )
        .await?;

    let post = repo.find_by_id(post_id).await?.expect("post exists");

    assert_eq!(post.grid_size, 3);
    assert_eq!(post.cells.len(), 9);
    assert_eq!(post.cells[4].content, "Event 1-1");
    assert!(post.cells[4].checked);
    assert!(!post.cells[0].checked);

    Ok(())
}

/// Tests that deleting a prediction removes its bingo posts.
///
/// Expected: post no longer found
#[tokio::test]
async fn cascades_prediction_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, prediction) = factory::helpers::create_prediction_with_owner(db).await?;

    let repo = BingoPostRepository::new(db);
    let post_id = repo
        .create(
            NewPost {
                prediction_id: prediction.id,
                user_id: owner.id,
                kind: PostKind::Original,
            },
            &card(3, &[]),
        )
        .await?;

    crate::server::data::prediction::PredictionRepository::new(db)
        .delete(prediction.id)
        .await?;

    assert!(repo.find_by_id(post_id).await?.is_none());

    Ok(())
}
