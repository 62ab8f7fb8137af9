use super::*;

/// Tests that a bracket stores every slot of every round.
///
/// A 2-round bracket has 4 seeds, 2 semi-final winners and 1 champion.
///
/// Expected: 7 slots ordered by round then position
#[tokio::test]
async fn creates_all_slots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, prediction) = factory::helpers::create_prediction_with_owner(db).await?;
    let teams = factory::helpers::create_teams(db, owner.id, 4).await?;

    let mut slots: Vec<BracketSlotInput> = teams
        .iter()
        .enumerate()
        .map(|(position, team)| BracketSlotInput {
            round: 0,
            position: position as i32,
            team_id: Some(team.id),
        })
        .collect();
    slots.push(BracketSlotInput {
        round: 1,
        position: 0,
        team_id: Some(teams[1].id),
    });

    let repo = BracketPostRepository::new(db);
    let post_id = repo
        .create(
            NewPost {
                prediction_id: prediction.id,
                user_id: owner.id,
                kind: PostKind::Original,
            },
            &BracketSubmission {
                template_id: None,
                number_of_rounds: 2,
                slots,
            },
        )
        .await?;

    let post = repo.find_by_id(post_id).await?.expect("post exists");

    assert_eq!(post.number_of_rounds, 2);
    assert_eq!(post.slots.len(), 7);
    let coordinates: Vec<(i32, i32)> = post.slots.iter().map(|s| (s.round, s.position)).collect();
    assert_eq!(
        coordinates,
        vec![(0, 0), (0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (2, 0)]
    );
    assert_eq!(post.slots[4].team_id, Some(teams[1].id));
    assert_eq!(post.slots[5].team_id, None);
    assert_eq!(post.slots[6].team_id, None);

    Ok(())
}

/// Tests that deleting a team empties the slots that referenced it.
///
/// Expected: seed slot becomes empty, post survives
#[tokio::test]
async fn empties_slots_of_deleted_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, prediction) = factory::helpers::create_prediction_with_owner(db).await?;
    let team = factory::create_team(db, owner.id).await?;

    let repo = BracketPostRepository::new(db);
    let post_id = repo
        .create(
            NewPost {
                prediction_id: prediction.id,
                user_id: owner.id,
                kind: PostKind::Original,
            },
            &BracketSubmission {
                template_id: None,
                number_of_rounds: 1,
                slots: vec![BracketSlotInput {
                    round: 0,
                    position: 0,
                    team_id: Some(team.id),
                }],
            },
        )
        .await?;

    crate::server::data::team::TeamRepository::new(db)
        .delete(team.id)
        .await?;

    let post = repo.find_by_id(post_id).await?.expect("post exists");
    assert!(post.slots.iter().all(|s| s.team_id.is_none()));

    Ok(())
}
