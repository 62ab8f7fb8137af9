use super::*;
use crate::{
    model::post::PostFormat,
    server::{
        error::{auth::AuthError, AppError},
        service::{post::PostService, template::TemplateService},
    },
};
use test_utils::builder::TestBuilder;

/// A one-column ranking built from a template.
fn templated_ranking(template_id: i32, teams: &[i32]) -> Submission {
    Submission::Ranking(RankingSubmission {
        template_id: Some(template_id),
        number_of_rows: teams.len() as i32,
        number_of_columns: 1,
        cells: teams
            .iter()
            .enumerate()
            .map(|(row, team)| RankCellInput {
                row: row as i32,
                column: 0,
                team_id: Some(*team),
            })
            .collect(),
    })
}

/// Tests which templates each caller can see.
///
/// Expected: anonymous callers list official templates only, owners also their own,
/// other users get 404 for a private template
#[tokio::test]
async fn hides_private_templates_from_others() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let other = create_user(db).await?;
    let official =
        factory::template::create_ranking_template(db, owner.id, 3, 1, true).await?;
    let private =
        factory::template::create_ranking_template(db, owner.id, 3, 1, false).await?;

    let service = TemplateService::new(db);

    let anonymous = service.get_visible(PostFormat::Ranking, None).await?;
    let ids: Vec<i32> = anonymous.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![official.id]);

    let own = service
        .get_visible(PostFormat::Ranking, Some(owner.id))
        .await?;
    assert_eq!(own.len(), 2);

    let hidden = service
        .get_by_id(PostFormat::Ranking, private.id, Some(other.id))
        .await;
    assert!(matches!(hidden, Err(AppError::NotFound(_))));

    let shared = service
        .get_by_id(PostFormat::Ranking, official.id, Some(other.id))
        .await?;
    assert!(shared.is_official);

    Ok(())
}

/// Tests who may delete a template.
///
/// Expected: `AccessDenied` for another user on an official template, 404 on a private
/// one, success for the owner and for an admin on someone else's private template
#[tokio::test]
async fn delete_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let other = create_user(db).await?;
    let admin = create_admin(db).await?;
    let official = factory::template::create_bingo_template(db, owner.id, 5, true).await?;
    let private = factory::template::create_bingo_template(db, owner.id, 4, false).await?;
    let own = factory::template::create_bingo_template(db, owner.id, 3, false).await?;

    let service = TemplateService::new(db);

    let denied = service
        .delete(PostFormat::Bingo, official.id, &other)
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let hidden = service.delete(PostFormat::Bingo, private.id, &other).await;
    assert!(matches!(hidden, Err(AppError::NotFound(_))));

    service.delete(PostFormat::Bingo, own.id, &owner).await?;
    service.delete(PostFormat::Bingo, private.id, &admin).await?;

    let remaining = service
        .get_visible(PostFormat::Bingo, Some(owner.id))
        .await?;
    let ids: Vec<i32> = remaining.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![official.id]);

    Ok(())
}

/// Tests the template reference of a submitted post.
///
/// Expected: 400 for another user's private template and for mismatched dimensions,
/// success for a matching official template
#[tokio::test]
async fn posts_must_match_visible_template() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let other = create_user(db).await?;
    let prediction = factory::create_prediction(db, owner.id).await?;
    let teams = factory::helpers::create_teams(db, owner.id, 3).await?;
    let ids: Vec<i32> = teams.iter().map(|t| t.id).collect();
    let foreign =
        factory::template::create_ranking_template(db, other.id, 3, 1, false).await?;
    let official =
        factory::template::create_ranking_template(db, other.id, 3, 1, true).await?;
    let wide = factory::template::create_ranking_template(db, owner.id, 3, 2, false).await?;

    let service = PostService::new(db);

    let invisible = service
        .submit(
            prediction.id,
            &owner,
            PostFormat::Ranking,
            templated_ranking(foreign.id, &ids),
        )
        .await;
    assert!(matches!(invisible, Err(AppError::BadRequest(_))));

    let mismatched = service
        .submit(
            prediction.id,
            &owner,
            PostFormat::Ranking,
            templated_ranking(wide.id, &ids),
        )
        .await;
    assert!(matches!(mismatched, Err(AppError::BadRequest(_))));

    let post = service
        .submit(
            prediction.id,
            &owner,
            PostFormat::Ranking,
            templated_ranking(official.id, &ids),
        )
        .await?;
    assert_eq!(post.format(), PostFormat::Ranking);

    Ok(())
}
