//! Service tests against an in-memory database.

use sea_orm::{DatabaseConnection, DbErr};
use test_utils::factory;

use crate::server::model::{
    post::{
        BingoCellInput, BingoSubmission, BracketSlotInput, BracketSubmission, RankCellInput,
        RankingSubmission, Submission,
    },
    user::User,
};

mod category;
mod discussion;
mod post;
mod rank;
mod results;
mod team;
mod template;

async fn create_user(db: &DatabaseConnection) -> Result<User, DbErr> {
    Ok(User::from_entity(factory::create_user(db).await?))
}

async fn create_admin(db: &DatabaseConnection) -> Result<User, DbErr> {
    Ok(User::from_entity(factory::user::create_admin(db).await?))
}

/// A one-column ranking listing `teams` top to bottom.
fn ranking(teams: &[i32]) -> Submission {
    Submission::Ranking(RankingSubmission {
        template_id: None,
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

/// A one-round bracket: two seeded teams and the winner.
fn bracket(first: i32, second: i32, winner: i32) -> Submission {
    let slot = |round, position, team| BracketSlotInput {
        round,
        position,
        team_id: Some(team),
    };
    Submission::Bracket(BracketSubmission {
        template_id: None,
        number_of_rounds: 1,
        slots: vec![slot(0, 0, first), slot(0, 1, second), slot(1, 0, winner)],
    })
}

/// A 3x3 bingo card with the given cells checked.
fn bingo(checked: &[(i32, i32)]) -> Submission {
    let mut cells = Vec::new();
    for row in 0..3 {
        for column in 0..3 {
            cells.push(BingoCellInput {
                row,
                column,
                content: format!("Event {}", row * 3 + column),
                checked: checked.contains(&(row, column)),
            });
        }
    }
    Submission::Bingo(BingoSubmission {
        template_id: None,
        grid_size: 3,
        cells,
    })
}
