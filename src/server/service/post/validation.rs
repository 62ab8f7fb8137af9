//! Structural validation of post bodies.
//!
//! Checks that only need the submission itself live here. Checks that need the
//! database (team existence, template visibility, the original's shape) are done by
//! the post service with the helpers at the bottom of this module.

use std::collections::{HashMap, HashSet};

use crate::server::{
    error::AppError,
    model::{
        post::{
            BingoCellInput, BingoPost, BingoSubmission, BracketPost, BracketSubmission,
            RankingPost, RankingSubmission, Submission,
        },
        template::TemplateShape,
    },
};

pub const MAX_RANKING_ROWS: i32 = 100;
pub const MAX_RANKING_COLUMNS: i32 = 10;
pub const MAX_BRACKET_ROUNDS: i32 = 7;
pub const MIN_BINGO_SIZE: i32 = 3;
pub const MAX_BINGO_SIZE: i32 = 7;

const MAX_BINGO_CONTENT: usize = 200;

fn bad_request(message: impl Into<String>) -> AppError {
    AppError::BadRequest(message.into())
}

/// Checks that template or post dimensions are within the supported bounds.
pub fn validate_shape(shape: TemplateShape) -> Result<(), AppError> {
    match shape {
        TemplateShape::Ranking {
            number_of_rows,
            number_of_columns,
        } => {
            if !(1..=MAX_RANKING_ROWS).contains(&number_of_rows) {
                return Err(bad_request(format!(
                    "A ranking must have between 1 and {} rows",
                    MAX_RANKING_ROWS
                )));
            }
            if !(1..=MAX_RANKING_COLUMNS).contains(&number_of_columns) {
                return Err(bad_request(format!(
                    "A ranking must have between 1 and {} columns",
                    MAX_RANKING_COLUMNS
                )));
            }
        }
        TemplateShape::Bracket { number_of_rounds } => {
            if !(1..=MAX_BRACKET_ROUNDS).contains(&number_of_rounds) {
                return Err(bad_request(format!(
                    "A bracket must have between 1 and {} rounds",
                    MAX_BRACKET_ROUNDS
                )));
            }
        }
        TemplateShape::Bingo { grid_size } => {
            if !(MIN_BINGO_SIZE..=MAX_BINGO_SIZE).contains(&grid_size) {
                return Err(bad_request(format!(
                    "A bingo card must be between {} and {} cells wide",
                    MIN_BINGO_SIZE, MAX_BINGO_SIZE
                )));
            }
        }
    }

    Ok(())
}

/// Dimensions of a submission, for comparison with templates.
pub fn submission_shape(submission: &Submission) -> TemplateShape {
    match submission {
        Submission::Ranking(s) => TemplateShape::Ranking {
            number_of_rows: s.number_of_rows,
            number_of_columns: s.number_of_columns,
        },
        Submission::Bracket(s) => TemplateShape::Bracket {
            number_of_rounds: s.number_of_rounds,
        },
        Submission::Bingo(s) => TemplateShape::Bingo {
            grid_size: s.grid_size,
        },
    }
}

/// Validates a submission's structure. Bingo contents are only required when
/// `require_content` is set, since counters and results take the original's.
pub fn validate_submission(submission: &Submission, require_content: bool) -> Result<(), AppError> {
    validate_shape(submission_shape(submission))?;

    match submission {
        Submission::Ranking(s) => validate_ranking(s),
        Submission::Bracket(s) => validate_bracket(s),
        Submission::Bingo(s) => validate_bingo(s, require_content),
    }
}

fn validate_ranking(submission: &RankingSubmission) -> Result<(), AppError> {
    let mut coordinates = HashSet::new();
    let mut teams = HashSet::new();

    for cell in &submission.cells {
        if !(0..submission.number_of_rows).contains(&cell.row)
            || !(0..submission.number_of_columns).contains(&cell.column)
        {
            return Err(bad_request(format!(
                "Cell ({}, {}) is outside the {}x{} grid",
                cell.row, cell.column, submission.number_of_rows, submission.number_of_columns
            )));
        }
        if !coordinates.insert((cell.row, cell.column)) {
            return Err(bad_request(format!(
                "Cell ({}, {}) is listed more than once",
                cell.row, cell.column
            )));
        }
        if let Some(team_id) = cell.team_id {
            if !teams.insert(team_id) {
                return Err(bad_request(format!(
                    "Team {} appears more than once in the ranking",
                    team_id
                )));
            }
        }
    }

    Ok(())
}

/// Number of slots in `round` of a bracket with `rounds` rounds after the seeding.
pub fn slots_in_round(rounds: i32, round: i32) -> i32 {
    1 << (rounds - round)
}

fn validate_bracket(submission: &BracketSubmission) -> Result<(), AppError> {
    let rounds = submission.number_of_rounds;
    let mut picks: HashMap<(i32, i32), Option<i32>> = HashMap::new();

    for slot in &submission.slots {
        if !(0..=rounds).contains(&slot.round)
            || !(0..slots_in_round(rounds, slot.round)).contains(&slot.position)
        {
            return Err(bad_request(format!(
                "Slot ({}, {}) does not exist in a {}-round bracket",
                slot.round, slot.position, rounds
            )));
        }
        if picks.insert((slot.round, slot.position), slot.team_id).is_some() {
            return Err(bad_request(format!(
                "Slot ({}, {}) is listed more than once",
                slot.round, slot.position
            )));
        }
    }

    let mut seeded = HashSet::new();
    for slot in submission.slots.iter().filter(|s| s.round == 0) {
        if let Some(team_id) = slot.team_id {
            if !seeded.insert(team_id) {
                return Err(bad_request(format!("Team {} is seeded more than once", team_id)));
            }
        }
    }

    for slot in submission.slots.iter().filter(|s| s.round >= 1) {
        let Some(team_id) = slot.team_id else {
            continue;
        };
        let pick = |position: i32| picks.get(&(slot.round - 1, position)).copied().flatten();
        if pick(2 * slot.position) != Some(team_id) && pick(2 * slot.position + 1) != Some(team_id)
        {
            return Err(bad_request(format!(
                "Team {} in slot ({}, {}) did not play in the previous round",
                team_id, slot.round, slot.position
            )));
        }
    }

    Ok(())
}

fn validate_bingo(submission: &BingoSubmission, require_content: bool) -> Result<(), AppError> {
    let n = submission.grid_size;
    let mut coordinates = HashSet::new();

    for cell in &submission.cells {
        if !(0..n).contains(&cell.row) || !(0..n).contains(&cell.column) {
            return Err(bad_request(format!(
                "Cell ({}, {}) is outside the {}x{} card",
                cell.row, cell.column, n, n
            )));
        }
        if !coordinates.insert((cell.row, cell.column)) {
            return Err(bad_request(format!(
                "Cell ({}, {}) is listed more than once",
                cell.row, cell.column
            )));
        }
        if require_content {
            if cell.content.is_empty() {
                return Err(bad_request(format!(
                    "Cell ({}, {}) must have content",
                    cell.row, cell.column
                )));
            }
            if cell.content.chars().count() > MAX_BINGO_CONTENT {
                return Err(bad_request(format!(
                    "Cell content must be at most {} characters",
                    MAX_BINGO_CONTENT
                )));
            }
        }
    }

    if require_content && coordinates.len() as i32 != n * n {
        return Err(bad_request(format!(
            "A {}x{} bingo card needs exactly {} cells",
            n,
            n,
            n * n
        )));
    }

    Ok(())
}

/// Checks a counter or result ranking against the original's dimensions.
pub fn match_ranking(submission: &RankingSubmission, original: &RankingPost) -> Result<(), AppError> {
    if submission.number_of_rows != original.number_of_rows
        || submission.number_of_columns != original.number_of_columns
    {
        return Err(bad_request(format!(
            "The ranking must be {}x{} like the original",
            original.number_of_rows, original.number_of_columns
        )));
    }

    Ok(())
}

/// Checks a counter or result bracket against the original's rounds and seeding.
pub fn match_bracket(submission: &BracketSubmission, original: &BracketPost) -> Result<(), AppError> {
    if submission.number_of_rounds != original.number_of_rounds {
        return Err(bad_request(format!(
            "The bracket must have {} rounds like the original",
            original.number_of_rounds
        )));
    }

    let seeding: HashMap<i32, Option<i32>> = submission
        .slots
        .iter()
        .filter(|s| s.round == 0)
        .map(|s| (s.position, s.team_id))
        .collect();

    for slot in original.slots.iter().filter(|s| s.round == 0) {
        if seeding.get(&slot.position).copied().flatten() != slot.team_id {
            return Err(bad_request(
                "The bracket must keep the original's seeding".to_string(),
            ));
        }
    }

    Ok(())
}

/// Builds a counter or result card from the original's contents and the submitted
/// `checked` flags. Cells not listed in the submission are unchecked.
pub fn merge_bingo(
    submission: &BingoSubmission,
    original: &BingoPost,
) -> Result<BingoSubmission, AppError> {
    if submission.grid_size != original.grid_size {
        return Err(bad_request(format!(
            "The bingo card must be {}x{} like the original",
            original.grid_size, original.grid_size
        )));
    }

    let checked: HashSet<(i32, i32)> = submission
        .cells
        .iter()
        .filter(|c| c.checked)
        .map(|c| (c.row, c.column))
        .collect();

    Ok(BingoSubmission {
        template_id: submission.template_id,
        grid_size: original.grid_size,
        cells: original
            .cells
            .iter()
            .map(|c| BingoCellInput {
                row: c.row,
                column: c.column,
                content: c.content.clone(),
                checked: checked.contains(&(c.row, c.column)),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::post::{BracketSlotInput, RankCellInput};

    fn ranking(cells: Vec<(i32, i32, Option<i32>)>) -> Submission {
        Submission::Ranking(RankingSubmission {
            template_id: None,
            number_of_rows: 3,
            number_of_columns: 2,
            cells: cells
                .into_iter()
                .map(|(row, column, team_id)| RankCellInput {
                    row,
                    column,
                    team_id,
                })
                .collect(),
        })
    }

    fn bracket(slots: Vec<(i32, i32, i32)>) -> Submission {
        Submission::Bracket(BracketSubmission {
            template_id: None,
            number_of_rounds: 2,
            slots: slots
                .into_iter()
                .map(|(round, position, team)| BracketSlotInput {
                    round,
                    position,
                    team_id: Some(team),
                })
                .collect(),
        })
    }

    fn bingo(size: i32, content: &str) -> BingoSubmission {
        let mut cells = Vec::new();
        for row in 0..size {
            for column in 0..size {
                cells.push(BingoCellInput {
                    row,
                    column,
                    content: content.to_string(),
                    checked: row == column,
                });
            }
        }
        BingoSubmission {
            template_id: None,
            grid_size: size,
            cells,
        }
    }

    #[test]
    fn rejects_out_of_bounds_dimensions() {
        for shape in [
            TemplateShape::Ranking {
                number_of_rows: 0,
                number_of_columns: 1,
            },
            TemplateShape::Ranking {
                number_of_rows: 5,
                number_of_columns: 11,
            },
            TemplateShape::Bracket { number_of_rounds: 8 },
            TemplateShape::Bingo { grid_size: 2 },
        ] {
            assert!(matches!(validate_shape(shape), Err(AppError::BadRequest(_))));
        }

        assert!(validate_shape(TemplateShape::Bingo { grid_size: 7 }).is_ok());
    }

    #[test]
    fn ranking_rejects_duplicates_and_outside_cells() {
        assert!(validate_submission(&ranking(vec![(0, 0, Some(1)), (2, 1, Some(2))]), true).is_ok());

        let outside = ranking(vec![(3, 0, Some(1))]);
        let same_cell = ranking(vec![(0, 0, Some(1)), (0, 0, Some(2))]);
        let same_team = ranking(vec![(0, 0, Some(1)), (1, 0, Some(1))]);
        for submission in [outside, same_cell, same_team] {
            assert!(validate_submission(&submission, true).is_err());
        }
    }

    #[test]
    fn bracket_winners_must_come_from_previous_round() {
        let valid = bracket(vec![
            (0, 0, 1),
            (0, 1, 2),
            (0, 2, 3),
            (0, 3, 4),
            (1, 0, 2),
            (1, 1, 3),
            (2, 0, 3),
        ]);
        assert!(validate_submission(&valid, true).is_ok());

        let wrong_winner = bracket(vec![(0, 0, 1), (0, 1, 2), (1, 0, 3)]);
        assert!(validate_submission(&wrong_winner, true).is_err());

        let missing_slot = bracket(vec![(1, 2, 1)]);
        assert!(validate_submission(&missing_slot, true).is_err());
    }

    #[test]
    fn bingo_needs_every_cell_with_content() {
        assert!(validate_submission(&Submission::Bingo(bingo(3, "Overtime")), true).is_ok());
        assert!(validate_submission(&Submission::Bingo(bingo(3, "")), true).is_err());
        // Counters only carry flags.
        assert!(validate_submission(&Submission::Bingo(bingo(3, "")), false).is_ok());

        let mut partial = bingo(3, "Overtime");
        partial.cells.pop();
        assert!(validate_submission(&Submission::Bingo(partial), true).is_err());
    }
}
