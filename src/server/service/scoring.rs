//! Scoring of posts against the official result of their format.
//!
//! Pure functions over loaded posts; the results service persists what they return.
//!
//! - Ranking: one point per predicted cell holding the same team as the official cell
//!   at the same coordinate.
//! - Bracket: round 0 is seeding and not scored; a correct pick in round `r` is worth
//!   `2^(r-1)` points.
//! - Bingo: one point per cell whose `checked` flag matches the official card, plus
//!   `grid_size` for every line checked completely on both cards.

use std::collections::{HashMap, HashSet};

use crate::server::model::{
    post::{BingoPost, BracketPost, Post, PostHeader, RankingPost},
    results::{PostScore, ScoredEntry},
};

/// Scores `post` against the official post of the same format.
///
/// Returns `None` when the two posts are of different formats.
pub fn score_post(post: &Post, official: &Post) -> Option<PostScore> {
    match (post, official) {
        (Post::Ranking(post), Post::Ranking(official)) => Some(score_ranking(post, official)),
        (Post::Bracket(post), Post::Bracket(official)) => Some(score_bracket(post, official)),
        (Post::Bingo(post), Post::Bingo(official)) => Some(score_bingo(post, official)),
        _ => None,
    }
}

pub fn score_ranking(post: &RankingPost, official: &RankingPost) -> PostScore {
    let official_cells: HashMap<(i32, i32), i32> = official
        .cells
        .iter()
        .filter_map(|c| c.team_id.map(|team| ((c.row, c.column), team)))
        .collect();

    let mut score = 0;
    let marks = post
        .cells
        .iter()
        .map(|cell| {
            let mark = cell.team_id.map(|team| {
                let correct = official_cells.get(&(cell.row, cell.column)) == Some(&team);
                if correct {
                    score += 1;
                }
                correct
            });
            (cell.id, mark)
        })
        .collect();

    PostScore {
        score,
        max_score: official_cells.len() as i32,
        marks,
    }
}

/// Points awarded for a correct pick in `round`.
fn bracket_points(round: i32) -> i32 {
    1 << (round - 1)
}

pub fn score_bracket(post: &BracketPost, official: &BracketPost) -> PostScore {
    let official_picks: HashMap<(i32, i32), i32> = official
        .slots
        .iter()
        .filter(|s| s.round >= 1)
        .filter_map(|s| s.team_id.map(|team| ((s.round, s.position), team)))
        .collect();

    let max_score = official_picks
        .keys()
        .map(|(round, _)| bracket_points(*round))
        .sum();

    let mut score = 0;
    let marks = post
        .slots
        .iter()
        .map(|slot| {
            if slot.round == 0 {
                return (slot.id, None);
            }
            let mark = slot.team_id.map(|team| {
                let correct = official_picks.get(&(slot.round, slot.position)) == Some(&team);
                if correct {
                    score += bracket_points(slot.round);
                }
                correct
            });
            (slot.id, mark)
        })
        .collect();

    PostScore {
        score,
        max_score,
        marks,
    }
}

/// Every row, column and both diagonals of an `n` x `n` card as coordinate lists.
fn bingo_lines(n: i32) -> Vec<Vec<(i32, i32)>> {
    let mut lines = Vec::new();
    for i in 0..n {
        lines.push((0..n).map(|c| (i, c)).collect());
        lines.push((0..n).map(|r| (r, i)).collect());
    }
    lines.push((0..n).map(|i| (i, i)).collect());
    lines.push((0..n).map(|i| (i, n - 1 - i)).collect());
    lines
}

fn checked_cells(post: &BingoPost) -> HashSet<(i32, i32)> {
    post.cells
        .iter()
        .filter(|c| c.checked)
        .map(|c| (c.row, c.column))
        .collect()
}

pub fn score_bingo(post: &BingoPost, official: &BingoPost) -> PostScore {
    let n = official.grid_size;
    let official_checked = checked_cells(official);
    let post_checked = checked_cells(post);

    let mut score = 0;
    let marks = post
        .cells
        .iter()
        .map(|cell| {
            let correct = cell.checked == official_checked.contains(&(cell.row, cell.column));
            if correct {
                score += 1;
            }
            (cell.id, Some(correct))
        })
        .collect();

    let mut official_lines = 0;
    for line in bingo_lines(n) {
        if !line.iter().all(|coord| official_checked.contains(coord)) {
            continue;
        }
        official_lines += 1;
        if line.iter().all(|coord| post_checked.contains(coord)) {
            score += n;
        }
    }

    PostScore {
        score,
        max_score: n * n + n * official_lines,
        marks,
    }
}

/// Assigns competition ranks (1, 1, 3) to values already sorted best first.
pub fn competition_ranks<T: PartialEq>(sorted: &[T]) -> Vec<u32> {
    let mut ranks = Vec::with_capacity(sorted.len());
    for (index, value) in sorted.iter().enumerate() {
        let rank = match index {
            0 => 1,
            _ if sorted[index - 1] == *value => ranks[index - 1],
            _ => index as u32 + 1,
        };
        ranks.push(rank);
    }
    ranks
}

/// Orders scored posts by score, earlier submissions first on ties, and ranks them.
///
/// Headers without a score are left out.
pub fn standings(headers: Vec<PostHeader>) -> Vec<ScoredEntry> {
    let mut scored: Vec<(PostHeader, i32, i32)> = headers
        .into_iter()
        .filter_map(|h| {
            let score = h.score?;
            let max_score = h.max_score.unwrap_or(0);
            Some((h, score, max_score))
        })
        .collect();
    scored.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then(a.0.created_at.cmp(&b.0.created_at))
            .then(a.0.id.cmp(&b.0.id))
    });

    let scores: Vec<i32> = scored.iter().map(|(_, score, _)| *score).collect();
    let ranks = competition_ranks(&scores);

    scored
        .into_iter()
        .zip(ranks)
        .map(|((header, score, max_score), rank)| ScoredEntry {
            rank,
            post_id: header.id,
            kind: header.kind,
            user_id: header.user_id,
            user_name: header.user_name,
            score,
            max_score,
            created_at: header.created_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::post::PostKind,
        server::model::post::{BingoCell, BracketSlot, RankCell},
    };
    use chrono::{Duration, Utc};

    fn header(id: i32, score: Option<i32>) -> PostHeader {
        PostHeader {
            id,
            prediction_id: 1,
            user_id: id,
            user_name: format!("user{}", id),
            template_id: None,
            kind: PostKind::Counter,
            score,
            max_score: score.map(|_| 10),
            created_at: Utc::now() + Duration::seconds(id as i64),
        }
    }

    fn ranking(teams: &[Option<i32>], first_id: i32) -> RankingPost {
        RankingPost {
            header: header(first_id, None),
            number_of_rows: teams.len() as i32,
            number_of_columns: 1,
            cells: teams
                .iter()
                .enumerate()
                .map(|(row, team)| RankCell {
                    id: first_id + row as i32,
                    row: row as i32,
                    column: 0,
                    team_id: *team,
                    team_name: None,
                    correct: None,
                })
                .collect(),
        }
    }

    /// Builds a 2-round bracket from its slots in (round, position) order.
    fn bracket(teams: [Option<i32>; 7], first_id: i32) -> BracketPost {
        let coords = [(0, 0), (0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (2, 0)];
        BracketPost {
            header: header(first_id, None),
            number_of_rounds: 2,
            slots: coords
                .iter()
                .zip(teams)
                .enumerate()
                .map(|(i, ((round, position), team_id))| BracketSlot {
                    id: first_id + i as i32,
                    round: *round,
                    position: *position,
                    team_id,
                    team_name: None,
                    correct: None,
                })
                .collect(),
        }
    }

    fn bingo(checked: &[(i32, i32)], first_id: i32) -> BingoPost {
        let mut cells = Vec::new();
        for row in 0..3 {
            for column in 0..3 {
                cells.push(BingoCell {
                    id: first_id + row * 3 + column,
                    row,
                    column,
                    content: format!("event {}-{}", row, column),
                    checked: checked.contains(&(row, column)),
                    correct: None,
                });
            }
        }
        BingoPost {
            header: header(first_id, None),
            grid_size: 3,
            cells,
        }
    }

    #[test]
    fn ranking_scores_matching_cells_only() {
        let official = ranking(&[Some(1), Some(2), Some(3), None], 100);
        let post = ranking(&[Some(1), Some(3), None, Some(4)], 200);

        let score = score_ranking(&post, &official);

        assert_eq!(score.score, 1);
        assert_eq!(score.max_score, 3);
        assert_eq!(
            score.marks,
            vec![(200, Some(true)), (201, Some(false)), (202, None), (203, Some(false))]
        );
    }

    #[test]
    fn bracket_weights_later_rounds_and_skips_seeding() {
        let official = bracket([Some(1), Some(2), Some(3), Some(4), Some(1), Some(4), Some(4)], 100);
        let post = bracket([Some(1), Some(2), Some(3), Some(4), Some(1), Some(3), Some(3)], 200);

        let score = score_bracket(&post, &official);

        // Round 1 picks are worth 1 each, the final 2.
        assert_eq!(score.score, 1);
        assert_eq!(score.max_score, 4);
        assert!(score.marks[..4].iter().all(|(_, mark)| mark.is_none()));
        assert_eq!(score.marks[4], (204, Some(true)));
        assert_eq!(score.marks[6], (206, Some(false)));
    }

    #[test]
    fn bingo_adds_bonus_for_shared_lines() {
        let official = bingo(&[(0, 0), (0, 1), (0, 2), (1, 1)], 100);
        let post = bingo(&[(0, 0), (0, 1), (0, 2), (2, 2)], 200);

        let score = score_bingo(&post, &official);

        // 7 matching cells, plus 3 for the shared top row.
        assert_eq!(score.score, 10);
        // 9 cells plus one fully checked official line.
        assert_eq!(score.max_score, 12);
        assert_eq!(score.marks.len(), 9);
        assert_eq!(score.marks[4], (204, Some(false)));
    }

    #[test]
    fn bingo_counts_both_diagonals() {
        let diagonals = [(0, 0), (1, 1), (2, 2), (0, 2), (2, 0)];
        let official = bingo(&diagonals, 100);
        let post = bingo(&diagonals, 200);

        let score = score_bingo(&post, &official);

        assert_eq!(score.score, 9 + 2 * 3);
        assert_eq!(score.max_score, score.score);
    }

    #[test]
    fn competition_ranking_shares_ranks_and_skips() {
        assert_eq!(competition_ranks(&[9, 7, 7, 5]), vec![1, 2, 2, 4]);
        assert_eq!(competition_ranks(&[3, 3, 1]), vec![1, 1, 3]);
        assert!(competition_ranks::<i32>(&[]).is_empty());
    }

    #[test]
    fn standings_order_ties_by_submission_time() {
        let entries = standings(vec![
            header(3, Some(5)),
            header(1, Some(5)),
            header(2, Some(8)),
            header(4, None),
        ]);

        let order: Vec<(i32, u32)> = entries.iter().map(|e| (e.post_id, e.rank)).collect();
        assert_eq!(order, vec![(2, 1), (1, 2), (3, 2)]);
    }
}
