//! SeaORM entity models, one module per table.

pub mod prelude;

pub mod bingo_cell;
pub mod bingo_template;
pub mod bracket;
pub mod bracket_template;
pub mod category;
pub mod comment;
pub mod creation_flow;
pub mod discussion_post;
pub mod post_bingo;
pub mod post_bracket;
pub mod post_rank;
pub mod prediction;
pub mod rank_column;
pub mod rank_row;
pub mod rank_table;
pub mod ranking_template;
pub mod root_bracket;
pub mod team;
pub mod user;
