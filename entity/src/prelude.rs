pub use super::bingo_cell::Entity as BingoCell;
pub use super::bingo_template::Entity as BingoTemplate;
pub use super::bracket::Entity as Bracket;
pub use super::bracket_template::Entity as BracketTemplate;
pub use super::category::Entity as Category;
pub use super::comment::Entity as Comment;
pub use super::creation_flow::Entity as CreationFlow;
pub use super::discussion_post::Entity as DiscussionPost;
pub use super::post_bingo::Entity as PostBingo;
pub use super::post_bracket::Entity as PostBracket;
pub use super::post_rank::Entity as PostRank;
pub use super::prediction::Entity as Prediction;
pub use super::rank_column::Entity as RankColumn;
pub use super::rank_row::Entity as RankRow;
pub use super::rank_table::Entity as RankTable;
pub use super::ranking_template::Entity as RankingTemplate;
pub use super::root_bracket::Entity as RootBracket;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
