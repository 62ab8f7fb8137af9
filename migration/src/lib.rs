pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_category_table;
mod m20260301_000003_create_team_table;
mod m20260301_000004_create_prediction_table;
mod m20260301_000005_create_ranking_template_table;
mod m20260301_000006_create_bracket_template_table;
mod m20260301_000007_create_bingo_template_table;
mod m20260301_000008_create_post_rank_table;
mod m20260301_000009_create_rank_table_table;
mod m20260301_000010_create_rank_row_table;
mod m20260301_000011_create_rank_column_table;
mod m20260301_000012_create_post_bracket_table;
mod m20260301_000013_create_root_bracket_table;
mod m20260301_000014_create_bracket_table;
mod m20260301_000015_create_post_bingo_table;
mod m20260301_000016_create_bingo_cell_table;
mod m20260301_000017_create_discussion_post_table;
mod m20260301_000018_create_comment_table;
mod m20260301_000019_create_creation_flow_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_category_table::Migration),
            Box::new(m20260301_000003_create_team_table::Migration),
            Box::new(m20260301_000004_create_prediction_table::Migration),
            Box::new(m20260301_000005_create_ranking_template_table::Migration),
            Box::new(m20260301_000006_create_bracket_template_table::Migration),
            Box::new(m20260301_000007_create_bingo_template_table::Migration),
            Box::new(m20260301_000008_create_post_rank_table::Migration),
            Box::new(m20260301_000009_create_rank_table_table::Migration),
            Box::new(m20260301_000010_create_rank_row_table::Migration),
            Box::new(m20260301_000011_create_rank_column_table::Migration),
            Box::new(m20260301_000012_create_post_bracket_table::Migration),
            Box::new(m20260301_000013_create_root_bracket_table::Migration),
            Box::new(m20260301_000014_create_bracket_table::Migration),
            Box::new(m20260301_000015_create_post_bingo_table::Migration),
            Box::new(m20260301_000016_create_bingo_cell_table::Migration),
            Box::new(m20260301_000017_create_discussion_post_table::Migration),
            Box::new(m20260301_000018_create_comment_table::Migration),
            Box::new(m20260301_000019_create_creation_flow_table::Migration),
        ]
    }
}
