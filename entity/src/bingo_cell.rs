use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bingo_cell")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub post_bingo_id: i32,
    pub row_index: i32,
    pub column_index: i32,
    pub content: String,
    pub checked: bool,
    pub correct: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post_bingo::Entity",
        from = "Column::PostBingoId",
        to = "super::post_bingo::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PostBingo,
}

impl Related<super::post_bingo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostBingo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
