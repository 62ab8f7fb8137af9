use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rank_table")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub post_rank_id: i32,
    pub number_of_rows: i32,
    pub number_of_columns: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post_rank::Entity",
        from = "Column::PostRankId",
        to = "super::post_rank::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PostRank,
}

impl Related<super::post_rank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostRank.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
