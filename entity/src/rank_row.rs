use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rank_row")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rank_table_id: i32,
    pub row_index: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rank_table::Entity",
        from = "Column::RankTableId",
        to = "super::rank_table::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RankTable,
}

impl Related<super::rank_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RankTable.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
