use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rank_column")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rank_row_id: i32,
    pub column_index: i32,
    pub team_id: Option<i32>,
    pub correct: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rank_row::Entity",
        from = "Column::RankRowId",
        to = "super::rank_row::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RankRow,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Team,
}

impl Related<super::rank_row::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RankRow.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
