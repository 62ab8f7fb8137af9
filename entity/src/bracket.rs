use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bracket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub root_bracket_id: i32,
    pub round: i32,
    pub position: i32,
    pub team_id: Option<i32>,
    pub correct: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::root_bracket::Entity",
        from = "Column::RootBracketId",
        to = "super::root_bracket::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RootBracket,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Team,
}

impl Related<super::root_bracket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RootBracket.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
