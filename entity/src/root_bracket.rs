use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "root_bracket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub post_bracket_id: i32,
    pub number_of_rounds: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post_bracket::Entity",
        from = "Column::PostBracketId",
        to = "super::post_bracket::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PostBracket,
}

impl Related<super::post_bracket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostBracket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
