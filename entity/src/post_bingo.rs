use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post_bingo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub prediction_id: i32,
    pub user_id: i32,
    pub template_id: Option<i32>,
    pub kind: String,
    pub grid_size: i32,
    pub score: Option<i32>,
    pub max_score: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::prediction::Entity",
        from = "Column::PredictionId",
        to = "super::prediction::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Prediction,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::bingo_template::Entity",
        from = "Column::TemplateId",
        to = "super::bingo_template::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Template,
}

impl Related<super::prediction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prediction.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::bingo_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Template.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
