use sea_orm::entity::prelude::*;

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "work_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_by_id: i32,
    pub created_at_time: chrono::DateTime<chrono::Utc>,
    pub completed_at_time: Option<chrono::DateTime<chrono::Utc>>,
    pub assigned_to_id: Option<i32>,
    pub canceled: bool,
    pub active: bool,
    pub complete: bool,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub stage: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_internal::Entity",
        from = "Column::CreatedById",
        to = "super::user_internal::Column::Id",
        on_delete = "Restrict"
    )]
    CreatedBy,
    #[sea_orm(
        belongs_to = "super::user_internal::Entity",
        from = "Column::AssignedToId",
        to = "super::user_internal::Column::Id",
        on_delete = "SetNull"
    )]
    AssignedTo,
}

impl ActiveModelBehavior for ActiveModel {}
