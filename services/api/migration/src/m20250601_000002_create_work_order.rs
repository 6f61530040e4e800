use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkOrder::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkOrder::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkOrder::CreatedById).integer().not_null())
                    .col(
                        ColumnDef::new(WorkOrder::CreatedAtTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkOrder::CompletedAtTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(WorkOrder::AssignedToId).integer())
                    .col(
                        ColumnDef::new(WorkOrder::Canceled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(WorkOrder::Active)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(WorkOrder::Complete)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(WorkOrder::Description).text().not_null())
                    .col(
                        ColumnDef::new(WorkOrder::Stage)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    // Creator rows cannot be removed while they own work orders.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_order_created_by")
                            .from(WorkOrder::Table, WorkOrder::CreatedById)
                            .to(UserInternal::Table, UserInternal::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_order_assigned_to")
                            .from(WorkOrder::Table, WorkOrder::AssignedToId)
                            .to(UserInternal::Table, UserInternal::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkOrder::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WorkOrder {
    Table,
    Id,
    CreatedById,
    CreatedAtTime,
    CompletedAtTime,
    AssignedToId,
    Canceled,
    Active,
    Complete,
    Description,
    Stage,
}

#[derive(Iden)]
enum UserInternal {
    Table,
    Id,
}
