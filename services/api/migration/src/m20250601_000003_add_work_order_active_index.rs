use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(WorkOrder::Table)
                    .col(WorkOrder::Active)
                    .name("idx_work_order_active")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_work_order_active")
                    .table(WorkOrder::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum WorkOrder {
    Table,
    Active,
}
