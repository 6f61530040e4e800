use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_internal;
mod m20250601_000002_create_work_order;
mod m20250601_000003_add_work_order_active_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_internal::Migration),
            Box::new(m20250601_000002_create_work_order::Migration),
            Box::new(m20250601_000003_add_work_order_active_index::Migration),
        ]
    }
}
