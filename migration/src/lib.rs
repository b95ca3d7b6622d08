pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_project_table;
mod m20250601_000003_create_project_section_table;
mod m20250601_000004_create_event_table;
mod m20250601_000005_create_product_table;
mod m20250601_000006_create_order_history_table;

/// Migrations for the primary store (users, projects, sections, events).
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_project_table::Migration),
            Box::new(m20250601_000003_create_project_section_table::Migration),
            Box::new(m20250601_000004_create_event_table::Migration),
        ]
    }
}

/// Migrations for the history store (products, order history).
///
/// Tracked in its own bookkeeping table so both migrators can share one database
/// when the two URLs point at the same place.
pub struct HistoryMigrator;

#[async_trait::async_trait]
impl MigratorTrait for HistoryMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000005_create_product_table::Migration),
            Box::new(m20250601_000006_create_order_history_table::Migration),
        ]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_history_migrations").into_iden()
    }
}
