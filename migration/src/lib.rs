pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_parent_tables;
mod m20260301_000002_create_table_galleries;
mod m20260301_000003_create_table_special_projects;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_parent_tables::Migration),
            Box::new(m20260301_000002_create_table_galleries::Migration),
            Box::new(m20260301_000003_create_table_special_projects::Migration),
        ]
    }
}
