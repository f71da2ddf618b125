pub use sea_orm_migration::prelude::*;

mod m20251229_000001_create_blog_tables;
mod m20260124_000002_create_project_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251229_000001_create_blog_tables::Migration),
            Box::new(m20260124_000002_create_project_tables::Migration),
        ]
    }
}
