pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_creators_table;
mod m20250301_000002_create_brands_table;
mod m20250301_000003_create_inquiry_templates_table;
mod m20250301_000004_create_inquiries_table;
mod m20250301_000005_create_collaborations_table;
mod m20250301_000006_create_milestones_table;
mod m20250301_000007_create_messages_table;
mod m20250301_000008_create_contracts_table;
mod m20250301_000009_create_tasks_table;
mod m20250301_000010_create_subtasks_table;
mod m20250302_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_creators_table::Migration),
            Box::new(m20250301_000002_create_brands_table::Migration),
            Box::new(m20250301_000003_create_inquiry_templates_table::Migration),
            Box::new(m20250301_000004_create_inquiries_table::Migration),
            Box::new(m20250301_000005_create_collaborations_table::Migration),
            Box::new(m20250301_000006_create_milestones_table::Migration),
            Box::new(m20250301_000007_create_messages_table::Migration),
            Box::new(m20250301_000008_create_contracts_table::Migration),
            Box::new(m20250301_000009_create_tasks_table::Migration),
            Box::new(m20250301_000010_create_subtasks_table::Migration),
            Box::new(m20250302_000001_add_indexes::Migration),
        ]
    }
}
