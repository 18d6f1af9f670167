pub mod brands;
pub mod collaborations;
pub mod contracts;
pub mod creators;
pub mod inquiries;
pub mod inquiry_templates;
pub mod messages;
pub mod milestones;
pub mod subtasks;
pub mod tasks;

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::locks::EntityLocks;

/// Connect to `database_url`.
///
/// An in-memory SQLite database lives only as long as its connection, so
/// the pool is pinned to exactly one connection in that case.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    if database_url.starts_with("sqlite") && database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await
}

/// Apply every pending migration.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}

/// The injected store: a database handle plus per-entity write locks.
///
/// Cloning is cheap and every clone shares the same locks.
#[derive(Clone)]
pub struct Store {
    pub db: DatabaseConnection,
    pub locks: std::sync::Arc<EntityLocks>,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            locks: std::sync::Arc::new(EntityLocks::new()),
        }
    }

    /// A fresh in-memory store with the schema applied.
    pub async fn in_memory() -> Result<Self, DbErr> {
        let db = connect("sqlite::memory:").await?;
        run_migrations(&db).await?;
        Ok(Self::new(db))
    }
}
