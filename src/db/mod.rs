mod member_repository;
mod models;
mod order_repository;

use crate::constants::SQLITE_BUSY_TIMEOUT_MS;
use crate::errors::StoreError;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Error as R2d2Error, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness};
use std::sync::Arc;
use tracing::debug;

pub use member_repository::*;
pub use models::*;
pub use order_repository::*;

/// Session settings applied to every pooled SQLite connection.
///
/// Writers from concurrent requests wait on the lock for up to the busy
/// timeout instead of failing with `database is locked`, and WAL keeps
/// readers off the writer's lock.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, R2d2Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), R2d2Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL;",
            self.busy_timeout_ms
        ))
        .map_err(R2d2Error::QueryError)
    }
}

/// Pooled handle on one SQLite database
#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl Database {
    /// Opens a connection pool on `db_url` holding at most `pool_size` connections
    pub fn new(db_url: &str, pool_size: u32) -> Result<Self, StoreError> {
        let manager = ConnectionManager::<SqliteConnection>::new(db_url);
        let pool = Pool::builder()
            .max_size(pool_size.max(1))
            .connection_customizer(Box::new(SqlitePragmas {
                busy_timeout_ms: SQLITE_BUSY_TIMEOUT_MS,
            }))
            .build(manager)?;

        Ok(Database {
            pool: Arc::new(pool),
        })
    }

    /// Opens a private in-memory database.
    ///
    /// The pool is capped at a single connection since every SQLite
    /// `:memory:` connection sees its own database.
    #[cfg(test)]
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::new(":memory:", 1)
    }

    /// Applies every pending migration from `migrations`
    pub fn migrate(&self, migrations: EmbeddedMigrations) -> Result<(), StoreError> {
        let mut pooled = self.pool.get()?;
        let conn: &mut SqliteConnection = &mut pooled;
        let applied = conn
            .run_pending_migrations(migrations)
            .map_err(|e| StoreError::MigrationError(e.to_string()))?;
        debug!("Applied {} migration(s)", applied.len());
        Ok(())
    }

    /// Runs `work` on a pooled connection off the async runtime
    pub async fn run<F, T>(&self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || {
            let mut pooled = pool.get()?;
            work(&mut *pooled)
        })
        .await?
    }
}
