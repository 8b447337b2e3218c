use std::time::Duration;

use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction,
    Statement, TransactionTrait,
};
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::user::{NewUser, UserRepository};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MIN_CONNECTIONS: u32 = 1;

/// Process-wide handle to the connection pool. Cheap to clone; every clone
/// shares the same pool. The store never runs migrations itself, the
/// `migrate` binary owns the schema.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn connect(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_MIN_CONNECTIONS).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        info!(
            "Database connected (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    /// Opens a unit-of-work transaction. Nothing is committed until the
    /// caller calls `commit`; dropping the transaction rolls it back. One
    /// transaction per logical request, never shared across units of work.
    pub async fn begin(&self) -> Result<DatabaseTransaction> {
        Ok(self.conn.begin().await?)
    }

    #[must_use]
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.conn.clone())
    }
}
