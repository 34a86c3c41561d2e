//! PostgreSQL backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use pgm_core::{ConnectParams, Migration};
use tokio_postgres::{Client, NoTls, SimpleQueryMessage};

/// Name of the migration tracking table
pub const TRACKING_TABLE: &str = "pg_migrations";

/// Tracking table DDL. `created` is assigned by the server at insert time.
const CREATE_TRACKING_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS pg_migrations (
    name        text PRIMARY KEY,
    ordinal     integer NOT NULL,
    created     timestamptz NOT NULL DEFAULT now(),
    md5         text NOT NULL,
    production  boolean NOT NULL DEFAULT true
)";

const SELECT_HISTORY: &str =
    "SELECT name, ordinal, md5, created, production FROM pg_migrations ORDER BY ordinal ASC";

const INSERT_HISTORY: &str =
    "INSERT INTO pg_migrations (name, ordinal, md5, production) VALUES ($1, $2, $3, $4)";

const LOCK_TRACKING_TABLE: &str = "LOCK TABLE pg_migrations IN ACCESS EXCLUSIVE MODE";

const SET_ISOLATION: &str =
    "SET SESSION CHARACTERISTICS AS TRANSACTION ISOLATION LEVEL SERIALIZABLE";

const TABLE_EXISTS: &str = "SELECT EXISTS (
    SELECT 1 FROM information_schema.tables
    WHERE table_schema = current_schema() AND table_name = $1
)";

/// PostgreSQL database backend
pub struct PostgresBackend {
    client: Client,
}

impl PostgresBackend {
    /// Connect using the given parameter bag.
    ///
    /// The driver's connection task is spawned onto the runtime and logs
    /// any terminal error; dropping the backend shuts it down.
    pub async fn connect(params: &ConnectParams) -> DbResult<Self> {
        let conn_str = params.to_connection_string();
        let (client, connection) = tokio_postgres::connect(&conn_str, NoTls)
            .await
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("postgres connection error: {e}");
            }
        });

        Ok(Self { client })
    }

    /// Wrap an already-connected client (tests, pooled callers)
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Database for PostgresBackend {
    async fn execute(&self, sql: &str) -> DbResult<u64> {
        // Simple protocol: migration DDL is not always preparable
        let messages = self
            .client
            .simple_query(sql)
            .await
            .map_err(|e| DbError::ExecutionError(format!("{}: {}", e, sql)))?;

        let mut affected = 0;
        for message in messages {
            if let SimpleQueryMessage::CommandComplete(count) = message {
                affected += count;
            }
        }
        Ok(affected)
    }

    async fn set_strictest_isolation(&self) -> DbResult<()> {
        self.client
            .batch_execute(SET_ISOLATION)
            .await
            .map_err(|e| DbError::ExecutionError(format!("set isolation failed: {e}")))
    }

    async fn tracking_table_exists(&self) -> DbResult<bool> {
        let row = self
            .client
            .query_one(TABLE_EXISTS, &[&TRACKING_TABLE])
            .await
            .map_err(|e| DbError::QueryError(format!("existence probe failed: {e}")))?;
        Ok(row.get(0))
    }

    async fn create_tracking_table(&self) -> DbResult<()> {
        self.client
            .batch_execute(CREATE_TRACKING_TABLE)
            .await
            .map_err(|e| DbError::ExecutionError(format!("create tracking table failed: {e}")))
    }

    async fn lock_tracking_table(&self) -> DbResult<()> {
        self.client
            .batch_execute(LOCK_TRACKING_TABLE)
            .await
            .map_err(|e| DbError::ExecutionError(format!("lock tracking table failed: {e}")))
    }

    async fn applied_migrations(&self) -> DbResult<Vec<Migration>> {
        let rows = self
            .client
            .query(SELECT_HISTORY, &[])
            .await
            .map_err(|e| DbError::QueryError(format!("history read failed: {e}")))?;

        Ok(rows
            .iter()
            .map(|row| {
                Migration::applied(
                    row.get::<_, String>("name"),
                    row.get::<_, i32>("ordinal"),
                    row.get::<_, String>("md5"),
                    row.get("created"),
                    row.get::<_, bool>("production"),
                )
            })
            .collect())
    }

    async fn record_migration(&self, migration: &Migration) -> DbResult<()> {
        self.client
            .execute(
                INSERT_HISTORY,
                &[
                    &migration.name,
                    &migration.ordinal,
                    &migration.md5,
                    &migration.production,
                ],
            )
            .await
            .map_err(|e| {
                DbError::QueryError(format!("recording '{}' failed: {e}", migration.name))
            })?;
        Ok(())
    }

    async fn begin(&self) -> DbResult<()> {
        self.client
            .batch_execute("BEGIN")
            .await
            .map_err(|e| DbError::TransactionError(format!("BEGIN failed: {e}")))
    }

    async fn commit(&self) -> DbResult<()> {
        self.client
            .batch_execute("COMMIT")
            .await
            .map_err(|e| DbError::TransactionError(format!("COMMIT failed: {e}")))
    }

    async fn rollback(&self) -> DbResult<()> {
        self.client
            .batch_execute("ROLLBACK")
            .await
            .map_err(|e| DbError::TransactionError(format!("ROLLBACK failed: {e}")))
    }

    fn db_type(&self) -> &'static str {
        "postgres"
    }
}
