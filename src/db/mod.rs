use std::str::FromStr;

use sqlx::{
    Pool, Sqlite, SqliteConnection, Transaction,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::error::{AppError, Result};

pub mod bookstore_store;
pub mod table;

pub use bookstore_store::BookstoreStore;
pub use table::{Cell, SqlValue, Table, TableView};

pub type DbPool = Pool<Sqlite>;

/// Tables that must exist before the application will start.
pub const REQUIRED_TABLES: [&str; 3] = ["Book", "Customer", "Orders"];

/// Handle to the single process-wide database connection.
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Open an existing database and check that its schema is usable.
    ///
    /// The file is never created here: a missing file or a missing table is
    /// reported as an error.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(false);

        // One connection for the whole process; requests queue behind it.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.verify_schema().await?;

        tracing::info!(database_url, "Connected to bookstore database");
        Ok(database)
    }

    async fn verify_schema(&self) -> Result<()> {
        for table in REQUIRED_TABLES {
            let found: Option<(String,)> = sqlx::query_as(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ? COLLATE NOCASE",
            )
            .bind(table)
            .fetch_optional(&self.pool)
            .await?;

            if found.is_none() {
                return Err(AppError::MissingTable(table.to_string()));
            }
        }

        Ok(())
    }

    /// Run a read statement and return every row.
    pub async fn query(&self, sql: &str, params: &[SqlValue]) -> Result<Table> {
        let mut conn = self.pool.acquire().await?;
        query(&mut *conn, sql, params).await
    }

    /// Run a write statement and return the number of affected rows.
    pub async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64> {
        let mut conn = self.pool.acquire().await?;
        execute(&mut *conn, sql, params).await
    }

    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin().await?)
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// [`Database::query`] on an already acquired connection or open transaction.
pub async fn query(conn: &mut SqliteConnection, sql: &str, params: &[SqlValue]) -> Result<Table> {
    tracing::debug!(sql, ?params, "query");
    let rows = table::bind_params(sql, params)
        .fetch_all(&mut *conn)
        .await
        .map_err(AppError::Database)?;

    Ok(Table::from_rows(&rows)?)
}

/// [`Database::execute`] on an already acquired connection or open transaction.
pub async fn execute(conn: &mut SqliteConnection, sql: &str, params: &[SqlValue]) -> Result<u64> {
    tracing::debug!(sql, ?params, "execute");
    let result = table::bind_params(sql, params)
        .execute(&mut *conn)
        .await
        .map_err(AppError::Database)?;

    Ok(result.rows_affected())
}
