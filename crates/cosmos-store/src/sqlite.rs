use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, info};

use crate::errors::{StoreError, StoreResult};
use crate::model::{CrewMemberRow, PlayerRow, RecordRow};
use crate::store::Store;

const CREATE_CREW_TABLE: &str = "CREATE TABLE IF NOT EXISTS tripulantes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT NOT NULL,
    graduacion TEXT NOT NULL
)";

const CREATE_PLAYER_TABLE: &str = "CREATE TABLE IF NOT EXISTS player (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT NOT NULL
)";

/// SQLite-backed store over a single connection.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database file at `path`.
    pub async fn open(path: &Path) -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let store = Self::connect(options).await?;
        info!(path = %path.display(), "sqlite connection established");
        Ok(store)
    }

    /// Open a private in-memory database.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        Self::connect(options).await
    }

    async fn connect(options: SqliteConnectOptions) -> StoreResult<Self> {
        // One connection: an in-memory database is private to its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Close the connection.
    pub async fn close(&self) {
        if !self.pool.is_closed() {
            self.pool.close().await;
            info!("sqlite connection closed");
        }
    }
}

#[async_trait]
impl Store for SqliteStore {
    fn engine(&self) -> &'static str {
        "sqlite"
    }

    async fn create_crew_table(&self) -> StoreResult<()> {
        sqlx::query(CREATE_CREW_TABLE).execute(&self.pool).await?;
        debug!(table = "tripulantes", "table ready");
        Ok(())
    }

    async fn create_player_table(&self) -> StoreResult<()> {
        sqlx::query(CREATE_PLAYER_TABLE).execute(&self.pool).await?;
        debug!(table = "player", "table ready");
        Ok(())
    }

    async fn create_table(&self, table: &str) -> StoreResult<()> {
        let table = validate_identifier(table)?;
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {table} (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT NOT NULL,
    descripcion TEXT
)"
        );
        sqlx::query(&sql).execute(&self.pool).await?;
        debug!(table, "table ready");
        Ok(())
    }

    async fn insert_crew_member(&self, name: &str, rank: &str) -> StoreResult<i64> {
        let result = sqlx::query("INSERT INTO tripulantes (nombre, graduacion) VALUES (?, ?)")
            .bind(name)
            .bind(rank)
            .execute(&self.pool)
            .await?;
        let id = result.last_insert_rowid();
        info!(id, name, rank, "crew member inserted");
        Ok(id)
    }

    async fn insert_player(&self, name: &str) -> StoreResult<i64> {
        let result = sqlx::query("INSERT INTO player (nombre) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        let id = result.last_insert_rowid();
        info!(id, name, "player inserted");
        Ok(id)
    }

    async fn insert_record(
        &self,
        table: &str,
        name: &str,
        description: Option<&str>,
    ) -> StoreResult<i64> {
        let table = validate_identifier(table)?;
        let sql = format!("INSERT INTO {table} (nombre, descripcion) VALUES (?, ?)");
        let result = sqlx::query(&sql)
            .bind(name)
            .bind(description)
            .execute(&self.pool)
            .await?;
        let id = result.last_insert_rowid();
        info!(table, id, name, "record inserted");
        Ok(id)
    }

    async fn list_crew_members(&self) -> StoreResult<Vec<CrewMemberRow>> {
        let rows = sqlx::query_as::<_, CrewMemberRow>(
            "SELECT id, nombre, graduacion FROM tripulantes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_players(&self) -> StoreResult<Vec<PlayerRow>> {
        let rows = sqlx::query_as::<_, PlayerRow>("SELECT id, nombre FROM player ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_records(&self, table: &str) -> StoreResult<Vec<RecordRow>> {
        let table = validate_identifier(table)?;
        let sql = format!("SELECT id, nombre, descripcion FROM {table} ORDER BY id");
        let rows = sqlx::query_as::<_, RecordRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

/// Table names are interpolated into SQL, so only plain identifiers pass.
fn validate_identifier(name: &str) -> StoreResult<&str> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        None => false,
    };
    if valid {
        Ok(name)
    } else {
        Err(StoreError::InvalidIdentifier(name.to_string()))
    }
}
