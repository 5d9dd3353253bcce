use async_trait::async_trait;

use crate::errors::StoreResult;
use crate::model::{CrewMemberRow, PlayerRow, RecordRow};

/// Trait implemented by storage backends for the roster tables.
#[async_trait]
pub trait Store: Send + Sync {
    /// Returns the engine identifier (e.g. `sqlite`).
    fn engine(&self) -> &'static str;

    /// Create every fixed table.
    async fn initialize(&self) -> StoreResult<()> {
        self.create_crew_table().await?;
        self.create_player_table().await
    }

    async fn create_crew_table(&self) -> StoreResult<()>;

    async fn create_player_table(&self) -> StoreResult<()>;

    /// Create a table with `id`, `nombre` and `descripcion` columns.
    async fn create_table(&self, table: &str) -> StoreResult<()>;

    /// Insert a crew member and return its row id.
    async fn insert_crew_member(&self, name: &str, rank: &str) -> StoreResult<i64>;

    async fn insert_player(&self, name: &str) -> StoreResult<i64>;

    async fn insert_record(
        &self,
        table: &str,
        name: &str,
        description: Option<&str>,
    ) -> StoreResult<i64>;

    async fn list_crew_members(&self) -> StoreResult<Vec<CrewMemberRow>>;

    async fn list_players(&self) -> StoreResult<Vec<PlayerRow>>;

    async fn list_records(&self, table: &str) -> StoreResult<Vec<RecordRow>>;
}
