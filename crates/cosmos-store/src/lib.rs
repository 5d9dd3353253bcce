//! Embedded SQLite storage for crew members and players.

pub mod errors;
pub mod model;
pub mod sqlite;
pub mod store;

pub use errors::{StoreError, StoreResult};
pub use model::{CrewMemberRow, PlayerRow, RecordRow};
pub use sqlite::SqliteStore;
pub use store::Store;
