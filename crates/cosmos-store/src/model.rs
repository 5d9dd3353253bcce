use serde::Serialize;
use sqlx::FromRow;

/// Row of the `tripulantes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct CrewMemberRow {
    pub id: i64,
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "graduacion")]
    pub rank: String,
}

/// Row of the `player` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct PlayerRow {
    pub id: i64,
    #[sqlx(rename = "nombre")]
    pub name: String,
}

/// Row of a table created through [`crate::Store::create_table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct RecordRow {
    pub id: i64,
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "descripcion")]
    pub description: Option<String>,
}
