use anyhow::{Context, Result};
use cosmos_store::{SqliteStore, Store, StoreError};

#[tokio::test]
async fn initialize_is_idempotent() -> Result<()> {
    let store = SqliteStore::in_memory().await?;

    store.initialize().await?;
    store.initialize().await?;

    assert_eq!(store.engine(), "sqlite");
    assert!(store.list_crew_members().await?.is_empty());
    assert!(store.list_players().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn crew_members_read_back_in_insert_order() -> Result<()> {
    let store = SqliteStore::in_memory().await?;
    store.create_crew_table().await?;

    let kirk = store.insert_crew_member("James T. Kirk", "Capitán").await?;
    let spock = store.insert_crew_member("Spock", "Comandante").await?;

    let rows = store.list_crew_members().await?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, kirk);
    assert_eq!(rows[0].name, "James T. Kirk");
    assert_eq!(rows[0].rank, "Capitán");
    assert_eq!(rows[1].id, spock);
    assert_eq!(rows[1].name, "Spock");
    assert!(spock > kirk);
    Ok(())
}

#[tokio::test]
async fn players_are_stored() -> Result<()> {
    let store = SqliteStore::in_memory().await?;
    store.create_player_table().await?;

    store.insert_player("Worf").await?;
    store.insert_player("Data").await?;

    let names: Vec<String> = store
        .list_players()
        .await?
        .into_iter()
        .map(|row| row.name)
        .collect();
    assert_eq!(names, vec!["Worf", "Data"]);
    Ok(())
}

#[tokio::test]
async fn generic_tables_store_optional_descriptions() -> Result<()> {
    let store = SqliteStore::in_memory().await?;
    store.create_table("planetas").await?;

    store
        .insert_record("planetas", "Vulcano", Some("Planeta natal de Spock"))
        .await?;
    store.insert_record("planetas", "Qo'noS", None).await?;

    let rows = store.list_records("planetas").await?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].description.as_deref(), Some("Planeta natal de Spock"));
    assert_eq!(rows[1].name, "Qo'noS");
    assert_eq!(rows[1].description, None);
    Ok(())
}

#[tokio::test]
async fn table_names_must_be_plain_identifiers() -> Result<()> {
    let store = SqliteStore::in_memory().await?;

    for name in ["", "1planets", "planets; DROP TABLE player", "pla-nets"] {
        let result = store.create_table(name).await;
        assert!(
            matches!(result, Err(StoreError::InvalidIdentifier(_))),
            "{name:?} should be rejected"
        );
    }
    Ok(())
}

#[tokio::test]
async fn inserting_into_missing_table_is_a_database_error() -> Result<()> {
    let store = SqliteStore::in_memory().await?;

    let result = store.insert_player("Q").await;

    assert!(matches!(result, Err(StoreError::Db(_))));
    Ok(())
}

#[tokio::test]
async fn file_database_persists_across_connections() -> Result<()> {
    let path = std::env::temp_dir().join(format!("cosmos_store_{}.db", uuid::Uuid::new_v4()));

    let store = SqliteStore::open(&path)
        .await
        .context("opening file database")?;
    store.initialize().await?;
    store.insert_crew_member("Leonard McCoy", "Doctor").await?;
    store.close().await;

    let reopened = SqliteStore::open(&path).await?;
    let rows = reopened.list_crew_members().await?;
    reopened.close().await;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].rank, "Doctor");
    std::fs::remove_file(&path).ok();
    Ok(())
}
