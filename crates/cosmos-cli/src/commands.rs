use std::env;
use std::path::{Path, PathBuf};

use cosmos_core::{
    CosmosConfig, DEFAULT_CREW_COUNT, DEFAULT_SHIPS_PER_FACTION, Error as CoreError,
};
use cosmos_generate::{GenerateOptions, GenerationEngine, GenerationReport, GenerationRequest};
use cosmos_store::{SqliteStore, Store};
use serde::Serialize;
use tracing::debug;

use crate::{AllArgs, CliError, CrewArgs, DbArgs, DbCommand, DbTable, StarshipArgs};

const BRIDGE_CREW: [(&str, &str); 4] = [
    ("James T. Kirk", "Capitán"),
    ("Spock", "Comandante"),
    ("Leonard McCoy", "Doctor"),
    ("Montgomery Scott", "Ingeniero Jefe"),
];

pub fn generate_crew(config_path: Option<&Path>, args: CrewArgs) -> Result<(), CliError> {
    let config = load_config(config_path, &current_dir()?, args.out.is_none())?;
    let request = crew_request(args.out, args.count, config.as_ref())?;
    run_generation(&request, args.seed)
}

pub fn generate_starships(config_path: Option<&Path>, args: StarshipArgs) -> Result<(), CliError> {
    let config = load_config(config_path, &current_dir()?, args.out.is_none())?;
    let request = fleet_request(args.out, args.per_faction, config.as_ref())?;
    run_generation(&request, args.seed)
}

/// Flags win over the config; counts fall back to the built-in defaults.
fn crew_request(
    out: Option<PathBuf>,
    count: Option<usize>,
    config: Option<&CosmosConfig>,
) -> Result<GenerationRequest, CliError> {
    let out = match (out, config) {
        (Some(out), _) => out,
        (None, Some(config)) => config.crew_path()?.to_path_buf(),
        (None, None) => return Err(CoreError::MissingKey("crew.path").into()),
    };
    let count = count
        .or_else(|| config.map(|config| config.crew.count))
        .unwrap_or(DEFAULT_CREW_COUNT);
    Ok(GenerationRequest::crew(out, count))
}

fn fleet_request(
    out: Option<PathBuf>,
    per_faction: Option<usize>,
    config: Option<&CosmosConfig>,
) -> Result<GenerationRequest, CliError> {
    let out = match (out, config) {
        (Some(out), _) => out,
        (None, Some(config)) => config.starship_path()?.to_path_buf(),
        (None, None) => return Err(CoreError::MissingKey("starships.path").into()),
    };
    let per_faction = per_faction
        .or_else(|| config.map(|config| config.starships.ships_per_faction))
        .unwrap_or(DEFAULT_SHIPS_PER_FACTION);
    Ok(GenerationRequest::fleet(out, per_faction))
}

pub fn generate_all(config_path: Option<&Path>, args: AllArgs) -> Result<(), CliError> {
    let config = resolve_config(config_path, &current_dir()?)?;
    let crew = GenerationRequest::crew(config.crew_path()?, config.crew.count);
    let fleet = GenerationRequest::fleet(config.starship_path()?, config.starships.ships_per_faction);

    run_generation(&crew, args.seed)?;
    run_generation(&fleet, args.seed)
}

pub async fn run_db(config_path: Option<&Path>, args: DbArgs) -> Result<(), CliError> {
    let database = match args.database {
        Some(path) => path,
        None => resolve_config(config_path, &current_dir()?)?
            .database_path()?
            .to_path_buf(),
    };

    let store = SqliteStore::open(&database).await?;
    let result = run_db_command(&store, args.command).await;
    store.close().await;
    result
}

async fn run_db_command(store: &SqliteStore, command: DbCommand) -> Result<(), CliError> {
    match command {
        DbCommand::Demo => {
            store.create_crew_table().await?;
            for (name, rank) in BRIDGE_CREW {
                store.insert_crew_member(name, rank).await?;
            }
            print_rows(&store.list_crew_members().await?)
        }
        DbCommand::AddCrew { name, rank } => {
            store.create_crew_table().await?;
            store.insert_crew_member(&name, &rank).await?;
            Ok(())
        }
        DbCommand::AddPlayer { name } => {
            store.create_player_table().await?;
            store.insert_player(&name).await?;
            Ok(())
        }
        DbCommand::List { table } => {
            store.initialize().await?;
            match table {
                DbTable::Crew => print_rows(&store.list_crew_members().await?),
                DbTable::Players => print_rows(&store.list_players().await?),
            }
        }
    }
}

fn run_generation(request: &GenerationRequest, seed: Option<u64>) -> Result<(), CliError> {
    let engine = GenerationEngine::new(GenerateOptions { seed });
    let report: GenerationReport = engine.run(request)?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

/// Rows are printed to stdout as JSON lines.
fn print_rows<T: Serialize>(rows: &[T]) -> Result<(), CliError> {
    for row in rows {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

/// Load the configuration, tolerating its absence unless it was named
/// explicitly or is `required`. A config that exists but fails to parse is
/// always an error.
fn load_config(
    explicit: Option<&Path>,
    base: &Path,
    required: bool,
) -> Result<Option<CosmosConfig>, CliError> {
    match resolve_config(explicit, base) {
        Ok(config) => Ok(Some(config)),
        Err(CliError::Config(CoreError::ConfigNotFound { path, .. }))
            if explicit.is_none() && !required =>
        {
            debug!(path = %path.display(), "no configuration found, using defaults");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn resolve_config(explicit: Option<&Path>, base: &Path) -> Result<CosmosConfig, CliError> {
    let loaded = match explicit {
        Some(path) => CosmosConfig::load(path)?,
        None => CosmosConfig::discover(base)?,
    };
    Ok(loaded.config)
}

fn current_dir() -> Result<PathBuf, CliError> {
    env::current_dir().map_err(|source| {
        CliError::from(CoreError::ConfigNotFound {
            path: PathBuf::from("."),
            source,
        })
    })
}
