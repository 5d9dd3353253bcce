mod commands;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use cosmos_core::Error as CoreError;
use cosmos_generate::GenerationError;
use cosmos_store::StoreError;
use logging::{LogFormat, init_logging};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] CoreError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "cosmos", version, about = "Synthetic crew and starship rosters")]
struct Cli {
    /// Path to config.json (default: ./cosmos/config.json, then ./config.json).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log output format on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the crew roster XML.
    Crew(CrewArgs),
    /// Generate the starship roster XML.
    Starships(StarshipArgs),
    /// Generate both rosters.
    All(AllArgs),
    /// Work with the SQLite database.
    Db(DbArgs),
}

#[derive(Args, Debug)]
struct CrewArgs {
    /// Number of crew members.
    #[arg(long)]
    count: Option<usize>,
    /// Output path; overrides `crew.path`.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct StarshipArgs {
    /// Ships generated for each faction.
    #[arg(long)]
    per_faction: Option<usize>,
    /// Output path; overrides `starships.path`.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct AllArgs {
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct DbArgs {
    /// Database file; overrides `database.path`.
    #[arg(long)]
    database: Option<PathBuf>,
    #[command(subcommand)]
    command: DbCommand,
}

#[derive(Subcommand, Debug)]
enum DbCommand {
    /// Create the tables, insert the bridge crew and list it.
    Demo,
    /// Insert a crew member.
    AddCrew { name: String, rank: String },
    /// Insert a player.
    AddPlayer { name: String },
    /// Print every row of a table.
    List {
        #[arg(value_enum)]
        table: DbTable,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DbTable {
    Crew,
    Players,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_format) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "run failed");
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Crew(args) => commands::generate_crew(config_path, args),
        Command::Starships(args) => commands::generate_starships(config_path, args),
        Command::All(args) => commands::generate_all(config_path, args),
        Command::Db(args) => commands::run_db(config_path, args).await,
    }
}

fn report_error(err: &CliError) {
    eprintln!("error: {err}");
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
