use std::path::PathBuf;

use thiserror::Error;

/// Core error type shared across Cosmos crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be opened or read.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON for the expected shape.
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// A required key path (e.g. `crew.path`) has no value.
    #[error("missing configuration key: {0}")]
    MissingKey(&'static str),
}

/// Convenience alias for results returned by Cosmos crates.
pub type Result<T> = std::result::Result<T, Error>;
