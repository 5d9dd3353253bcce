use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// File name looked up during discovery.
pub const CONFIG_FILE: &str = "config.json";
/// Project directory checked before the base directory itself.
pub const CONFIG_SEARCH_DIR: &str = "cosmos";

pub const DEFAULT_CREW_COUNT: usize = 1000;
pub const DEFAULT_SHIPS_PER_FACTION: usize = 30;

/// Application configuration as stored in `config.json`.
///
/// Every section is optional when parsing; lookups of required paths go
/// through the accessor methods, which report the missing key path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosmosConfig {
    pub database: DatabaseSection,
    pub crew: CrewSection,
    pub starships: StarshipSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewSection {
    pub path: Option<PathBuf>,
    /// Number of crew members written per run.
    pub count: usize,
}

impl Default for CrewSection {
    fn default() -> Self {
        Self {
            path: None,
            count: DEFAULT_CREW_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarshipSection {
    pub path: Option<PathBuf>,
    /// Number of ships generated for each faction.
    pub ships_per_faction: usize,
}

impl Default for StarshipSection {
    fn default() -> Self {
        Self {
            path: None,
            ships_per_faction: DEFAULT_SHIPS_PER_FACTION,
        }
    }
}

/// A parsed configuration together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: CosmosConfig,
}

impl CosmosConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(Error::from)
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<LoadedConfig> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(LoadedConfig {
            path: path.to_path_buf(),
            config,
        })
    }

    /// Locate `config.json` under `base`, preferring `base/cosmos/config.json`.
    ///
    /// When neither candidate exists the error names the last path tried.
    pub fn discover(base: &Path) -> Result<LoadedConfig> {
        let nested = base.join(CONFIG_SEARCH_DIR).join(CONFIG_FILE);
        let path = if nested.is_file() {
            nested
        } else {
            base.join(CONFIG_FILE)
        };
        Self::load(&path)
    }

    pub fn database_path(&self) -> Result<&Path> {
        self.database
            .path
            .as_deref()
            .ok_or(Error::MissingKey("database.path"))
    }

    pub fn crew_path(&self) -> Result<&Path> {
        self.crew
            .path
            .as_deref()
            .ok_or(Error::MissingKey("crew.path"))
    }

    pub fn starship_path(&self) -> Result<&Path> {
        self.starships
            .path
            .as_deref()
            .ok_or(Error::MissingKey("starships.path"))
    }
}
