//! Core contracts shared across the Cosmos crates.
//!
//! Holds the configuration model and the error type used when resolving it.

pub mod config;
pub mod error;

pub use config::{
    CONFIG_FILE, CONFIG_SEARCH_DIR, CosmosConfig, CrewSection, DEFAULT_CREW_COUNT,
    DEFAULT_SHIPS_PER_FACTION, DatabaseSection, LoadedConfig, StarshipSection,
};
pub use error::{Error, Result};
