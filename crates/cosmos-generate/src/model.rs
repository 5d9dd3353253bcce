use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::{CrewCatalogs, Faction};
use crate::entity::EntityKind;

/// Options for the generation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Seed for the random source; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

/// Crew members to draw and the catalogs to draw them from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewRoster {
    pub count: usize,
    pub catalogs: CrewCatalogs,
}

/// What a request produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Roster {
    Crew(CrewRoster),
    /// Faction blocks, generated in order.
    Fleet(Vec<Faction>),
}

impl Roster {
    pub fn kind(&self) -> EntityKind {
        match self {
            Roster::Crew(_) => EntityKind::Crew,
            Roster::Fleet(_) => EntityKind::Starship,
        }
    }

    /// Number of entities the roster yields.
    pub fn len(&self) -> usize {
        match self {
            Roster::Crew(crew) => crew.count,
            Roster::Fleet(factions) => factions.iter().map(|faction| faction.count).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One generation run: a roster and the file it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub roster: Roster,
    pub output_path: PathBuf,
}

impl GenerationRequest {
    /// Crew roster over the built-in catalogs.
    pub fn crew(output_path: impl Into<PathBuf>, count: usize) -> Self {
        Self {
            roster: Roster::Crew(CrewRoster {
                count,
                catalogs: CrewCatalogs::standard(),
            }),
            output_path: output_path.into(),
        }
    }

    /// Federation, Romulan and Klingon fleet with `ships_per_faction` each.
    pub fn fleet(output_path: impl Into<PathBuf>, ships_per_faction: usize) -> Self {
        Self {
            roster: Roster::Fleet(Faction::standard_fleet(ships_per_faction)),
            output_path: output_path.into(),
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub kind: EntityKind,
    pub output_path: PathBuf,
    pub entities: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
    /// Seed of the engine-created source; `None` when the caller injected one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}
