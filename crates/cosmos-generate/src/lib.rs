//! Synthetic roster generation for Cosmos.
//!
//! Entities are drawn from fixed catalogs through an injectable
//! [`RandomSource`], accumulated into a [`DocumentNode`] tree and written out
//! as indented XML.

pub mod catalog;
pub mod document;
pub mod engine;
pub mod entity;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod random;

pub use catalog::{AgeRange, Catalog, CrewCatalogs, Faction};
pub use document::{DocumentBuilder, DocumentNode};
pub use engine::{GenerationEngine, build_document};
pub use entity::{EntityKind, SyntheticEntity};
pub use errors::GenerationError;
pub use model::{CrewRoster, GenerateOptions, GenerationReport, GenerationRequest, Roster};
pub use random::{ChaChaSource, RandomSource};
