//! Entity synthesizers: one record per call, drawn from fixed catalogs.

pub mod crew;
pub mod starship;

pub use crew::CrewSynthesizer;
pub use starship::StarshipSynthesizer;

use crate::entity::{EntityKind, SyntheticEntity};
use crate::random::RandomSource;

/// Produces independent synthetic records.
pub trait Synthesizer {
    fn kind(&self) -> EntityKind;

    fn synthesize(&self, rng: &mut dyn RandomSource) -> SyntheticEntity;
}
