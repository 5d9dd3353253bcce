use crate::catalog::Faction;
use crate::entity::{EntityKind, SyntheticEntity, field};
use crate::generators::Synthesizer;
use crate::random::{RandomSource, draw};

const REGISTRY_MAX: u32 = 99_999;
/// Offset of the last suffix letter from `A`.
const LAST_LETTER: u32 = 25;
/// Percentage of ships whose name carries a letter suffix.
const SUFFIX_PERCENT: u32 = 30;

/// Draws starships for a single faction.
#[derive(Debug, Clone, Copy)]
pub struct StarshipSynthesizer<'a> {
    faction: &'a Faction,
}

impl<'a> StarshipSynthesizer<'a> {
    pub fn new(faction: &'a Faction) -> Self {
        Self { faction }
    }
}

impl Synthesizer for StarshipSynthesizer<'_> {
    fn kind(&self) -> EntityKind {
        EntityKind::Starship
    }

    fn synthesize(&self, rng: &mut dyn RandomSource) -> SyntheticEntity {
        let prefix = rng.choose(&self.faction.prefixes);
        let number = draw(rng, 0, REGISTRY_MAX);
        let id = format!("{prefix}-{number:05}");

        let base = rng.choose(&self.faction.names);
        let name = if draw(rng, 0, 99) < SUFFIX_PERCENT {
            let offset = draw(rng, 0, LAST_LETTER) as u8;
            let letter = char::from(b'A' + offset);
            format!("{base}-{letter}")
        } else {
            base.to_string()
        };

        SyntheticEntity::new(
            EntityKind::Starship,
            vec![
                (field::ID, id),
                (field::NAME, name),
                (field::FACTION, self.faction.label.clone()),
            ],
        )
    }
}
