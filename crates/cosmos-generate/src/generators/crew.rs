use crate::catalog::CrewCatalogs;
use crate::entity::{EntityKind, SyntheticEntity, field};
use crate::generators::Synthesizer;
use crate::random::{RandomSource, draw};

const ID_PREFIX: &str = "ID-";
const ID_TOKEN_LEN: usize = 8;

/// Draws crew members from first-name, surname and rank catalogs.
#[derive(Debug, Clone, Copy)]
pub struct CrewSynthesizer<'a> {
    catalogs: &'a CrewCatalogs,
}

impl<'a> CrewSynthesizer<'a> {
    pub fn new(catalogs: &'a CrewCatalogs) -> Self {
        Self { catalogs }
    }
}

impl Synthesizer for CrewSynthesizer<'_> {
    fn kind(&self) -> EntityKind {
        EntityKind::Crew
    }

    fn synthesize(&self, rng: &mut dyn RandomSource) -> SyntheticEntity {
        let id = crew_id(rng);
        let first = rng.choose(&self.catalogs.first_names);
        let last = rng.choose(&self.catalogs.surnames);
        let rank = rng.choose(&self.catalogs.ranks);
        let ages = self.catalogs.ages;
        let age = draw(rng, ages.min(), ages.max());

        SyntheticEntity::new(
            EntityKind::Crew,
            vec![
                (field::ID, id),
                (field::NAME, format!("{first} {last}")),
                (field::RANK, rank.to_string()),
                (field::AGE, age.to_string()),
            ],
        )
    }
}

/// `ID-` plus the leading hex digits of a random v4 UUID, uppercased.
///
/// Collisions are possible and not checked.
fn crew_id(rng: &mut dyn RandomSource) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    let token = format!("{:X}", uuid.simple());
    format!("{ID_PREFIX}{}", &token[..ID_TOKEN_LEN])
}
