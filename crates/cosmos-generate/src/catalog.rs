//! Sampling domains for the synthesizers, plus the built-in tables.

use crate::errors::GenerationError;

const FIRST_NAMES: [&str; 14] = [
    "James",
    "Jean-Luc",
    "Nyota",
    "Spock",
    "Hikaru",
    "Geordi",
    "Deanna",
    "William",
    "Kathryn",
    "Seven",
    "Pavel",
    "Montgomery",
    "Leonard",
    "Beverly",
];

const SURNAMES: [&str; 14] = [
    "Kirk", "Picard", "Uhura", "Sulu", "La Forge", "Troi", "Riker", "Janeway", "of Nine",
    "Chekov", "Scott", "McCoy", "Crusher", "Worf",
];

const RANKS: [&str; 8] = [
    "Almirante",
    "Capitán",
    "Comandante",
    "Teniente Comandante",
    "Teniente",
    "Alférez",
    "Suboficial",
    "Cadete",
];

const FEDERATION_NAMES: [&str; 15] = [
    "Enterprise",
    "Voyager",
    "Defiant",
    "Discovery",
    "Reliant",
    "Excalibur",
    "Constellation",
    "Yamato",
    "Phoenix",
    "Prometheus",
    "Equinox",
    "Titan",
    "Aurora",
    "Odyssey",
    "Sovereign",
];

const ROMULAN_NAMES: [&str; 15] = [
    "Valdore",
    "Devoras",
    "Khazara",
    "Algeron",
    "Terix",
    "Haakona",
    "Dividices",
    "Makar",
    "D'deridex",
    "Mogai",
    "Norexan",
    "Praetus",
    "Belak",
    "Keras",
    "Talvath",
];

const KLINGON_NAMES: [&str; 15] = [
    "Pagh",
    "Bortas",
    "Hegh'ta",
    "Rotarran",
    "Ch'Tang",
    "Korinar",
    "Maht-H'a",
    "K'mpec",
    "Kronos One",
    "Negh'Var",
    "Buruk",
    "Drovana",
    "Gr'oth",
    "Klothos",
    "Somraw",
];

const FEDERATION_PREFIXES: [&str; 2] = ["NCC", "NX"];
const ROMULAN_PREFIXES: [&str; 1] = ["IRW"];
const KLINGON_PREFIXES: [&str; 1] = ["IKS"];

pub const FEDERATION: &str = "Federacion Unida de Planetas";
pub const ROMULAN_EMPIRE: &str = "Imperio Estelar Romulano";
pub const KLINGON_EMPIRE: &str = "Imperio Klingon";

/// Named, non-empty list of candidate values for one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    name: String,
    values: Vec<String>,
}

impl Catalog {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Result<Self, GenerationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(GenerationError::EmptyCatalog(name));
        }
        Ok(Self { name, values })
    }

    fn fixed<const N: usize>(name: &str, values: [&str; N]) -> Self {
        const { assert!(N > 0, "built-in catalogs must not be empty") };
        Self {
            name: name.to_string(),
            values: values.iter().map(|value| value.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Value at `index`, clamped to the last entry.
    pub fn get(&self, index: usize) -> &str {
        let index = index.min(self.values.len() - 1);
        &self.values[index]
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|candidate| candidate == value)
    }
}

/// Inclusive age bounds for crew members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    min: u32,
    max: u32,
}

impl AgeRange {
    pub const STANDARD: AgeRange = AgeRange { min: 18, max: 65 };

    pub fn new(min: u32, max: u32) -> Result<Self, GenerationError> {
        if min > max {
            return Err(GenerationError::InvalidRequest(format!(
                "age range min {min} must be <= max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Catalogs a crew member is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewCatalogs {
    pub first_names: Catalog,
    pub surnames: Catalog,
    pub ranks: Catalog,
    pub ages: AgeRange,
}

impl CrewCatalogs {
    pub fn standard() -> Self {
        Self {
            first_names: Catalog::fixed("first_names", FIRST_NAMES),
            surnames: Catalog::fixed("surnames", SURNAMES),
            ranks: Catalog::fixed("ranks", RANKS),
            ages: AgeRange::STANDARD,
        }
    }

    /// Standard tables with the rank catalog replaced.
    pub fn with_ranks(mut self, ranks: Catalog) -> Self {
        self.ranks = ranks;
        self
    }
}

impl Default for CrewCatalogs {
    fn default() -> Self {
        Self::standard()
    }
}

/// A block of starships sharing a label, name catalog and prefix set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faction {
    pub label: String,
    pub names: Catalog,
    pub prefixes: Catalog,
    pub count: usize,
}

impl Faction {
    pub fn new(label: impl Into<String>, names: Catalog, prefixes: Catalog, count: usize) -> Self {
        Self {
            label: label.into(),
            names,
            prefixes,
            count,
        }
    }

    pub fn federation(count: usize) -> Self {
        Self::new(
            FEDERATION,
            Catalog::fixed("federation_names", FEDERATION_NAMES),
            Catalog::fixed("federation_prefixes", FEDERATION_PREFIXES),
            count,
        )
    }

    pub fn romulan(count: usize) -> Self {
        Self::new(
            ROMULAN_EMPIRE,
            Catalog::fixed("romulan_names", ROMULAN_NAMES),
            Catalog::fixed("romulan_prefixes", ROMULAN_PREFIXES),
            count,
        )
    }

    pub fn klingon(count: usize) -> Self {
        Self::new(
            KLINGON_EMPIRE,
            Catalog::fixed("klingon_names", KLINGON_NAMES),
            Catalog::fixed("klingon_prefixes", KLINGON_PREFIXES),
            count,
        )
    }

    /// Federation, Romulan and Klingon blocks, in that order.
    pub fn standard_fleet(ships_per_faction: usize) -> Vec<Faction> {
        vec![
            Self::federation(ships_per_faction),
            Self::romulan(ships_per_faction),
            Self::klingon(ships_per_faction),
        ]
    }
}
