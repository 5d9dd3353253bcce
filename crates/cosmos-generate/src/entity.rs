use serde::{Deserialize, Serialize};

/// Attribute names, which double as the XML leaf tags.
pub mod field {
    pub const ID: &str = "id";
    pub const NAME: &str = "nombre";
    pub const RANK: &str = "graduacion";
    pub const AGE: &str = "edad";
    pub const FACTION: &str = "faccion";
}

/// Kind of record a roster holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Crew,
    Starship,
}

impl EntityKind {
    /// Tag of the document root.
    pub fn root_tag(self) -> &'static str {
        match self {
            EntityKind::Crew => "crew",
            EntityKind::Starship => "starships",
        }
    }

    /// Tag of each entity element.
    pub fn element_tag(self) -> &'static str {
        match self {
            EntityKind::Crew => "crewmember",
            EntityKind::Starship => "starship",
        }
    }

    /// Attribute order for this kind.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            EntityKind::Crew => &[field::ID, field::NAME, field::RANK, field::AGE],
            EntityKind::Starship => &[field::ID, field::NAME, field::FACTION],
        }
    }
}

/// One synthesized record: ordered attribute name/value pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticEntity {
    kind: EntityKind,
    attributes: Vec<(&'static str, String)>,
}

impl SyntheticEntity {
    pub(crate) fn new(kind: EntityKind, attributes: Vec<(&'static str, String)>) -> Self {
        debug_assert!(
            attributes
                .iter()
                .map(|(name, _)| *name)
                .eq(kind.fields().iter().copied()),
            "attributes must follow the field order of {kind:?}"
        );
        Self { kind, attributes }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    pub fn into_attributes(self) -> Vec<(&'static str, String)> {
        self.attributes
    }
}
