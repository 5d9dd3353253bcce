use thiserror::Error;

use crate::entity::EntityKind;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("catalog '{0}' has no values")]
    EmptyCatalog(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("cannot append a {found:?} entity to a {expected:?} document")]
    KindMismatch {
        expected: EntityKind,
        found: EntityKind,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
