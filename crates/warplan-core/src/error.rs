use crate::types::TargetKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("not initialized: run 'warplan init'")]
    NotInitialized,

    #[error("unit not found: {0}")]
    UnitNotFound(String),

    #[error("team not found: {0}")]
    TeamNotFound(String),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: TargetKind, id: String },

    #[error("invalid id '{0}': ids must be non-empty")]
    InvalidId(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl LedgerError {
    /// True for the unit/team lookup failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::UnitNotFound(_) | LedgerError::TeamNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
