use crate::registry::{Team, Unit};
use crate::types::Action;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Journal entries kept in saved state.
pub const HISTORY_LIMIT: usize = 200;

/// Layout version written to `state.yaml`.
pub const STATE_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Apply,
    Undo,
    Redo,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Apply => "apply",
            Operation::Undo => "undo",
            Operation::Redo => "redo",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One successful transition. `action` is what was written to the registry;
/// `changed` is false when the target already had that flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub op: Operation,
    pub action: Action,
    pub changed: bool,
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// LedgerState
// ---------------------------------------------------------------------------

/// Everything a ledger needs to resume a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    #[serde(default = "default_version")]
    pub version: u32,
    pub session: String,
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undo: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redo: Option<Action>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    pub last_updated: DateTime<Utc>,
}

fn default_version() -> u32 {
    STATE_VERSION
}

impl LedgerState {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            version: STATE_VERSION,
            session: session.into(),
            units: Vec::new(),
            teams: Vec::new(),
            undo: None,
            redo: None,
            history: Vec::new(),
            last_updated: Utc::now(),
        }
    }
}
