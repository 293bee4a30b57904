use crate::error::Result;
use crate::paths;
use crate::state::LedgerState;
use chrono::Utc;
use std::cell::RefCell;
use std::path::PathBuf;

/// Where a session's ledger state lives between runs.
pub trait Store {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<LedgerState>>;
    fn save(&self, state: &LedgerState) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// YAML state file under `<root>/.warplan/state.yaml`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> PathBuf {
        paths::state_path(&self.root)
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<Option<LedgerState>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path)?;
        let state: LedgerState = serde_yaml::from_str(&data)?;
        Ok(Some(state))
    }

    fn save(&self, state: &LedgerState) -> Result<()> {
        let mut state = state.clone();
        state.last_updated = Utc::now();
        let data = serde_yaml::to_string(&state)?;
        crate::io::atomic_write(&self.path(), data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<Option<LedgerState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Option<LedgerState>> {
        Ok(self.state.borrow().clone())
    }

    fn save(&self, state: &LedgerState) -> Result<()> {
        *self.state.borrow_mut() = Some(state.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
