pub mod config;
pub mod history;
pub mod init;
pub mod reset;
pub mod show;
pub mod target;

use anyhow::Context;
use std::path::Path;
use warplan_core::{
    store::{FileStore, Store},
    Ledger, LedgerError,
};

/// Load the saved session under `root`.
pub(crate) fn open(root: &Path) -> anyhow::Result<(FileStore, Ledger)> {
    let store = FileStore::new(root);
    let state = store
        .load()
        .context("failed to load state")?
        .ok_or(LedgerError::NotInitialized)?;
    let ledger = Ledger::from_state(state).context("saved state is inconsistent")?;
    Ok((store, ledger))
}

pub(crate) fn save(store: &FileStore, ledger: &Ledger) -> anyhow::Result<()> {
    store
        .save(&ledger.to_state())
        .with_context(|| format!("failed to save {}", store.path().display()))
}
