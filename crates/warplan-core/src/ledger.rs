//! The ledger controller: the only path that mutates a registry.
//!
//! Undo and redo are single slots, not stacks. `apply` fills the undo slot
//! with the inverse of what it wrote and empties the redo slot; `undo` and
//! `redo` move one action across and never clear the opposite slot.
//!
//! An inverse always restores the flag observed before the write. When the
//! write flips the flag this is the opposite action on the same target; when
//! the target already had the flag the inverse is the same no-op action.

use crate::error::{LedgerError, Result};
use crate::log::ActionLog;
use crate::registry::{Registry, Roster};
use crate::snapshot::Snapshot;
use crate::state::{HistoryEntry, LedgerState, Operation, HISTORY_LIMIT, STATE_VERSION};
use crate::types::Action;
use chrono::Utc;

#[derive(Debug, Clone)]
pub struct Ledger {
    session: String,
    registry: Registry,
    log: ActionLog,
    history: Vec<HistoryEntry>,
}

impl Ledger {
    pub fn new(session: impl Into<String>, registry: Registry) -> Self {
        Self {
            session: session.into(),
            registry,
            log: ActionLog::new(),
            history: Vec::new(),
        }
    }

    pub fn from_roster(session: impl Into<String>, roster: &Roster) -> Result<Self> {
        Ok(Self::new(session, Registry::from_roster(roster)?))
    }

    /// Restore a saved session. The registry is re-validated; slots whose
    /// target no longer exists are kept and fail with not-found when replayed.
    /// Other layout versions are read as the current one, with a warning.
    pub fn from_state(state: LedgerState) -> Result<Self> {
        if state.version != STATE_VERSION {
            tracing::warn!(
                version = state.version,
                expected = STATE_VERSION,
                "unsupported state version; reading as current layout"
            );
        }
        let registry = Registry::from_parts(state.units, state.teams)?;
        for action in state.undo.iter().chain(state.redo.iter()) {
            if !registry.contains(action.target()) {
                tracing::warn!(action = %action, "saved slot refers to a missing target");
            }
        }
        Ok(Self {
            session: state.session,
            registry,
            log: ActionLog::from_slots(state.undo, state.redo),
            history: state.history,
        })
    }

    pub fn to_state(&self) -> LedgerState {
        let (units, teams) = self.registry.clone().into_parts();
        LedgerState {
            units,
            teams,
            undo: self.log.peek_undo().cloned(),
            redo: self.log.peek_redo().cloned(),
            history: self.history.clone(),
            ..LedgerState::new(self.session.clone())
        }
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Apply a new action. A target that already has the requested flag is
    /// left alone, but the undo slot is still filled.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        let inverse = self.write(&action)?;
        let changed = inverse != action;
        self.log.record_undo(inverse);
        self.log.clear_redo();
        self.journal(Operation::Apply, action, changed);
        Ok(())
    }

    pub fn undo(&mut self) -> Result<()> {
        let inverse = self.log.take_undo().ok_or(LedgerError::NothingToUndo)?;
        match self.write(&inverse) {
            Ok(undone) => {
                let changed = undone != inverse;
                self.log.record_redo(undone);
                self.journal(Operation::Undo, inverse, changed);
                Ok(())
            }
            Err(e) => {
                self.log.record_undo(inverse);
                Err(e)
            }
        }
    }

    pub fn redo(&mut self) -> Result<()> {
        let forward = self.log.take_redo().ok_or(LedgerError::NothingToRedo)?;
        match self.write(&forward) {
            Ok(inverse) => {
                let changed = inverse != forward;
                self.log.record_undo(inverse);
                self.journal(Operation::Redo, forward, changed);
                Ok(())
            }
            Err(e) => {
                self.log.record_redo(forward);
                Err(e)
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            units: self.registry.units().to_vec(),
            teams: self.registry.teams().to_vec(),
            can_undo: self.log.can_undo(),
            can_redo: self.log.can_redo(),
        }
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Write the action's flag to the registry and return its inverse.
    /// Nothing is touched when the target is missing.
    fn write(&mut self, action: &Action) -> Result<Action> {
        let target = action.target();
        let before = self.registry.availability(target)?;
        self.registry.set_availability(target, action.availability())?;
        let inverse = Action::set(target.clone(), before);
        debug_assert!(before == action.availability() || inverse == action.inverse());
        Ok(inverse)
    }

    fn journal(&mut self, op: Operation, action: Action, changed: bool) {
        tracing::debug!(%op, action = %action, changed, "ledger transition");
        self.history.push(HistoryEntry {
            op,
            action,
            changed,
            timestamp: Utc::now(),
        });
        if self.history.len() > HISTORY_LIMIT {
            self.history.drain(..self.history.len() - HISTORY_LIMIT);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
