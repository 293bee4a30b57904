use crate::types::Action;

/// Single-capacity undo and redo slots. Recording into a full slot
/// overwrites it; nothing here validates actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    undo: Option<Action>,
    redo: Option<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_slots(undo: Option<Action>, redo: Option<Action>) -> Self {
        Self { undo, redo }
    }

    pub fn record_undo(&mut self, action: Action) {
        self.undo = Some(action);
    }

    pub fn record_redo(&mut self, action: Action) {
        self.redo = Some(action);
    }

    pub fn take_undo(&mut self) -> Option<Action> {
        self.undo.take()
    }

    pub fn take_redo(&mut self) -> Option<Action> {
        self.redo.take()
    }

    pub fn clear_redo(&mut self) {
        self.redo = None;
    }

    pub fn peek_undo(&self) -> Option<&Action> {
        self.undo.as_ref()
    }

    pub fn peek_redo(&self) -> Option<&Action> {
        self.redo.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.undo.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.redo.is_some()
    }
}
