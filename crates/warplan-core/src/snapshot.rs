use crate::registry::{Team, Unit};
use serde::Serialize;

/// Read-only view of a ledger, rebuilt after every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub units: Vec<Unit>,
    pub teams: Vec<Team>,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl Snapshot {
    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// `(available, total)` over a team's members.
    pub fn member_counts(&self, team: &Team) -> (usize, usize) {
        let available = team
            .members
            .iter()
            .filter(|m| self.unit(m).is_some_and(|u| u.available))
            .count();
        (available, team.members.len())
    }
}
