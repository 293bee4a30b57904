use crate::error::{LedgerError, Result};
use crate::types::{Target, TargetKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

impl Unit {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            available: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// A fixed grouping of units. Its flag is independent of its members' flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

impl Team {
    pub fn new<I, S>(id: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: None,
            members: members.into_iter().map(Into::into).collect(),
            available: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

fn default_available() -> bool {
    true
}

/// The units and teams a session is seeded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Authoritative, declaration-ordered set of units and teams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    units: Vec<Unit>,
    teams: Vec<Team>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a roster, checking id uniqueness and team membership.
    pub fn from_roster(roster: &Roster) -> Result<Self> {
        Self::from_parts(roster.units.clone(), roster.teams.clone())
    }

    pub fn from_parts(units: Vec<Unit>, teams: Vec<Team>) -> Result<Self> {
        let mut registry = Registry::new();
        for unit in units {
            registry.add_unit(unit)?;
        }
        for team in teams {
            registry.add_team(team)?;
        }
        Ok(registry)
    }

    pub fn add_unit(&mut self, unit: Unit) -> Result<()> {
        if unit.id.trim().is_empty() {
            return Err(LedgerError::InvalidId(unit.id));
        }
        if self.units.iter().any(|u| u.id == unit.id) {
            return Err(LedgerError::DuplicateId {
                kind: TargetKind::Unit,
                id: unit.id,
            });
        }
        self.units.push(unit);
        Ok(())
    }

    /// Every member must already be registered as a unit.
    pub fn add_team(&mut self, team: Team) -> Result<()> {
        if team.id.trim().is_empty() {
            return Err(LedgerError::InvalidId(team.id));
        }
        if self.teams.iter().any(|t| t.id == team.id) {
            return Err(LedgerError::DuplicateId {
                kind: TargetKind::Team,
                id: team.id,
            });
        }
        if let Some(missing) = team.members.iter().find(|m| self.find_unit(m).is_none()) {
            return Err(LedgerError::UnitNotFound(missing.clone()));
        }
        self.teams.push(team);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    pub fn get_unit(&self, id: &str) -> Result<&Unit> {
        self.find_unit(id)
            .ok_or_else(|| LedgerError::UnitNotFound(id.to_string()))
    }

    pub fn get_team(&self, id: &str) -> Result<&Team> {
        self.teams
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| LedgerError::TeamNotFound(id.to_string()))
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn contains(&self, target: &Target) -> bool {
        match target {
            Target::Unit(id) => self.find_unit(id).is_some(),
            Target::Team(id) => self.teams.iter().any(|t| t.id == *id),
        }
    }

    pub fn availability(&self, target: &Target) -> Result<bool> {
        match target {
            Target::Unit(id) => self.get_unit(id).map(|u| u.available),
            Target::Team(id) => self.get_team(id).map(|t| t.available),
        }
    }

    /// Members of a team, in team order.
    pub fn team_members(&self, id: &str) -> Result<Vec<&Unit>> {
        let team = self.get_team(id)?;
        team.members.iter().map(|m| self.get_unit(m)).collect()
    }

    pub fn available_units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| u.available)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    pub fn set_unit_availability(&mut self, id: &str, available: bool) -> Result<()> {
        let unit = self
            .units
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| LedgerError::UnitNotFound(id.to_string()))?;
        unit.available = available;
        Ok(())
    }

    pub fn set_team_availability(&mut self, id: &str, available: bool) -> Result<()> {
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| LedgerError::TeamNotFound(id.to_string()))?;
        team.available = available;
        Ok(())
    }

    pub fn set_availability(&mut self, target: &Target, available: bool) -> Result<()> {
        match target {
            Target::Unit(id) => self.set_unit_availability(id, available),
            Target::Team(id) => self.set_team_availability(id, available),
        }
    }

    pub(crate) fn into_parts(self) -> (Vec<Unit>, Vec<Team>) {
        (self.units, self.teams)
    }

    fn find_unit(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
