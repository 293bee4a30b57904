use crate::error::{LedgerError, Result};
use crate::paths;
use crate::registry::{Roster, Team, Unit};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

impl ConfigWarning {
    fn warning(message: String) -> Self {
        Self {
            level: WarnLevel::Warning,
            message,
        }
    }

    fn error(message: String) -> Self {
        Self {
            level: WarnLevel::Error,
            message,
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    pub session: String,
    #[serde(default)]
    pub roster: Roster,
}

fn default_version() -> u32 {
    1
}

impl Config {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            version: 1,
            session: session.into(),
            roster: Roster::default(),
        }
    }

    /// Starter roster written by `warplan init`.
    pub fn sample(session: impl Into<String>) -> Self {
        let units = [
            ("calgar", "Marneus Calgar"),
            ("tigurius", "Varro Tigurius"),
            ("darkstrider", "Darkstrider"),
            ("shadowsun", "Shadowsun"),
            ("ragnar", "Ragnar"),
            ("abaddon", "Abaddon"),
        ]
        .into_iter()
        .map(|(id, name)| Unit::new(id).with_name(name))
        .collect();
        let teams = vec![
            Team::new("ultramarines", ["calgar", "tigurius"]).with_name("Ultramarines"),
            Team::new("tau", ["darkstrider", "shadowsun"]).with_name("T'au Empire"),
        ];
        Self {
            roster: Roster { units, teams },
            ..Self::new(session)
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(LedgerError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = self.to_yaml()?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let roster = &self.roster;

        if roster.units.is_empty() && roster.teams.is_empty() {
            warnings.push(ConfigWarning::warning("roster is empty".to_string()));
        }

        // 1. Unit ids: non-empty and unique
        let mut unit_ids = HashSet::new();
        for unit in &roster.units {
            if unit.id.trim().is_empty() {
                warnings.push(ConfigWarning::error("unit with empty id".to_string()));
            } else if !unit_ids.insert(unit.id.as_str()) {
                warnings.push(ConfigWarning::error(format!(
                    "duplicate unit id '{}'",
                    unit.id
                )));
            }
        }

        // 2. Teams: ids, membership
        let mut team_ids = HashSet::new();
        for team in &roster.teams {
            if team.id.trim().is_empty() {
                warnings.push(ConfigWarning::error("team with empty id".to_string()));
            } else if !team_ids.insert(team.id.as_str()) {
                warnings.push(ConfigWarning::error(format!(
                    "duplicate team id '{}'",
                    team.id
                )));
            }

            if team.members.is_empty() {
                warnings.push(ConfigWarning::warning(format!(
                    "team '{}' has no members",
                    team.id
                )));
            }

            let mut seen = HashSet::new();
            for member in &team.members {
                if !unit_ids.contains(member.as_str()) {
                    warnings.push(ConfigWarning::error(format!(
                        "team '{}' references unknown unit '{}'",
                        team.id, member
                    )));
                }
                if !seen.insert(member.as_str()) {
                    warnings.push(ConfigWarning::warning(format!(
                        "team '{}' lists unit '{}' more than once",
                        team.id, member
                    )));
                }
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
