use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TargetKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Unit,
    Team,
}

impl TargetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::Unit => "unit",
            TargetKind::Team => "team",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

/// The single entity an action flips: a unit or a team, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Target {
    Unit(String),
    Team(String),
}

impl Target {
    pub fn unit(id: impl Into<String>) -> Self {
        Target::Unit(id.into())
    }

    pub fn team(id: impl Into<String>) -> Self {
        Target::Team(id.into())
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            Target::Unit(_) => TargetKind::Unit,
            Target::Team(_) => TargetKind::Team,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Target::Unit(id) | Target::Team(id) => id,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum Action {
    MakeAvailable(Target),
    MakeUnavailable(Target),
}

impl Action {
    /// The action that leaves `target` with the given flag.
    pub fn set(target: Target, available: bool) -> Action {
        if available {
            Action::MakeAvailable(target)
        } else {
            Action::MakeUnavailable(target)
        }
    }

    pub fn target(&self) -> &Target {
        match self {
            Action::MakeAvailable(t) | Action::MakeUnavailable(t) => t,
        }
    }

    /// Availability flag the target ends up with once this action is applied.
    pub fn availability(&self) -> bool {
        matches!(self, Action::MakeAvailable(_))
    }

    /// Same target, opposite flag.
    pub fn inverse(&self) -> Action {
        match self {
            Action::MakeAvailable(t) => Action::MakeUnavailable(t.clone()),
            Action::MakeUnavailable(t) => Action::MakeAvailable(t.clone()),
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Action::MakeAvailable(_) => "make_available",
            Action::MakeUnavailable(_) => "make_unavailable",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb(), self.target())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
