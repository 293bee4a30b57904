use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use warplan_core::types::{Action, Target, TargetKind};

#[derive(Subcommand)]
pub enum FlagSubcommand {
    /// Mark as available
    Available { id: String },
    /// Mark as unavailable
    Unavailable { id: String },
}

pub fn run(
    root: &Path,
    kind: TargetKind,
    subcmd: FlagSubcommand,
    json: bool,
) -> anyhow::Result<()> {
    let (id, available) = match subcmd {
        FlagSubcommand::Available { id } => (id, true),
        FlagSubcommand::Unavailable { id } => (id, false),
    };
    let target = match kind {
        TargetKind::Unit => Target::Unit(id),
        TargetKind::Team => Target::Team(id),
    };
    apply(root, Action::set(target, available), json)
}

fn apply(root: &Path, action: Action, json: bool) -> anyhow::Result<()> {
    let (store, mut ledger) = super::open(root)?;

    ledger
        .apply(action.clone())
        .with_context(|| format!("cannot {action}"))?;
    super::save(&store, &ledger)?;

    let changed = ledger.history().last().is_some_and(|h| h.changed);
    if json {
        print_json(&serde_json::json!({
            "action": action,
            "changed": changed,
            "can_undo": ledger.can_undo(),
            "can_redo": ledger.can_redo(),
        }))?;
    } else {
        let state = if action.availability() {
            "available"
        } else {
            "unavailable"
        };
        let note = if changed { "" } else { " (no change)" };
        println!("Marked {} {state}{note}", action.target());
    }
    Ok(())
}
