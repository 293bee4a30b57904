use crate::output::{print_json, print_table, yes_no};
use anyhow::Context;
use std::path::Path;
use warplan_core::{state::HistoryEntry, Ledger};

pub fn undo(root: &Path, json: bool) -> anyhow::Result<()> {
    let (store, mut ledger) = super::open(root)?;
    ledger.undo().context("undo failed")?;
    super::save(&store, &ledger)?;
    report(&ledger, "Undid", json)
}

pub fn redo(root: &Path, json: bool) -> anyhow::Result<()> {
    let (store, mut ledger) = super::open(root)?;
    ledger.redo().context("redo failed")?;
    super::save(&store, &ledger)?;
    report(&ledger, "Redid", json)
}

fn report(ledger: &Ledger, verb: &str, json: bool) -> anyhow::Result<()> {
    let entry = ledger
        .history()
        .last()
        .context("history is empty after a successful transition")?;

    if json {
        return print_json(&serde_json::json!({
            "entry": entry,
            "can_undo": ledger.can_undo(),
            "can_redo": ledger.can_redo(),
        }));
    }

    let state = if entry.action.availability() {
        "available"
    } else {
        "unavailable"
    };
    println!("{verb}: {} is {state}", entry.action.target());
    Ok(())
}

pub fn list(root: &Path, limit: usize, json: bool) -> anyhow::Result<()> {
    let (_, ledger) = super::open(root)?;
    let entries: Vec<&HistoryEntry> = ledger.history().iter().rev().take(limit).collect();

    if json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        println!("No changes yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                e.op.to_string(),
                e.action.to_string(),
                yes_no(e.changed).to_string(),
            ]
        })
        .collect();
    print_table(&["TIME", "OP", "ACTION", "CHANGED"], &rows);
    Ok(())
}
