use crate::output::{print_json, print_table, yes_no};
use std::path::Path;
use warplan_core::registry::Unit;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let (_, ledger) = super::open(root)?;
    let registry = ledger.registry();
    let snapshot = ledger.snapshot();

    if json {
        return print_json(&serde_json::json!({
            "session": ledger.session(),
            "snapshot": snapshot,
        }));
    }

    println!("Session: {}", ledger.session());

    println!(
        "\nUnits ({}/{} available):",
        registry.available_units().count(),
        snapshot.units.len()
    );
    if snapshot.units.is_empty() {
        println!("  (none)");
    } else {
        let rows: Vec<Vec<String>> = snapshot
            .units
            .iter()
            .map(|u| {
                vec![
                    u.id.clone(),
                    u.display_name().to_string(),
                    yes_no(u.available).to_string(),
                ]
            })
            .collect();
        print_table(&["ID", "NAME", "AVAILABLE"], &rows);
    }

    println!("\nTeams:");
    if snapshot.teams.is_empty() {
        println!("  (none)");
    } else {
        let mut rows = Vec::with_capacity(snapshot.teams.len());
        for t in &snapshot.teams {
            let (available, total) = snapshot.member_counts(t);
            let members = registry
                .team_members(&t.id)?
                .into_iter()
                .map(Unit::display_name)
                .collect::<Vec<_>>()
                .join(", ");
            rows.push(vec![
                t.id.clone(),
                t.display_name().to_string(),
                yes_no(t.available).to_string(),
                format!("{available}/{total}"),
                members,
            ]);
        }
        print_table(&["ID", "NAME", "AVAILABLE", "READY", "MEMBERS"], &rows);
    }

    println!(
        "\nUndo: {}  Redo: {}",
        yes_no(snapshot.can_undo),
        yes_no(snapshot.can_redo)
    );
    Ok(())
}
