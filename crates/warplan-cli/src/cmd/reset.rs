use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use warplan_core::{config::Config, store::FileStore, Ledger};

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let ledger = Ledger::from_roster(&config.session, &config.roster)
        .context("roster in config.yaml is invalid")?;
    let store = FileStore::new(root);
    super::save(&store, &ledger)?;

    tracing::info!(session = %config.session, "session reset from config");

    if json {
        print_json(&serde_json::json!({
            "session": config.session,
            "units": ledger.registry().units().len(),
            "teams": ledger.registry().teams().len(),
        }))?;
    } else {
        println!(
            "Reset session '{}': {} units, {} teams",
            config.session,
            ledger.registry().units().len(),
            ledger.registry().teams().len()
        );
    }
    Ok(())
}
