use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use warplan_core::{
    config::Config,
    io, paths,
    store::{FileStore, Store},
    Ledger,
};

pub fn run(root: &Path, session: Option<&str>, json: bool) -> anyhow::Result<()> {
    let session = session.map(str::to_string).unwrap_or_else(|| {
        root.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "guild-war".to_string())
    });

    io::ensure_warplan_dir(root)
        .with_context(|| format!("failed to create {}", paths::warplan_dir(root).display()))?;

    // 1. config.yaml: starter roster if missing
    let config_created = !paths::config_path(root).exists();
    let config = if config_created {
        let cfg = Config::sample(&session);
        cfg.save(root).context("failed to write config.yaml")?;
        cfg
    } else {
        Config::load(root).context("failed to load config.yaml")?
    };

    // 2. state.yaml: seeded from the roster if missing
    let store = FileStore::new(root);
    let state_created = store.load().context("failed to load state")?.is_none();
    if state_created {
        let ledger = Ledger::from_roster(&config.session, &config.roster)
            .context("roster in config.yaml is invalid")?;
        super::save(&store, &ledger)?;
    }

    tracing::debug!(root = %root.display(), session = %config.session, "initialized");

    if json {
        return print_json(&serde_json::json!({
            "root": root.display().to_string(),
            "session": config.session,
            "config_created": config_created,
            "state_created": state_created,
        }));
    }

    println!("Initializing warplan in: {}", root.display());
    let status = |created: bool| if created { "created:" } else { "exists: " };
    println!("  {} {}", status(config_created), paths::CONFIG_FILE);
    println!("  {} {}", status(state_created), paths::STATE_FILE);
    println!("\nSession '{}' ready. Run: warplan show", config.session);
    Ok(())
}
