mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, target::FlagSubcommand};
use std::path::PathBuf;
use warplan_core::types::TargetKind;

#[derive(Parser)]
#[command(
    name = "warplan",
    about = "Guild war availability planner: mark units and teams, undo and redo",
    version,
    propagate_version = true
)]
struct Cli {
    /// Session root (default: auto-detect from .warplan/)
    #[arg(long, global = true, env = "WARPLAN_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a planning session in the current directory
    Init {
        /// Session name (default: directory name)
        #[arg(long)]
        session: Option<String>,
    },

    /// Show units, teams, and undo/redo availability
    Show,

    /// Mark a unit available or unavailable
    Unit {
        #[command(subcommand)]
        subcommand: FlagSubcommand,
    },

    /// Mark a team available or unavailable
    Team {
        #[command(subcommand)]
        subcommand: FlagSubcommand,
    },

    /// Revert the last change
    Undo,

    /// Reinstate the last undone change
    Redo,

    /// Show recent changes
    History {
        /// Maximum number of entries, newest first
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Re-seed the session from config.yaml, discarding undo/redo and history
    Reset,

    /// Inspect and validate the roster configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init { session } => cmd::init::run(&root, session.as_deref(), cli.json),
        Commands::Show => cmd::show::run(&root, cli.json),
        Commands::Unit { subcommand } => {
            cmd::target::run(&root, TargetKind::Unit, subcommand, cli.json)
        }
        Commands::Team { subcommand } => {
            cmd::target::run(&root, TargetKind::Team, subcommand, cli.json)
        }
        Commands::Undo => cmd::history::undo(&root, cli.json),
        Commands::Redo => cmd::history::redo(&root, cli.json),
        Commands::History { limit } => cmd::history::list(&root, limit, cli.json),
        Commands::Reset => cmd::reset::run(&root, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
