pub mod config;
pub mod error;
pub mod io;
pub mod ledger;
pub mod log;
pub mod paths;
pub mod registry;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod types;

pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use types::{Action, Target};
