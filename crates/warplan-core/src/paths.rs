use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const WARPLAN_DIR: &str = ".warplan";
pub const CONFIG_FILE: &str = ".warplan/config.yaml";
pub const STATE_FILE: &str = ".warplan/state.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn warplan_dir(root: &Path) -> PathBuf {
    root.join(WARPLAN_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn state_path(root: &Path) -> PathBuf {
    root.join(STATE_FILE)
}
