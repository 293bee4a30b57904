use crate::error::Result;
use crate::paths;
use std::io::Write;
use std::path::{Path, PathBuf};

const TMP_PREFIX: &str = ".warplan-";
const TMP_SUFFIX: &str = ".tmp";

/// Replace `path` with `data` in one rename.
///
/// The bytes go to a hidden `.warplan-*.tmp` sibling first and are synced
/// before the rename, so readers see either the old file or the new one.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::Builder::new()
        .prefix(TMP_PREFIX)
        .suffix(TMP_SUFFIX)
        .tempfile_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create `<root>/.warplan/` if needed and return it.
pub fn ensure_warplan_dir(root: &Path) -> Result<PathBuf> {
    let dir = paths::warplan_dir(root);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
