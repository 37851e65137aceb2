//! Writing generated source to disk.

use std::path::Path;

use eyre::Result;

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_source(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
