use crate::error::{EvalError, Result};
use log::info;
use std::fs;
use std::path::Path;

/// Writes the packages to reinstall after the upgrade as a JSON array.
pub fn write_migrate_list(path: &Path, packages: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| EvalError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let content = serde_json::to_string_pretty(packages)?;
    fs::write(path, content).map_err(|source| EvalError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} packages to migrate list {:?}", packages.len(), path);
    Ok(())
}
