use crate::error::{EvalError, Result};
use crate::store::PackageIndex;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Events delivered by the migration worker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    AppsAvailable { apps: PackageIndex },
    MigrateStatus { package: String, status: i32 },
    Reset,
}

pub fn parse_notifications<R: Read>(reader: R) -> Result<Vec<Notification>> {
    let mut events = Vec::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|source| EvalError::Io {
            path: "<notifications>".into(),
            source,
        })?;
        let line = line.trim();
        if line.is_empty() { continue; }

        let event = serde_json::from_str(line)
            .map_err(|source| EvalError::Notification { line: idx + 1, source })?;
        events.push(event);
    }
    debug!("Parsed {} notifications", events.len());
    Ok(events)
}

/// Reads notifications from a file, or from stdin when `path` is `-`.
pub fn load_notifications(path: &Path) -> Result<Vec<Notification>> {
    if path == Path::new("-") {
        return parse_notifications(io::stdin().lock());
    }
    let file = fs::File::open(path).map_err(|source| EvalError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_notifications(file)
}

pub fn load_package_index(path: &Path) -> Result<PackageIndex> {
    let content = fs::read_to_string(path).map_err(|source| EvalError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let index: PackageIndex = serde_json::from_str(&content).map_err(|source| EvalError::Index {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded package index with {} packages from {:?}", index.len(), path);
    Ok(index)
}
