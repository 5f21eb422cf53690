use crate::model::AppInfo;
use std::path::Path;

/// Turns one entry file into display metadata. Never fails: unreadable
/// input degrades to a placeholder `AppInfo`.
pub trait EntryReader {
    fn read(&self, path: &Path) -> AppInfo;
}

pub mod desktop;
pub mod notifications;
