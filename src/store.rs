//! Compatible/incompatible classification of desktop applications.

use crate::model::{AppInfo, Verdict};
use crate::sources::EntryReader;
use crate::sources::desktop::DesktopEntryReader;
use log::{debug, info};
use std::collections::HashMap;
use std::path::PathBuf;

/// Package name -> desktop file names, in the order the worker reported them.
pub type PackageIndex = HashMap<String, Vec<String>>;

pub struct ClassificationStore<R: EntryReader = DesktopEntryReader> {
    reader: R,
    share_root: PathBuf,
    index: PackageIndex,
    compatible: Vec<AppInfo>,
    incompatible: Vec<AppInfo>,
    icon_search_paths: Vec<PathBuf>,
}

impl<R: EntryReader> ClassificationStore<R> {
    pub fn new(reader: R, share_root: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            share_root: share_root.into(),
            index: PackageIndex::new(),
            compatible: Vec::new(),
            incompatible: Vec::new(),
            icon_search_paths: Vec::new(),
        }
    }

    /// Replaces the whole index. Already classified entries are left alone.
    pub fn set_package_index(&mut self, index: PackageIndex) {
        info!("Package index updated: {} packages", index.len());
        self.index = index;
    }

    /// Appends one `AppInfo` per desktop file of `package`. Unknown packages
    /// are ignored; repeated verdicts append duplicates.
    pub fn classify(&mut self, package: &str, status: i32) {
        self.icon_search_paths = vec![self.share_root.join("icons")];

        let Some(desktop_files) = self.index.get(package) else {
            debug!("No desktop entries indexed for {}", package);
            return;
        };

        let verdict = Verdict::from_code(status);
        let apps_dir = self.share_root.join("applications");
        for file_name in desktop_files {
            let mut info = self.reader.read(&apps_dir.join(file_name));
            info.package_name = package.to_string();
            debug!("Adding desktop entry {} for {} ({:?})", file_name, package, verdict);
            match verdict {
                Verdict::Compatible => self.compatible.push(info),
                Verdict::Incompatible => self.incompatible.push(info),
            }
        }
    }

    pub fn reset(&mut self) {
        self.compatible.clear();
        self.incompatible.clear();
    }

    pub fn compatible(&self) -> &[AppInfo] {
        &self.compatible
    }

    pub fn incompatible(&self) -> &[AppInfo] {
        &self.incompatible
    }

    pub fn index(&self) -> &PackageIndex {
        &self.index
    }

    /// Empty until the first `classify` call.
    pub fn icon_search_paths(&self) -> &[PathBuf] {
        &self.icon_search_paths
    }
}
