use crate::config::Config;
use crate::model::{AppInfo, Verdict};
use crate::selection::SelectionSet;
use crate::sources::EntryReader;
use crate::sources::desktop::DesktopEntryReader;
use crate::sources::notifications::Notification;
use crate::store::ClassificationStore;
use log::{info, warn};

/// Everything the evaluation page needs: classified apps plus the user's picks.
pub struct EvaluationState<R: EntryReader = DesktopEntryReader> {
    pub store: ClassificationStore<R>,
    pub selection: SelectionSet,
    pub hide_no_display: bool,
}

impl EvaluationState<DesktopEntryReader> {
    pub fn from_config(config: &Config) -> Self {
        let locale = config.current_locale();
        info!("EvaluationState: share_root={:?}, locale='{}'", config.general.share_root, locale);
        Self::new(
            ClassificationStore::new(DesktopEntryReader::new(locale), config.general.share_root.clone()),
            config.evaluation.hide_no_display,
        )
    }
}

impl<R: EntryReader> EvaluationState<R> {
    pub fn new(store: ClassificationStore<R>, hide_no_display: bool) -> Self {
        Self {
            store,
            selection: SelectionSet::new(),
            hide_no_display,
        }
    }

    pub fn apply(&mut self, notification: Notification) {
        match notification {
            Notification::AppsAvailable { apps } => self.store.set_package_index(apps),
            Notification::MigrateStatus { package, status } => {
                self.store.classify(&package, status);
                // An incompatible verdict revokes an earlier pick.
                if Verdict::from_code(status) == Verdict::Incompatible
                    && self.store.index().contains_key(&package)
                    && self.selection.contains(&package)
                {
                    warn!("Dropping {} from migrate list: now incompatible", package);
                    self.selection.toggle(&package, false);
                }
            }
            Notification::Reset => self.store.reset(),
        }
    }

    pub fn apply_all(&mut self, notifications: impl IntoIterator<Item = Notification>) {
        for notification in notifications {
            self.apply(notification);
        }
        info!(
            "EvaluationState: indexed={}, compatible={}, incompatible={}",
            self.store.index().len(),
            self.store.compatible().len(),
            self.store.incompatible().len()
        );
    }

    /// Only compatible packages can be picked; deselecting always goes through.
    pub fn select(&mut self, package: &str, selected: bool) -> bool {
        if selected && !self.visible_compatible().any(|app| app.package_name == package) {
            warn!("Ignoring selection of {}: not a compatible application", package);
            return false;
        }
        self.selection.toggle(package, selected);
        true
    }

    pub fn select_all(&mut self, selected: bool) {
        let packages: Vec<String> = self
            .visible_compatible()
            .map(|app| app.package_name.clone())
            .collect();
        for package in packages {
            self.selection.toggle(&package, selected);
        }
    }

    pub fn visible_compatible(&self) -> impl Iterator<Item = &AppInfo> {
        visible(self.store.compatible(), self.hide_no_display)
    }

    pub fn visible_incompatible(&self) -> impl Iterator<Item = &AppInfo> {
        visible(self.store.incompatible(), self.hide_no_display)
    }

    pub fn migrate_list(&self) -> Vec<String> {
        self.selection.snapshot()
    }
}

fn visible(apps: &[AppInfo], hide_no_display: bool) -> impl Iterator<Item = &AppInfo> {
    apps.iter().filter(move |app| !(hide_no_display && app.no_display))
}
