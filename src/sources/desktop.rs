use crate::model::AppInfo;
use crate::sources::EntryReader;
use log::debug;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

// Key, optional [locale], value after the first '='.
static ENTRY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9-]+)(?:\[([^\]]*)\])?\s*=(.*)$").expect("desktop entry line pattern")
});

pub struct DesktopEntryReader {
    locale: String,
}

impl DesktopEntryReader {
    pub fn new(locale: impl Into<String>) -> Self {
        Self { locale: locale.into() }
    }
}

impl EntryReader for DesktopEntryReader {
    fn read(&self, path: &Path) -> AppInfo {
        // Invalid UTF-8 is replaced, not treated as an unreadable file.
        match fs::read(path) {
            Ok(bytes) => parse_desktop_entry(&String::from_utf8_lossy(&bytes), &self.locale),
            Err(err) => {
                debug!("Cannot read desktop file {:?}: {}", path, err);
                AppInfo::unreadable(path)
            }
        }
    }
}

/// Single pass over the file, last write wins per field. Only the
/// `[Desktop Entry]` group (and lines before any group) are read.
pub fn parse_desktop_entry(content: &str, locale: &str) -> AppInfo {
    let mut info = AppInfo::default();
    let mut localized_name = String::new();
    let mut fallback_name = String::new();
    let mut in_main_group = true;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }

        if line.starts_with('[') && line.ends_with(']') {
            in_main_group = line == "[Desktop Entry]";
            continue;
        }

        if !in_main_group { continue; }

        let Some(caps) = ENTRY_LINE.captures(line) else { continue };
        let key = &caps[1];
        let value = caps[3].trim();

        match (key, caps.get(2).map(|m| m.as_str())) {
            ("Icon", None) => info.icon_reference = value.to_string(),
            ("Name", None) => fallback_name = value.to_string(),
            ("Name", Some(lang)) if !locale.is_empty() && lang == locale => {
                localized_name = value.to_string();
            }
            ("NoDisplay", None) => info.no_display = value == "true",
            _ => {}
        }
    }

    info.display_name = if localized_name.is_empty() { fallback_name } else { localized_name };
    info
}
