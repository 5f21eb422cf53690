use std::path::{Path, PathBuf};
use log::debug;
use walkdir::WalkDir;

const ICON_EXTENSIONS: [&str; 3] = ["png", "svg", "xpm"];

const COMMON_SUBDIRS: [&str; 7] = [
    "hicolor/48x48/apps",
    "hicolor/scalable/apps",
    "hicolor/32x32/apps",
    "hicolor/64x64/apps",
    "hicolor/24x24/apps",
    "Adwaita/48x48/apps",
    "",
];

/// Maps an entry's `Icon=` value to a file on disk.
pub struct IconResolver {
    search_paths: Vec<PathBuf>,
    fallback: String,
}

impl IconResolver {
    pub fn new(search_paths: Vec<PathBuf>, fallback: impl Into<String>) -> Self {
        Self {
            search_paths,
            fallback: fallback.into(),
        }
    }

    pub fn resolve(&self, reference: &str) -> Option<PathBuf> {
        let path = Path::new(reference);
        if path.is_absolute() {
            if path.exists() {
                return Some(path.to_path_buf());
            }
        } else if !reference.is_empty() {
            if let Some(found) = self.find_themed(reference) {
                return Some(found);
            }
        }

        debug!("Icon {:?} not found, using {}", reference, self.fallback);
        self.find_themed(&self.fallback)
    }

    fn find_themed(&self, name: &str) -> Option<PathBuf> {
        for root in &self.search_paths {
            if !root.exists() { continue; }

            for sub in COMMON_SUBDIRS {
                let dir = root.join(sub);
                if !dir.exists() { continue; }

                for ext in ICON_EXTENSIONS {
                    let file_path = dir.join(format!("{}.{}", name, ext));
                    if file_path.is_file() {
                        return Some(file_path);
                    }
                }
            }

            // Themes outside the usual layout: walk everything under the root.
            let found = WalkDir::new(root)
                .follow_links(true)
                .max_depth(6)
                .into_iter()
                .filter_map(|e| e.ok())
                .find(|entry| {
                    let path = entry.path();
                    entry.file_type().is_file()
                        && path.file_stem().and_then(|s| s.to_str()) == Some(name)
                        && path
                            .extension()
                            .and_then(|e| e.to_str())
                            .is_some_and(|e| ICON_EXTENSIONS.contains(&e))
                });
            if let Some(entry) = found {
                return Some(entry.into_path());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn icon_root(tag: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!(
            "upgrade_eval_icons_{}_{}_{}",
            tag,
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"icon").unwrap();
    }

    #[test]
    fn absolute_reference_is_used_as_is() {
        let root = icon_root("abs");
        let icon = root.join("custom.png");
        touch(&icon);
        let resolver = IconResolver::new(vec![], "application-x-executable");
        assert_eq!(resolver.resolve(icon.to_str().unwrap()), Some(icon));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn theme_name_found_in_common_subdir() {
        let root = icon_root("themed");
        let icon = root.join("hicolor/48x48/apps/editor.svg");
        touch(&icon);
        let resolver = IconResolver::new(vec![root.clone()], "application-x-executable");
        assert_eq!(resolver.resolve("editor"), Some(icon));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn theme_name_found_in_unusual_layout() {
        let root = icon_root("walk");
        let icon = root.join("Papirus/128x128/apps/player.png");
        touch(&icon);
        let resolver = IconResolver::new(vec![root.clone()], "application-x-executable");
        assert_eq!(resolver.resolve("player"), Some(icon));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn missing_icon_uses_fallback() {
        let root = icon_root("fallback");
        let fallback = root.join("hicolor/scalable/apps/application-x-executable.svg");
        touch(&fallback);
        let resolver = IconResolver::new(vec![root.clone()], "application-x-executable");
        assert_eq!(resolver.resolve("nonexistent"), Some(fallback.clone()));
        assert_eq!(resolver.resolve(""), Some(fallback.clone()));
        assert_eq!(resolver.resolve("/no/such/icon.png"), Some(fallback));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn nothing_found_without_fallback_icon() {
        let resolver = IconResolver::new(vec![PathBuf::from("/nonexistent/icons")], "application-x-executable");
        assert_eq!(resolver.resolve("editor"), None);
    }
}
