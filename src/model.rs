use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Compatible,
    Incompatible,
}

impl Verdict {
    /// Status codes come straight from the evaluator: `1` is compatible,
    /// every other value lands in the incompatible column.
    pub fn from_code(status: i32) -> Self {
        if status == 1 {
            Verdict::Compatible
        } else {
            Verdict::Incompatible
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppInfo {
    pub package_name: String,   // Owning package, stamped at classification time
    pub display_name: String,   // Localized name, plain Name, or the raw path
    pub icon_reference: String, // Absolute file path or theme icon name
    pub no_display: bool,
}

impl AppInfo {
    /// Placeholder for an entry whose file could not be read.
    pub fn unreadable(path: &Path) -> Self {
        Self {
            display_name: path.to_string_lossy().to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_status_one_is_compatible() {
        assert_eq!(Verdict::from_code(1), Verdict::Compatible);
        assert_eq!(Verdict::from_code(0), Verdict::Incompatible);
        assert_eq!(Verdict::from_code(2), Verdict::Incompatible);
        assert_eq!(Verdict::from_code(-1), Verdict::Incompatible);
    }

    #[test]
    fn unreadable_entry_uses_path_as_name() {
        let info = AppInfo::unreadable(Path::new("/nope/missing.desktop"));
        assert_eq!(info.display_name, "/nope/missing.desktop");
        assert!(info.icon_reference.is_empty());
        assert!(!info.no_display);
    }
}
