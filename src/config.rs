use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use directories::ProjectDirs;
use anyhow::Result;
use std::fs;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    #[serde(default = "default_share_root")]
    pub share_root: PathBuf,
    /// Overrides the locale taken from the environment.
    #[serde(default)]
    pub locale: Option<String>,
}

fn default_share_root() -> PathBuf { PathBuf::from("/usr/share") }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            share_root: default_share_root(),
            locale: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct EvaluationConfig {
    #[serde(default)]
    pub hide_no_display: bool,
    #[serde(default = "default_fallback_icon")]
    pub fallback_icon: String,
}

fn default_fallback_icon() -> String { "application-x-executable".to_string() }

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            hide_no_display: false,
            fallback_icon: default_fallback_icon(),
        }
    }
}

impl Config {
    /// Locale used for `Name[<locale>]` lookup. Empty means no localized lookup.
    pub fn current_locale(&self) -> String {
        if let Some(locale) = &self.general.locale {
            return normalize_locale(locale);
        }
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|val| !val.is_empty())
            .map(|val| normalize_locale(&val))
            .unwrap_or_default()
    }
}

/// `zh_CN.UTF-8@latin` -> `zh_CN`; `C` and `POSIX` carry no language.
pub fn normalize_locale(raw: &str) -> String {
    let trimmed = raw.trim();
    let end = trimmed.find(['.', '@']).unwrap_or(trimmed.len());
    let locale = &trimmed[..end];
    match locale {
        "C" | "POSIX" => String::new(),
        other => other.to_string(),
    }
}

pub fn config_path() -> PathBuf {
    match ProjectDirs::from("org", "upgrade-eval", "upgrade-eval") {
        Some(dirs) => dirs.config_dir().join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}

pub fn load_config() -> Result<Config> {
    let config_path = config_path();
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)?;
    let config: Config = toml::from_str(&content)?;
    log::debug!("Loaded config from {:?}", config_path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.general.share_root, PathBuf::from("/usr/share"));
        assert!(config.general.locale.is_none());
        assert!(!config.evaluation.hide_no_display);
        assert_eq!(config.evaluation.fallback_icon, "application-x-executable");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            "[general]\nlocale = \"de_DE.UTF-8\"\n[evaluation]\nhide_no_display = true\n",
        )
        .unwrap();
        assert_eq!(config.general.share_root, PathBuf::from("/usr/share"));
        assert!(config.evaluation.hide_no_display);
        assert_eq!(config.current_locale(), "de_DE");
    }

    #[test]
    fn locale_strips_encoding_and_modifier() {
        assert_eq!(normalize_locale("zh_CN.UTF-8"), "zh_CN");
        assert_eq!(normalize_locale("sr_RS@latin"), "sr_RS");
        assert_eq!(normalize_locale("en_US"), "en_US");
        assert_eq!(normalize_locale("C"), "");
        assert_eq!(normalize_locale("POSIX"), "");
        assert_eq!(normalize_locale("C.UTF-8"), "");
    }
}
