//! Application Configuration
//!
//! Optional `config.toml` in the user config directory. Every field is
//! optional; command-line flags take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILE_NAME;
use crate::error::Result;
use crate::i18n::Locale;
use crate::utils::config_store::{app_config_dir, load_config, read_config};

/// Settings read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Label locale; the system locale is used when unset
    pub locale: Option<Locale>,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl AppConfig {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        app_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Load from an explicit path, which must exist, or from the default
    /// location, which may be absent
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return read_config(path);
        }

        match Self::default_path() {
            Some(path) => load_config(&path),
            None => {
                tracing::warn!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Effective locale: explicit override, then config, then the OS
    pub fn resolve_locale(&self, cli: Option<Locale>) -> Locale {
        cli.or(self.locale).unwrap_or_else(Locale::system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn parses_all_fields() {
        let config: AppConfig =
            toml::from_str("locale = \"zh-TW\"\npretty = true\n").expect("valid config");
        assert_eq!(config.locale, Some(Locale::ZhTw));
        assert!(config.pretty);
    }

    #[test]
    fn empty_file_is_default() {
        let config: AppConfig = toml::from_str("").expect("valid config");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<AppConfig>("theme = \"dark\"").is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "reinsurance-ui-{}-absent-config.toml",
            std::process::id()
        ));

        let result = AppConfig::load(Some(&path));
        assert!(matches!(result, Err(Error::ReadConfig { .. })));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let path = std::env::temp_dir().join(format!(
            "reinsurance-ui-{}-explicit-config.toml",
            std::process::id()
        ));
        std::fs::write(&path, "locale = \"zh-TW\"\n").expect("write temp config");

        let result = AppConfig::load(Some(&path));
        std::fs::remove_file(&path).ok();
        assert_eq!(result.expect("loaded").locale, Some(Locale::ZhTw));
    }

    #[test]
    fn cli_locale_wins() {
        let config = AppConfig {
            locale: Some(Locale::ZhTw),
            pretty: false,
        };
        assert_eq!(config.resolve_locale(Some(Locale::En)), Locale::En);
        assert_eq!(config.resolve_locale(None), Locale::ZhTw);
    }
}
