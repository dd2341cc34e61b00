//! i18n - Internationalization Module
//!
//! Labels live in the YAML catalogs under `locales/` and are resolved with
//! rust-i18n. Keys missing from a catalog fall back to English.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English
    #[default]
    #[serde(rename = "en")]
    En,
    /// Chinese (Traditional, Taiwan)
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Locale {
    /// All supported locales
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::ZhTw]
    }

    /// BCP 47 tag, also the catalog name
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhTw => "zh-TW",
        }
    }

    /// Name of the locale in its own language
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::ZhTw => "繁體中文",
        }
    }

    /// Lenient mapping from any language tag: Chinese variants map to `ZhTw`,
    /// everything else to English.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        if language == "zh" {
            Locale::ZhTw
        } else {
            Locale::En
        }
    }

    /// Locale of the current user, as reported by the OS
    pub fn system() -> Self {
        let detected = locale_config::Locale::user_default().to_string();
        // Formatted as a comma-separated list, possibly with category prefixes
        let first = detected
            .split(',')
            .next()
            .unwrap_or_default()
            .rsplit('=')
            .next()
            .unwrap_or_default();

        let locale = Self::from_tag(first);
        tracing::debug!(detected = %detected, locale = locale.tag(), "Detected system locale");
        locale
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Strict parsing, accepting only the supported tags (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::all()
            .iter()
            .copied()
            .find(|locale| locale.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Invalid {
                message: format!("unsupported locale '{s}', expected one of: en, zh-TW"),
            })
    }
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> String {
    rust_i18n::t!(key, locale = locale.tag()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_labels() {
        assert_eq!(t(Locale::En, "page_header.save"), "Save");
        assert_eq!(t(Locale::ZhTw, "page_header.save"), "儲存");
        assert_eq!(t(Locale::En, "page_header.home"), "Home");
        assert_eq!(t(Locale::ZhTw, "shell.brand"), "EIS 再保系統");
    }

    #[test]
    fn test_from_tag_is_lenient() {
        assert_eq!(Locale::from_tag("zh-TW"), Locale::ZhTw);
        assert_eq!(Locale::from_tag("zh_CN"), Locale::ZhTw);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("zh-tw".parse::<Locale>().ok(), Some(Locale::ZhTw));
        assert_eq!(" en ".parse::<Locale>().ok(), Some(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_display_names_are_native() {
        let names: Vec<_> = Locale::all().iter().map(Locale::display_name).collect();
        assert_eq!(names, vec!["English", "繁體中文"]);
    }

    #[test]
    fn test_serde_uses_tags() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }

        let parsed: Wrapper = toml::from_str(r#"locale = "zh-TW""#).expect("valid toml");
        assert_eq!(parsed.locale, Locale::ZhTw);
    }
}
