//! Tailwind Export
//!
//! Renders the token table as the styling toolchain's configuration object.

use hashlink::LinkedHashMap;
use serde::Serialize;

use super::tokens::{StyleTokens, TokenGroup};
use crate::error::Result;

/// Toolchain configuration (`tailwind.config`) derived from the token table
#[derive(Debug, Serialize)]
pub struct TailwindConfig {
    pub content: Vec<&'static str>,
    pub theme: Theme,
    pub plugins: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct Theme {
    pub extend: ThemeExtend,
}

/// Theme extensions, keyed by token name in declaration order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtend {
    pub colors: LinkedHashMap<&'static str, &'static str>,
    pub box_shadow: LinkedHashMap<&'static str, &'static str>,
    pub spacing: LinkedHashMap<&'static str, &'static str>,
}

impl TailwindConfig {
    pub fn from_tokens(tokens: &StyleTokens) -> Self {
        let section = |group| {
            tokens
                .group(group)
                .map(|token| (token.name, token.indirection))
                .collect::<LinkedHashMap<_, _>>()
        };

        Self {
            content: tokens.content_globs().to_vec(),
            theme: Theme {
                extend: ThemeExtend {
                    colors: section(TokenGroup::Color),
                    box_shadow: section(TokenGroup::Shadow),
                    spacing: section(TokenGroup::Spacing),
                },
            },
            plugins: Vec::new(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
