//! Style Tokens
//!
//! Semantic design names bound to CSS variable indirections. The table is
//! `const` and checked at compile time; the styling toolchain resolves the
//! variables.

use std::sync::OnceLock;

use ahash::{AHashMap, AHashSet};

use crate::error::{Error, Result};

/// Token group, matching the toolchain's theme sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenGroup {
    Color,
    Shadow,
    Spacing,
}

impl TokenGroup {
    pub fn all() -> &'static [TokenGroup] {
        &[TokenGroup::Color, TokenGroup::Shadow, TokenGroup::Spacing]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TokenGroup::Color => "color",
            TokenGroup::Shadow => "shadow",
            TokenGroup::Spacing => "spacing",
        }
    }
}

/// A single design token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub name: &'static str,
    pub group: TokenGroup,
    pub indirection: &'static str,
}

impl Token {
    pub const fn color(name: &'static str, indirection: &'static str) -> Self {
        Self {
            name,
            group: TokenGroup::Color,
            indirection,
        }
    }

    pub const fn shadow(name: &'static str, indirection: &'static str) -> Self {
        Self {
            name,
            group: TokenGroup::Shadow,
            indirection,
        }
    }

    pub const fn spacing(name: &'static str, indirection: &'static str) -> Self {
        Self {
            name,
            group: TokenGroup::Spacing,
            indirection,
        }
    }

    /// CSS custom property behind a `var(...)` indirection, e.g. `--color-page`
    pub fn variable(&self) -> Option<&'static str> {
        self.indirection
            .strip_prefix("var(")?
            .strip_suffix(')')
            .map(str::trim)
    }
}

/// Built-in token table, in declaration order
pub const BUILTIN_TOKENS: &[Token] = &[
    Token::color("page", "var(--color-page)"),
    Token::color("surface", "var(--color-surface)"),
    Token::color("surfaceMuted", "var(--color-surface-muted)"),
    Token::color("border", "var(--color-border)"),
    Token::color("borderSoft", "var(--color-border-soft)"),
    Token::color("textPrimary", "var(--color-text-primary)"),
    Token::color("textSecondary", "var(--color-text-secondary)"),
    Token::color("textTertiary", "var(--color-text-tertiary)"),
    Token::color("textDisabled", "var(--color-text-disabled)"),
    Token::color("brand", "var(--color-brand)"),
    Token::color("brandHover", "var(--color-brand-hover)"),
    Token::color("danger", "var(--color-danger)"),
    Token::color("onBrand", "var(--color-on-brand)"),
    Token::shadow("card", "var(--shadow-card)"),
    Token::shadow("overlay", "var(--shadow-overlay)"),
    Token::spacing("field", "var(--field-width)"),
];

/// Source locations scanned by the styling toolchain
pub const CONTENT_GLOBS: &[&str] = &[
    "./src/components/**/*.rs",
    "./src/features/**/*.rs",
    "./node_modules/@shadcn/ui/dist/**/*.js",
];

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// True when the string is empty or only ASCII whitespace
const fn is_blank(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_whitespace() {
            return false;
        }
        i += 1;
    }
    true
}

const fn table_is_valid(tokens: &[Token]) -> bool {
    let mut i = 0;
    while i < tokens.len() {
        if is_blank(tokens[i].name) || is_blank(tokens[i].indirection) {
            return false;
        }
        let mut j = i + 1;
        while j < tokens.len() {
            if str_eq(tokens[i].name, tokens[j].name) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    table_is_valid(BUILTIN_TOKENS),
    "style token table has a duplicate name or an empty entry"
);

/// Check a token table: names are non-blank and unique, indirections non-blank.
/// Same rule as the compile-time check on [`BUILTIN_TOKENS`].
pub fn validate(tokens: &[Token]) -> Result<()> {
    let mut seen = AHashSet::with_capacity(tokens.len());
    for token in tokens {
        if is_blank(token.name) {
            return Err(Error::Invalid {
                message: "style token with an empty name".to_string(),
            });
        }
        if is_blank(token.indirection) {
            return Err(Error::EmptyIndirection {
                name: token.name.to_string(),
            });
        }
        if !seen.insert(token.name) {
            return Err(Error::DuplicateToken {
                name: token.name.to_string(),
            });
        }
    }
    Ok(())
}

/// Immutable, indexed token table
#[derive(Debug)]
pub struct StyleTokens {
    tokens: &'static [Token],
    content_globs: &'static [&'static str],
    by_name: AHashMap<&'static str, usize>,
}

static GLOBAL: OnceLock<StyleTokens> = OnceLock::new();

impl StyleTokens {
    /// The built-in table, indexed once per process
    pub fn global() -> &'static StyleTokens {
        GLOBAL.get_or_init(|| Self::index(BUILTIN_TOKENS, CONTENT_GLOBS))
    }

    /// Build a table from arbitrary entries, rejecting invalid ones
    pub fn try_new(
        tokens: &'static [Token],
        content_globs: &'static [&'static str],
    ) -> Result<Self> {
        validate(tokens)?;
        Ok(Self::index(tokens, content_globs))
    }

    fn index(tokens: &'static [Token], content_globs: &'static [&'static str]) -> Self {
        let by_name = tokens
            .iter()
            .enumerate()
            .map(|(position, token)| (token.name, position))
            .collect();

        Self {
            tokens,
            content_globs,
            by_name,
        }
    }

    // ==================== Lookup ====================

    pub fn get(&self, name: &str) -> Option<&Token> {
        self.by_name.get(name).map(|&position| &self.tokens[position])
    }

    /// Lookup restricted to one group
    pub fn get_in(&self, group: TokenGroup, name: &str) -> Option<&Token> {
        self.get(name).filter(|token| token.group == group)
    }

    /// Tokens in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn group(&self, group: TokenGroup) -> impl Iterator<Item = &Token> {
        self.iter().filter(move |token| token.group == group)
    }

    pub fn content_globs(&self) -> &[&'static str] {
        self.content_globs
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
