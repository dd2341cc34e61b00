//! Class Resolution
//!
//! Maps utility class names onto the token they reference, so rendered trees
//! can be checked against the token table before the toolchain sees them.

use super::tokens::{StyleTokens, TokenGroup};
use crate::markup::Node;

/// A token referenced by a utility class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRef<'a> {
    pub group: TokenGroup,
    pub name: &'a str,
}

/// Utility prefixes that take a themed value. Every prefix ends in `-`, so
/// `p-` never matches `px-4`. The one overlap is `gap-`, which must follow
/// `gap-x-` and `gap-y-`.
const PREFIXES: &[(&str, TokenGroup)] = &[
    ("bg-", TokenGroup::Color),
    ("text-", TokenGroup::Color),
    ("border-", TokenGroup::Color),
    ("shadow-", TokenGroup::Shadow),
    ("min-w-", TokenGroup::Spacing),
    ("max-w-", TokenGroup::Spacing),
    ("min-h-", TokenGroup::Spacing),
    ("max-h-", TokenGroup::Spacing),
    ("gap-x-", TokenGroup::Spacing),
    ("gap-y-", TokenGroup::Spacing),
    ("gap-", TokenGroup::Spacing),
    ("w-", TokenGroup::Spacing),
    ("h-", TokenGroup::Spacing),
    ("p-", TokenGroup::Spacing),
    ("px-", TokenGroup::Spacing),
    ("py-", TokenGroup::Spacing),
    ("pt-", TokenGroup::Spacing),
    ("pr-", TokenGroup::Spacing),
    ("pb-", TokenGroup::Spacing),
    ("pl-", TokenGroup::Spacing),
    ("m-", TokenGroup::Spacing),
    ("mx-", TokenGroup::Spacing),
    ("my-", TokenGroup::Spacing),
    ("mt-", TokenGroup::Spacing),
    ("mr-", TokenGroup::Spacing),
    ("mb-", TokenGroup::Spacing),
    ("ml-", TokenGroup::Spacing),
];

const TEXT_KEYWORDS: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "left", "center", "right", "justify", "start", "end",
    "wrap", "nowrap", "balance", "pretty", "ellipsis", "clip",
];

const BORDER_KEYWORDS: &[&str] = &[
    "t", "r", "b", "l", "x", "y", "s", "e", "solid", "dashed", "dotted", "double", "hidden",
    "none", "collapse", "separate",
];

const BG_KEYWORDS: &[&str] = &[
    "fixed", "local", "scroll", "none", "cover", "contain", "auto", "center", "top", "bottom",
    "left", "right", "repeat",
];

const SHADOW_KEYWORDS: &[&str] = &["sm", "md", "lg", "xl", "inner", "none"];

const SPACING_KEYWORDS: &[&str] = &[
    "auto", "full", "screen", "px", "min", "max", "fit", "svh", "lvh", "dvh", "prose",
];

const COLOR_KEYWORDS: &[&str] = &["transparent", "current", "inherit", "black", "white"];

/// The token a class refers to, or `None` for structural and built-in utilities
pub fn token_reference(class: &str) -> Option<TokenRef<'_>> {
    if class.contains('[') {
        return None;
    }

    // Variants (`hover:`, `lg:`) and opacity modifiers (`/50`) don't change the token
    let utility = class.rsplit(':').next()?;
    let utility = utility.split('/').next()?;
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    let (prefix, group, value) = PREFIXES.iter().find_map(|&(prefix, group)| {
        utility
            .strip_prefix(prefix)
            .map(|value| (prefix, group, value))
    })?;

    // `border-t-border` colors one side
    let value = if prefix == "border-" {
        strip_side(value)
    } else {
        value
    };

    let keywords = match prefix {
        "text-" => TEXT_KEYWORDS,
        "border-" => BORDER_KEYWORDS,
        "bg-" => BG_KEYWORDS,
        "shadow-" => SHADOW_KEYWORDS,
        _ => SPACING_KEYWORDS,
    };

    if is_builtin(value, keywords) {
        return None;
    }

    Some(TokenRef { group, name: value })
}

fn strip_side(value: &str) -> &str {
    match value.split_once('-') {
        Some((side, rest)) if BORDER_KEYWORDS[..8].contains(&side) && !rest.is_empty() => rest,
        _ => value,
    }
}

/// Built-in scale values: numeric, palette shades, keywords. Token names are
/// camelCase and never contain a dash.
fn is_builtin(value: &str, keywords: &[&str]) -> bool {
    value.is_empty()
        || value.starts_with(|c: char| c.is_ascii_digit())
        || value.contains('-')
        || keywords.contains(&value)
        || COLOR_KEYWORDS.contains(&value)
        || value.ends_with("xl")
}

impl StyleTokens {
    /// Whether a class refers only to tokens present in the table
    pub fn resolves_class(&self, class: &str) -> bool {
        match token_reference(class) {
            Some(reference) => self.get_in(reference.group, reference.name).is_some(),
            None => true,
        }
    }

    /// Classes in the tree that name a token missing from the table
    pub fn unresolved_classes(&self, node: &Node) -> Vec<String> {
        let mut unresolved = Vec::new();
        node.walk(&mut |element| {
            unresolved.extend(
                element
                    .classes()
                    .filter(|class| !self.resolves_class(class))
                    .map(str::to_string),
            );
        });
        unresolved
    }
}
