//! Theme - Style Tokens and Toolchain Export
//!
//! The token table, the class-to-token resolver and the Tailwind export.

pub mod classes;
pub mod tailwind;
pub mod tokens;

pub use tailwind::TailwindConfig;
pub use tokens::{StyleTokens, Token, TokenGroup};
