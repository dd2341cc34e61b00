//! Reinsurance UI Component Library
//!
//! Presentational building blocks for the EIS reinsurance console: a page
//! shell, a page header with save/cancel triggers, a container card, and the
//! style token table consumed by the Tailwind toolchain.
//!
//! Components render into a language-neutral tree ([`markup::Node`]) that
//! can be queried, activated, or serialized to HTML.
//!
//! ```ignore
//! use reinsurance_ui::components::{AppShell, ContainerCard, PageHeader};
//! use reinsurance_ui::markup::{IntoNode, RenderOnce};
//!
//! let page = AppShell::new(vec![
//!     PageHeader::new("Policy List").on_save(|| save()).into_node(),
//!     ContainerCard::new("...").into_node(),
//! ])
//! .render();
//! println!("{}", page.to_html());
//! ```

#![forbid(unsafe_code)]

rust_i18n::i18n!("locales", fallback = "en");

pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod features;
pub mod i18n;
pub mod markup;
pub mod theme;
pub mod utils;
