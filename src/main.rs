//! Reinsurance UI - Command Line Entry Point
//!
//! Renders the demo page and exports the style token table for the
//! Tailwind toolchain.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use reinsurance_ui::config::AppConfig;
use reinsurance_ui::features::policy_list::PolicyListPage;
use reinsurance_ui::i18n::Locale;
use reinsurance_ui::markup::{document, RenderOnce};
use reinsurance_ui::theme::{tokens, StyleTokens, TailwindConfig, TokenGroup};

#[derive(Debug, Parser)]
#[command(name = "reinsurance-ui", version, about)]
struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true, env = "REINSURANCE_UI_CONFIG")]
    config: Option<PathBuf>,

    /// Label locale: en or zh-TW
    #[arg(long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the policy list page as an HTML document
    Render {
        /// Page title override
        #[arg(long)]
        title: Option<String>,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the Tailwind configuration derived from the token table
    Theme {
        /// Indented JSON (also enabled by `pretty = true` in the config)
        #[arg(long)]
        pretty: bool,
    },
    /// List the style tokens
    Tokens,
    /// List the supported label locales, marking the effective one
    Locales,
}

fn main() -> Result<()> {
    // stdout carries HTML/JSON, so logs go to stderr
    let (writer, _guard) = tracing_appender::non_blocking(io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .init();

    let cli = Cli::parse();

    tokens::validate(tokens::BUILTIN_TOKENS).context("Built-in style tokens are invalid")?;

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let locale = config.resolve_locale(cli.locale);
    tracing::debug!(?config, locale = locale.tag(), "Configuration resolved");

    match cli.command {
        Command::Render { title, output } => render(locale, title, output),
        Command::Theme { pretty } => theme(pretty || config.pretty),
        Command::Tokens => list_tokens(),
        Command::Locales => list_locales(locale),
    }
}

fn render(locale: Locale, title: Option<String>, output: Option<PathBuf>) -> Result<()> {
    let mut page = PolicyListPage::new(locale);
    if let Some(title) = title {
        page = page.title(title);
    }

    let title = page.resolved_title();
    let html = document(locale, &title, &page.render());

    match output {
        Some(path) => {
            fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), locale = locale.tag(), "Rendered page");
        }
        None => io::stdout().write_all(html.as_bytes())?,
    }
    Ok(())
}

fn theme(pretty: bool) -> Result<()> {
    let json = TailwindConfig::from_tokens(StyleTokens::global()).to_json(pretty)?;
    println!("{json}");
    Ok(())
}

fn list_locales(current: Locale) -> Result<()> {
    let mut out = io::stdout().lock();
    for locale in Locale::all() {
        let marker = if *locale == current { "*" } else { " " };
        writeln!(out, "{marker} {:<6} {}", locale.tag(), locale.display_name())?;
    }
    Ok(())
}

fn list_tokens() -> Result<()> {
    let tokens = StyleTokens::global();
    let mut out = io::stdout().lock();

    for group in TokenGroup::all() {
        for token in tokens.group(*group) {
            writeln!(out, "{:<8} {:<14} {}", group.label(), token.name, token.indirection)?;
        }
    }
    for glob in tokens.content_globs() {
        writeln!(out, "{:<8} {glob}", "content")?;
    }
    Ok(())
}
