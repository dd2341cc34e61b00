//! UI Constants
//!
//! Centralized layout constants for consistent styling across components.

/// Fixed width of a container card
pub const CONTAINER_CARD_WIDTH: &str = "w-[1184px]";

/// CSS variable holding the sidebar width
pub const SIDEBAR_WIDTH_VAR: &str = "--sidebar-width";

/// CSS variable holding the header bar height
pub const HEADER_HEIGHT_VAR: &str = "--header-height";

/// Separator between breadcrumb segments
pub const BREADCRUMB_SEPARATOR: &str = " / ";

/// Trigger id of the page header cancel action
pub const CANCEL_TRIGGER: &str = "page-header-cancel";

/// Trigger id of the page header save action
pub const SAVE_TRIGGER: &str = "page-header-save";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
