//! Layout Components
//!
//! Shell, page header and card components.

pub mod card;
pub mod page_header;
pub mod shell;

pub use card::ContainerCard;
pub use page_header::PageHeader;
pub use shell::AppShell;
