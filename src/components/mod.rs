//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on services or do I/O. Each one is a
//! props struct rendered into a [`crate::markup::Node`].

pub mod layout;
pub mod primitives;

pub use layout::{AppShell, ContainerCard, PageHeader};
pub use primitives::{Button, ButtonSize, ButtonVariant};
