//! Primitive Components
//!
//! Basic building blocks used by the layout components.

pub mod button;

pub use button::{Button, ButtonSize, ButtonVariant};
