//! Features - Composed Pages
//!
//! Pages built from the layout components.

pub mod policy_list;
