//! Markup - Language-Neutral Render Tree
//!
//! Components render into a plain tree of elements, text and fragments.
//! The tree can be inspected (queries, trigger activation) or serialized
//! to HTML.

mod html;
mod node;

pub use html::{document, escape_attr, escape_text};
pub use node::{div, ClickHandler, Element, IntoNode, Node, RenderOnce};

/// Implements [`IntoNode`] for components that implement [`RenderOnce`].
#[macro_export]
macro_rules! into_node {
    ($($component:ty),+ $(,)?) => {
        $(
            impl $crate::markup::IntoNode for $component {
                fn into_node(self) -> $crate::markup::Node {
                    $crate::markup::RenderOnce::render(self)
                }
            }
        )+
    };
}
