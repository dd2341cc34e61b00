//! Container Card Component
//!
//! Fixed-width, shadowed panel centered in the content region.

use crate::constants::CONTAINER_CARD_WIDTH;
use crate::into_node;
use crate::markup::{div, IntoNode, Node, RenderOnce};

/// Styled wrapper around arbitrary content
pub struct ContainerCard {
    content: Node,
}

impl ContainerCard {
    pub fn new(content: impl IntoNode) -> Self {
        Self {
            content: content.into_node(),
        }
    }
}

impl RenderOnce for ContainerCard {
    fn render(self) -> Node {
        div()
            .attr("data-slot", "container-card")
            .class("bg-surface shadow-card rounded-lg p-6 mx-auto mb-6")
            .class(CONTAINER_CARD_WIDTH)
            .child(self.content)
            .into_node()
    }
}

into_node!(ContainerCard);
