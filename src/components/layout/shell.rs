//! Shell Component
//!
//! The page scaffold: fixed-width sidebar with the brand label, a header bar
//! and the scrollable content region. The sidebar menu and the header
//! widgets are supplied by the host; without them the shell renders empty
//! placeholder regions.

use crate::constants::{HEADER_HEIGHT_VAR, SIDEBAR_WIDTH_VAR};
use crate::i18n::{t, Locale};
use crate::into_node;
use crate::markup::{div, Element, IntoNode, Node, RenderOnce};

/// Application shell wrapper
pub struct AppShell {
    content: Node,
    locale: Locale,
    sidebar_menu: Option<Node>,
    header_actions: Option<Node>,
}

impl AppShell {
    pub fn new(content: impl IntoNode) -> Self {
        Self {
            content: content.into_node(),
            locale: Locale::default(),
            sidebar_menu: None,
            header_actions: None,
        }
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Navigation menu placed below the brand label
    pub fn sidebar_menu(mut self, menu: impl IntoNode) -> Self {
        self.sidebar_menu = Some(menu.into_node());
        self
    }

    /// User and notification widgets placed in the header bar
    pub fn header_actions(mut self, actions: impl IntoNode) -> Self {
        self.header_actions = Some(actions.into_node());
        self
    }

    fn render_sidebar(locale: Locale, menu: Option<Node>) -> Element {
        let height = format!("h-[var({HEADER_HEIGHT_VAR})]");

        let mut nav = Element::new("nav")
            .attr("data-slot", "sidebar-menu")
            .attr("aria-label", t(locale, "shell.sidebar_menu"));
        if let Some(menu) = menu {
            nav = nav.child(menu);
        }

        Element::new("aside")
            .class(&format!("w-[var({SIDEBAR_WIDTH_VAR})]"))
            .class("border-r border-border bg-surface")
            .child(
                div()
                    .attr("data-slot", "brand")
                    .class("flex items-center justify-center border-b border-border font-semibold")
                    .class(&height)
                    .child(t(locale, "shell.brand")),
            )
            .child(nav)
    }

    fn render_header(actions: Option<Node>) -> Element {
        let mut slot = div()
            .attr("data-slot", "header-actions")
            .class("flex items-center gap-4");
        if let Some(actions) = actions {
            slot = slot.child(actions);
        }

        Element::new("header")
            .class(&format!("h-[var({HEADER_HEIGHT_VAR})]"))
            .class("flex items-center justify-end border-b border-border bg-surface px-6 shadow-card")
            .child(slot)
    }
}

impl RenderOnce for AppShell {
    fn render(self) -> Node {
        div()
            .attr("data-slot", "app-shell")
            .class("flex min-h-screen bg-page text-textPrimary")
            .child(Self::render_sidebar(self.locale, self.sidebar_menu))
            .child(
                Element::new("main")
                    .class("flex flex-1 flex-col bg-page")
                    .child(Self::render_header(self.header_actions))
                    .child(
                        div()
                            .attr("data-slot", "content")
                            .class("flex flex-1 flex-col gap-6 overflow-y-auto px-6 py-6 lg:px-10")
                            .child(self.content),
                    ),
            )
            .into_node()
    }
}

into_node!(AppShell);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::{ContainerCard, PageHeader};
    use crate::theme::StyleTokens;
    use proptest::prelude::*;

    #[test]
    fn places_content_in_scrollable_region() {
        let node = AppShell::new(div().id("page-body")).render();
        let content = node.find_by_slot("content").expect("content region");

        assert!(content.has_class("overflow-y-auto"));
        assert_eq!(content.child_nodes().len(), 1);
        match &content.child_nodes()[0] {
            Node::Element(el) => assert_eq!(el.get_attr("id"), Some("page-body")),
            other => panic!("unexpected content node: {other:?}"),
        }
    }

    #[test]
    fn frame_structure() {
        let node = AppShell::new("body").render();

        let aside = node.find(|el| el.tag() == "aside").expect("sidebar");
        assert!(aside.has_class("w-[var(--sidebar-width)]"));

        let header = node.find(|el| el.tag() == "header").expect("header bar");
        assert!(header.has_class("h-[var(--header-height)]"));
        assert!(header.has_class("shadow-card"));

        // Header precedes content inside main
        let main = node.find(|el| el.tag() == "main").expect("main");
        assert_eq!(main.child_nodes().len(), 2);
    }

    #[test]
    fn placeholders_are_empty_without_collaborators() {
        let node = AppShell::new("body").render();

        let menu = node.find_by_slot("sidebar-menu").expect("menu slot");
        assert_eq!(menu.tag(), "nav");
        assert!(menu.child_nodes().is_empty());

        let actions = node.find_by_slot("header-actions").expect("actions slot");
        assert!(actions.child_nodes().is_empty());
    }

    #[test]
    fn collaborators_fill_their_slots() {
        let node = AppShell::new("body")
            .sidebar_menu(div().id("menu"))
            .header_actions(div().id("user"))
            .render();

        let menu = node.find_by_slot("sidebar-menu").expect("menu slot");
        assert_eq!(menu.child_nodes().len(), 1);
        let actions = node.find_by_slot("header-actions").expect("actions slot");
        assert_eq!(actions.text_content(), "");
        assert_eq!(actions.child_nodes().len(), 1);
    }

    #[test]
    fn brand_label_is_localized() {
        let en = AppShell::new("").render();
        let zh = AppShell::new("").locale(Locale::ZhTw).render();

        assert_eq!(
            en.find_by_slot("brand").map(|b| b.child_nodes()[0].text_content()),
            Some("EIS Reinsurance System".to_string())
        );
        assert_eq!(
            zh.find_by_slot("brand").map(|b| b.child_nodes()[0].text_content()),
            Some("EIS 再保系統".to_string())
        );
    }

    #[test]
    fn composed_page_resolves_all_tokens() {
        let node = AppShell::new(vec![
            PageHeader::new("Policy List").on_save(|| {}).on_cancel(|| {}).into_node(),
            ContainerCard::new("rows").into_node(),
        ])
        .render();

        assert!(StyleTokens::global().unresolved_classes(&node).is_empty());
        assert_eq!(node.triggers().len(), 2);
    }

    proptest! {
        #[test]
        fn brand_rendered_exactly_once(content in ".*") {
            let node = AppShell::new(content.as_str()).render();

            prop_assert_eq!(node.find_all(|el| el.get_attr("data-slot") == Some("brand")).len(), 1);
            let region = node.find_by_slot("content").expect("content region");
            prop_assert_eq!(region.text_content(), content);
        }
    }
}
