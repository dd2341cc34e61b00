//! Page Header Component
//!
//! Breadcrumb, page title and the optional cancel/save triggers.

use crate::components::primitives::button::Button;
use crate::constants::{BREADCRUMB_SEPARATOR, CANCEL_TRIGGER, SAVE_TRIGGER};
use crate::i18n::{t, Locale};
use crate::into_node;
use crate::markup::{div, ClickHandler, Element, IntoNode, Node, RenderOnce};

/// Page header with breadcrumb and actions
pub struct PageHeader {
    title: String,
    locale: Locale,
    on_save: Option<ClickHandler>,
    on_cancel: Option<ClickHandler>,
}

impl PageHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            locale: Locale::default(),
            on_save: None,
            on_cancel: None,
        }
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Render a Save trigger calling `handler`
    pub fn on_save(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_save = Some(Box::new(handler));
        self
    }

    /// Render a Cancel trigger calling `handler`
    pub fn on_cancel(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_cancel = Some(Box::new(handler));
        self
    }

    fn render_actions(
        locale: Locale,
        on_cancel: Option<ClickHandler>,
        on_save: Option<ClickHandler>,
    ) -> Element {
        let mut actions = div().attr("data-slot", "page-actions").class("flex gap-3");

        // Cancel always precedes Save
        if let Some(handler) = on_cancel {
            actions = actions.child(
                Button::outline(CANCEL_TRIGGER, t(locale, "page_header.cancel"))
                    .on_click_boxed(handler),
            );
        }

        if let Some(handler) = on_save {
            actions = actions.child(
                Button::primary(SAVE_TRIGGER, t(locale, "page_header.save"))
                    .on_click_boxed(handler),
            );
        }

        actions
    }
}

impl RenderOnce for PageHeader {
    fn render(self) -> Node {
        let breadcrumb = format!(
            "{}{BREADCRUMB_SEPARATOR}{}",
            t(self.locale, "page_header.home"),
            self.title
        );

        div()
            .attr("data-slot", "page-header")
            .class("bg-surface border-b border-borderSoft px-6 py-4 flex justify-between items-center")
            .child(
                div()
                    .child(
                        div()
                            .attr("data-slot", "breadcrumb")
                            .class("text-xs text-textTertiary mb-1")
                            .child(breadcrumb),
                    )
                    .child(
                        Element::new("h1")
                            .class("text-2xl font-semibold")
                            .child(self.title),
                    ),
            )
            .child(Self::render_actions(self.locale, self.on_cancel, self.on_save))
            .into_node()
    }
}

into_node!(PageHeader);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::StyleTokens;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn trigger_ids(node: &Node) -> Vec<String> {
        node.triggers()
            .iter()
            .filter_map(|el| el.get_attr("data-trigger"))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn title_only_renders_no_triggers() {
        let node = PageHeader::new("Policy List").render();

        assert!(node.text_content().contains("Policy List"));
        assert!(node.triggers().is_empty());
        let breadcrumb = node.find_by_slot("breadcrumb").expect("breadcrumb");
        assert_eq!(breadcrumb.child_nodes()[0].text_content(), "Home / Policy List");
    }

    #[test]
    fn save_only_renders_one_wired_trigger() {
        let calls = recorder();
        let log = calls.clone();
        let node = PageHeader::new("Policy List")
            .on_save(move || log.borrow_mut().push("save"))
            .render();

        assert_eq!(trigger_ids(&node), vec![SAVE_TRIGGER]);
        assert!(!node.text_content().contains("Cancel"));

        assert!(node.activate(SAVE_TRIGGER));
        assert_eq!(*calls.borrow(), vec!["save"]);
    }

    #[test]
    fn cancel_precedes_save() {
        let calls = recorder();
        let (save_log, cancel_log) = (calls.clone(), calls.clone());
        let node = PageHeader::new("Treaty 2026-001")
            .on_save(move || save_log.borrow_mut().push("save"))
            .on_cancel(move || cancel_log.borrow_mut().push("cancel"))
            .render();

        assert_eq!(trigger_ids(&node), vec![CANCEL_TRIGGER, SAVE_TRIGGER]);

        let triggers = node.triggers();
        assert_eq!(triggers[0].get_attr("data-variant"), Some("outline"));
        assert_eq!(triggers[1].get_attr("data-variant"), Some("primary"));

        assert!(node.activate(CANCEL_TRIGGER));
        assert!(node.activate(SAVE_TRIGGER));
        assert_eq!(*calls.borrow(), vec!["cancel", "save"]);
    }

    #[test]
    fn cancel_only() {
        let node = PageHeader::new("Claims").on_cancel(|| {}).render();

        assert_eq!(trigger_ids(&node), vec![CANCEL_TRIGGER]);
        assert!(!node.activate(SAVE_TRIGGER));
    }

    #[test]
    fn labels_follow_locale() {
        let node = PageHeader::new("保單列表")
            .locale(Locale::ZhTw)
            .on_save(|| {})
            .on_cancel(|| {})
            .render();

        let text = node.text_content();
        assert!(text.starts_with("首頁 / 保單列表"));
        assert!(text.contains("取消"));
        assert!(text.contains("儲存"));
    }

    #[test]
    fn classes_resolve_against_tokens() {
        let node = PageHeader::new("Policy List")
            .on_save(|| {})
            .on_cancel(|| {})
            .render();
        assert!(StyleTokens::global().unresolved_classes(&node).is_empty());
    }

    proptest! {
        #[test]
        fn title_and_breadcrumb_always_present(title in "[^<>&]{0,40}") {
            let node = PageHeader::new(title.clone()).render();
            let text = node.text_content();

            let breadcrumb = format!("Home / {title}");
            prop_assert!(text.contains(&breadcrumb));
            let heading = node.find(|el| el.tag() == "h1").expect("heading");
            prop_assert_eq!(heading.child_nodes()[0].text_content(), title);
            prop_assert!(node.triggers().is_empty());
        }
    }
}
