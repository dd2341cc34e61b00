//! Policy List Page
//!
//! Shell, header and card composed into one page. Save and cancel are
//! reported through tracing; the host owns the actual persistence.

use crate::components::{AppShell, ContainerCard, PageHeader};
use crate::i18n::{t, Locale};
use crate::into_node;
use crate::markup::{Element, IntoNode, Node, RenderOnce};

/// The policy list page
pub struct PolicyListPage {
    title: Option<String>,
    locale: Locale,
}

impl PolicyListPage {
    pub fn new(locale: Locale) -> Self {
        Self {
            title: None,
            locale,
        }
    }

    /// Override the localized page title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title shown in the header and the document
    pub fn resolved_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| t(self.locale, "policy_list.title"))
    }
}

impl RenderOnce for PolicyListPage {
    fn render(self) -> Node {
        let title = self.resolved_title();

        let save_title = title.clone();
        let cancel_title = title.clone();
        let header = PageHeader::new(title)
            .locale(self.locale)
            .on_cancel(move || tracing::info!(page = %cancel_title, "Cancel requested"))
            .on_save(move || tracing::info!(page = %save_title, "Save requested"));

        let summary = Element::new("p")
            .class("text-sm text-textSecondary")
            .child(t(self.locale, "policy_list.summary"));

        AppShell::new(vec![
            header.into_node(),
            ContainerCard::new(summary).into_node(),
        ])
        .locale(self.locale)
        .render()
    }
}

into_node!(PolicyListPage);
