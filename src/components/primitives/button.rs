//! Button Component

use crate::i18n::{t, Locale};
use crate::into_node;
use crate::markup::{ClickHandler, Element, IntoNode, Node, RenderOnce};

const BASE_CLASSES: &str =
    "inline-flex items-center justify-center rounded-md font-medium transition-colors";

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (brand fill)
    #[default]
    Primary,
    /// Bordered button on the surface color
    Outline,
    /// Muted fill
    Secondary,
    /// Destructive action
    Danger,
    /// Ghost button (transparent)
    Ghost,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-brand text-onBrand hover:bg-brandHover",
            ButtonVariant::Outline => {
                "border border-border bg-surface text-textPrimary hover:bg-surfaceMuted"
            }
            ButtonVariant::Secondary => "bg-surfaceMuted text-textPrimary hover:bg-borderSoft",
            ButtonVariant::Danger => "bg-danger text-onBrand hover:opacity-90",
            ButtonVariant::Ghost => "bg-transparent text-textSecondary hover:bg-surfaceMuted",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

impl ButtonSize {
    fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Small => "h-8 px-3 text-xs",
            ButtonSize::Medium => "h-9 px-4 text-sm",
            ButtonSize::Large => "h-10 px-6 text-base",
        }
    }
}

/// A styled trigger invoking a zero-argument callback
pub struct Button {
    id: String,
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    locale: Locale,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            loading: false,
            locale: Locale::default(),
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Locale of the loading label
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the click handler
    pub fn on_click(self, handler: impl Fn() + 'static) -> Self {
        self.on_click_boxed(Box::new(handler))
    }

    pub(crate) fn on_click_boxed(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    /// Create a danger button
    pub fn danger(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self) -> Node {
        let inactive = self.disabled || self.loading;

        let label = if self.loading {
            t(self.locale, "button.loading")
        } else {
            self.label
        };

        let mut element = Element::new("button")
            .attr("type", "button")
            .attr("data-trigger", self.id)
            .attr("data-variant", self.variant.name())
            .class(BASE_CLASSES)
            .class(self.size.classes())
            .class(self.variant.classes())
            .child(label);

        if inactive {
            element = element
                .attr("disabled", "disabled")
                .class("opacity-50 cursor-not-allowed");
        } else if let Some(handler) = self.on_click {
            element = element.on_click_boxed(handler);
        }

        element.into_node()
    }
}

into_node!(Button);
