//! Node - Render Tree Types

use std::fmt;

/// Zero-argument callback attached to an interactive element
pub type ClickHandler = Box<dyn Fn() + 'static>;

/// A component that renders itself into a node, consuming its props
pub trait RenderOnce {
    fn render(self) -> Node;
}

/// Conversion into a render tree node
pub trait IntoNode {
    fn into_node(self) -> Node;
}

/// A node of the render tree
#[derive(Debug)]
pub enum Node {
    /// Tag with attributes and children
    Element(Element),
    /// Plain text, escaped on serialization
    Text(String),
    /// Ordered group of nodes without a wrapper
    Fragment(Vec<Node>),
}

/// An element with a tag, ordered attributes, children and an optional click handler
pub struct Element {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Node>,
    on_click: Option<ClickHandler>,
}

/// Create a `div` element
pub fn div() -> Element {
    Element::new("div")
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Set the `id` attribute
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Append classes to the `class` attribute
    pub fn class(mut self, class: &str) -> Self {
        let class = class.trim();
        if class.is_empty() {
            return self;
        }

        match self.attributes.iter_mut().find(|(name, _)| *name == "class") {
            Some((_, value)) => {
                value.push(' ');
                value.push_str(class);
            }
            None => self.attributes.push(("class", class.to_string())),
        }
        self
    }

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn child(mut self, child: impl IntoNode) -> Self {
        self.children.push(child.into_node());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoNode,
    {
        self.children
            .extend(children.into_iter().map(IntoNode::into_node));
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

    // ==================== Getters ====================

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of the element's subtree, unescaped
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            child.collect_text(out);
        }
    }

    pub fn has_handler(&self) -> bool {
        self.on_click.is_some()
    }

    /// Invoke the click handler. Returns whether a handler ran.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// A node that renders nothing
    pub fn empty() -> Self {
        Node::Fragment(Vec::new())
    }

    /// Visit every element in document order
    pub fn walk<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Element),
    {
        match self {
            Node::Element(element) => {
                visit(element);
                for child in &element.children {
                    child.walk(visit);
                }
            }
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.walk(visit);
                }
            }
            Node::Text(_) => {}
        }
    }

    /// First element (document order) matching the predicate
    pub fn find(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.find_with(&predicate)
    }

    fn find_with<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
        match self {
            Node::Element(element) => {
                if predicate(element) {
                    return Some(element);
                }
                element
                    .children
                    .iter()
                    .find_map(|child| child.find_with(predicate))
            }
            Node::Fragment(nodes) => nodes.iter().find_map(|node| node.find_with(predicate)),
            Node::Text(_) => None,
        }
    }

    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |element| {
            if predicate(element) {
                found.push(element);
            }
        });
        found
    }

    /// Element carrying `data-slot="{slot}"`
    pub fn find_by_slot(&self, slot: &str) -> Option<&Element> {
        self.find(|element| element.get_attr("data-slot") == Some(slot))
    }

    /// Element carrying `data-trigger="{trigger}"`
    pub fn find_trigger(&self, trigger: &str) -> Option<&Element> {
        self.find(|element| element.get_attr("data-trigger") == Some(trigger))
    }

    /// All trigger elements in document order
    pub fn triggers(&self) -> Vec<&Element> {
        self.find_all(|element| element.get_attr("data-trigger").is_some())
    }

    /// Activate a rendered trigger. Returns whether a handler ran.
    pub fn activate(&self, trigger: &str) -> bool {
        self.find_trigger(trigger)
            .is_some_and(|element| element.click())
    }

    /// Concatenated text of the subtree, unescaped
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => element.collect_text(out),
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl IntoNode for Node {
    fn into_node(self) -> Node {
        self
    }
}

impl IntoNode for Element {
    fn into_node(self) -> Node {
        Node::Element(self)
    }
}

impl IntoNode for String {
    fn into_node(self) -> Node {
        Node::Text(self)
    }
}

impl IntoNode for &str {
    fn into_node(self) -> Node {
        Node::Text(self.to_string())
    }
}

impl<T: IntoNode> IntoNode for Vec<T> {
    fn into_node(self) -> Node {
        Node::Fragment(self.into_iter().map(IntoNode::into_node).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn class_appends_and_attr_replaces() {
        let element = div()
            .class("flex")
            .class("  ")
            .class("gap-3 items-center")
            .attr("data-slot", "a")
            .attr("data-slot", "b");

        assert_eq!(element.get_attr("class"), Some("flex gap-3 items-center"));
        assert_eq!(element.get_attr("data-slot"), Some("b"));
        assert!(element.has_class("gap-3"));
        assert!(!element.has_class("gap"));
        assert_eq!(element.attributes().count(), 2);
    }

    #[test]
    fn text_content_flattens_fragments() {
        let node = div()
            .child("Home")
            .child(vec![Node::text(" / "), div().child("Treaties").into_node()])
            .into_node();

        assert_eq!(node.text_content(), "Home / Treaties");
    }

    #[test]
    fn element_text_content_covers_subtree() {
        let element = div()
            .child(div().child("Treaty"))
            .child(vec![Node::text(" "), Node::text("2026")]);

        assert_eq!(element.text_content(), "Treaty 2026");
        assert_eq!(div().text_content(), "");
    }

    #[test]
    fn walk_visits_in_document_order() {
        let node = div()
            .id("root")
            .child(div().id("a").child(div().id("b")))
            .child(div().id("c"))
            .into_node();

        let mut ids = Vec::new();
        node.walk(&mut |element| ids.extend(element.get_attr("id")));
        assert_eq!(ids, vec!["root", "a", "b", "c"]);
    }

    #[test]
    fn activate_runs_handler_once() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let node = div()
            .child(
                Element::new("button")
                    .attr("data-trigger", "go")
                    .on_click(move || counter.set(counter.get() + 1)),
            )
            .into_node();

        assert!(node.activate("go"));
        assert_eq!(hits.get(), 1);
        assert!(!node.activate("missing"));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn trigger_without_handler_does_nothing() {
        let node = div()
            .child(Element::new("button").attr("data-trigger", "inert"))
            .into_node();

        assert!(node.find_trigger("inert").is_some());
        assert!(!node.activate("inert"));
    }
}
