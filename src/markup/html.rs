//! HTML serialization of the render tree

use std::fmt::{self, Write as _};

use super::node::{Element, Node};
use crate::i18n::Locale;

/// Escape text content
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text, false);
    out
}

/// Escape an attribute value (double-quoted)
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    push_escaped(&mut out, value, true);
    out
}

fn push_escaped(out: &mut String, raw: &str, quotes: bool) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            '\'' if quotes => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

impl Node {
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => fmt::Display::fmt(element, f),
            Node::Text(text) => f.write_str(&escape_text(text)),
            Node::Fragment(nodes) => nodes.iter().try_for_each(|node| fmt::Display::fmt(node, f)),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag())?;
        for (name, value) in self.attributes() {
            write!(f, " {name}=\"{}\"", escape_attr(value))?;
        }
        f.write_char('>')?;
        for child in self.child_nodes() {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag())
    }
}

/// Wrap a rendered body in a complete HTML document
pub fn document(locale: Locale, title: &str, body: &Node) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"{lang}\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n",
            "</head>\n",
            "<body>\n{body}\n</body>\n",
            "</html>\n"
        ),
        lang = locale.tag(),
        title = escape_text(title),
        body = body,
    )
}
