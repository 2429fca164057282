//! HTML serialization.
//!
//! Renders a transformed tree to its final HTML string. Output is
//! deterministic: attributes and children are emitted exactly in stored
//! order, and one fixed escaping rule covers text and attribute values.

use crate::dom::Node;

/// Void HTML elements, serialized self-closed.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Render a tree to an HTML string.
///
/// # Examples
///
/// ```
/// use enexml::dom::{Element, Node};
/// use enexml::html::render;
///
/// let tree = [Node::Element(
///     Element::new("p").with_child(Node::text("a < b")),
/// )];
/// assert_eq!(render(&tree), "<p>a &lt; b</p>");
/// ```
pub fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(node, false, &mut out);
    }
    out
}

fn render_node(node: &Node, foreign: bool, out: &mut String) {
    let element = match node {
        Node::Text(text) => {
            out.push_str(&escape_html(text));
            return;
        }
        Node::Element(element) => element,
    };

    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_html(value));
        out.push('"');
    }

    // `foreign` marks svg subtrees, where any childless element may
    // self-close; in plain HTML only the void elements do.
    let foreign = foreign || element.tag == "svg";
    let self_close = element.children.is_empty()
        && (foreign || VOID_TAGS.contains(&element.tag.as_str()));
    if self_close {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &element.children {
        render_node(child, foreign, out);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

/// Escape text for HTML content or attribute values.
///
/// One fixed table for both positions: `&`, `<`, `>`, `"` and `'` become
/// named character references; everything else passes through.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
