//! In-memory element tree for one note body.
//!
//! Both the parsed input and the transformed output use the same node type.
//! Attribute and child order is significant and preserved end to end, since
//! converted output is compared byte-for-byte against expected HTML.

/// A single node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, entity-decoded, whitespace preserved exactly.
    Text(String),
    /// An element with ordered attributes and ordered children.
    Element(Element),
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute, builder-style.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child node, builder-style.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
