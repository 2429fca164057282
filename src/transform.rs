//! Element transformation rules.
//!
//! The dispatch core of the conversion: walks the parsed tree and maps
//! every element of the export dialect to an HTML equivalent, consulting
//! the resource index for media references. Rules are total; content is
//! never silently dropped.

use chrono::{DateTime, Utc};

use crate::dom::{Element, Node};
use crate::error::{Error, Result};
use crate::resource::{ResourceDescriptor, ResourceIndex};

/// Recognized tags in the export dialect, plus a fallback.
///
/// Classification is an explicit sum type so the transformer match is
/// exhaustive: a new recognized tag has to be handled, and anything else
/// lands in [`Tag::Unknown`] rather than being mishandled silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag<'a> {
    /// `<en-note>`: the body wrapper; dropped, children kept.
    Note,
    /// `<en-todo/>`: a checklist marker.
    Todo,
    /// `<en-media/>`: a reference to a binary attachment.
    Media,
    /// `<svg>`: inline vector graphics, passed through unchanged.
    Svg,
    /// Plain HTML the host application can display as-is.
    Html(&'a str),
    /// Anything else: the wrapper is dropped, children are kept.
    Unknown,
}

/// HTML tags preserved by the default rule.
const HTML_TAGS: &[&str] = &[
    "a", "b", "blockquote", "br", "caption", "center", "cite", "code", "col",
    "colgroup", "dd", "div", "dl", "dt", "em", "font", "h1", "h2", "h3",
    "h4", "h5", "h6", "hr", "i", "img", "li", "ol", "p", "pre", "s",
    "small", "span", "strike", "strong", "sub", "sup", "table", "tbody",
    "td", "th", "thead", "tr", "u", "ul",
];

impl<'a> Tag<'a> {
    fn classify(name: &'a str) -> Self {
        match name {
            "en-note" => Tag::Note,
            "en-todo" => Tag::Todo,
            "en-media" => Tag::Media,
            "svg" => Tag::Svg,
            _ if HTML_TAGS.contains(&name) => Tag::Html(name),
            _ => Tag::Unknown,
        }
    }
}

/// Broad media category, derived from a descriptor's MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MediaKind {
    Image,
    Audio,
    Attachment,
}

impl MediaKind {
    fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            MediaKind::Image
        } else if mime.starts_with("audio/") {
            MediaKind::Audio
        } else {
            MediaKind::Attachment
        }
    }
}

/// Transform a parsed note body into its HTML tree.
///
/// `now` is the conversion timestamp embedded in missing-resource warnings.
pub fn transform_body(
    nodes: &[Node],
    index: &ResourceIndex<'_>,
    now: DateTime<Utc>,
) -> Result<Vec<Node>> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        transform_node(node, index, now, &mut out)?;
    }
    Ok(out)
}

fn transform_node(
    node: &Node,
    index: &ResourceIndex<'_>,
    now: DateTime<Utc>,
    out: &mut Vec<Node>,
) -> Result<()> {
    let element = match node {
        Node::Text(text) => {
            out.push(Node::Text(text.clone()));
            return Ok(());
        }
        Node::Element(element) => element,
    };

    match Tag::classify(&element.tag) {
        Tag::Note | Tag::Unknown => {
            for child in &element.children {
                transform_node(child, index, now, out)?;
            }
        }
        Tag::Todo => {
            out.push(Node::Element(todo_checkbox(element)));
            // The marker is normally empty; if the exporter nested content
            // inside it anyway, keep that content after the checkbox.
            for child in &element.children {
                transform_node(child, index, now, out)?;
            }
        }
        Tag::Media => out.push(media_fragment(element, index, now)?),
        Tag::Svg => out.push(node.clone()),
        Tag::Html(tag) => {
            let mut rebuilt = Element::new(tag);
            rebuilt.attributes = element
                .attributes
                .iter()
                .filter(|(name, _)| !name.starts_with("on"))
                .cloned()
                .collect();
            rebuilt.children = transform_body(&element.children, index, now)?;
            out.push(Node::Element(rebuilt));
        }
    }

    Ok(())
}

/// `<en-todo checked="true"/>` becomes a display-only checkbox.
fn todo_checkbox(element: &Element) -> Element {
    let mut input = Element::new("input")
        .with_attribute("type", "checkbox")
        .with_attribute("disabled", "disabled");
    if element.attribute("checked") == Some("true") {
        input = input.with_attribute("checked", "checked");
    }
    input
}

/// Resolve a media reference against the index and emit the matching
/// fragment. A missing `hash` attribute is an exporter-contract violation
/// and fails the conversion; a hash with no descriptor is an expected
/// runtime condition and takes the warning path.
fn media_fragment(
    element: &Element,
    index: &ResourceIndex<'_>,
    now: DateTime<Utc>,
) -> Result<Node> {
    let hash = element
        .attribute("hash")
        .ok_or_else(|| Error::MissingAttribute {
            tag: element.tag.clone(),
            attribute: "hash".to_string(),
        })?;

    let Some(resource) = index.get(hash) else {
        log::warn!("resource {hash} referenced by note body but absent from resource list");
        return Ok(missing_resource_warning(hash, now));
    };

    Ok(match MediaKind::from_mime(&resource.mime) {
        MediaKind::Image => image_element(element, resource),
        MediaKind::Audio => audio_link(resource),
        MediaKind::Attachment => attachment_link(resource),
    })
}

fn image_element(source: &Element, resource: &ResourceDescriptor) -> Node {
    let mut img = Element::new("img").with_attribute("src", resource_url(&resource.id));
    if !resource.title.is_empty() {
        img = img.with_attribute("alt", &resource.title);
    }
    if !resource.filename.is_empty() {
        img = img.with_attribute("title", &resource.filename);
    }
    // Display dimensions come from the reference, not the descriptor.
    for name in ["width", "height"] {
        if let Some(value) = source.attribute(name) {
            img = img.with_attribute(name, value);
        }
    }
    Node::Element(img)
}

fn audio_link(resource: &ResourceDescriptor) -> Node {
    let link = Element::new("a")
        .with_attribute("class", "audio")
        .with_attribute("href", resource_url(&resource.id))
        .with_attribute("data-size", resource.size.to_string())
        .with_child(Node::text(label(resource)));
    Node::Element(link)
}

fn attachment_link(resource: &ResourceDescriptor) -> Node {
    let link = Element::new("a")
        .with_attribute("class", "attachment")
        .with_attribute("href", resource_url(&resource.id))
        .with_attribute("data-size", resource.size.to_string())
        .with_attribute("data-mime", &resource.mime)
        .with_child(Node::text(label(resource)));
    Node::Element(link)
}

/// Display label for a non-image resource: title, then filename, then the
/// bare content hash.
fn label(resource: &ResourceDescriptor) -> String {
    if !resource.title.is_empty() {
        resource.title.clone()
    } else if !resource.filename.is_empty() {
        resource.filename.clone()
    } else {
        resource.id.clone()
    }
}

/// Resource URL in the host application's `:/<hash>` scheme, resolved to
/// actual content by the host later.
fn resource_url(id: &str) -> String {
    format!(":/{id}")
}

fn missing_resource_warning(hash: &str, now: DateTime<Utc>) -> Node {
    let text = format!("Resource not found: {hash} ({})", now.format("%Y-%m-%d"));
    Node::Element(
        Element::new("div")
            .with_attribute("class", "warning")
            .with_child(Node::Text(text)),
    )
}
