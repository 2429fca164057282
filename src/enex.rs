//! ENEX note body parsing.
//!
//! Parses the XML dialect used for a single exported note body into a
//! [`Node`] tree. Text content is preserved exactly as written (no
//! trimming), standard entities and CDATA sections are decoded, and
//! anything that is not well-formed XML is rejected.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::dom::{Element, Node};
use crate::error::{Error, Result};

/// Parse one note body into its ordered top-level nodes.
///
/// The input is the contents of a single extracted `<note>` body: usually
/// an XML declaration, a DOCTYPE, and one `<en-note>` element. Declaration,
/// DOCTYPE, processing instructions and comments are skipped; whitespace
/// between them is ignored. Everything inside elements is kept verbatim.
///
/// # Examples
///
/// ```
/// use enexml::dom::Node;
/// use enexml::enex::parse_body;
///
/// let nodes = parse_body("<en-note><div>hi</div></en-note>").unwrap();
/// assert_eq!(nodes.len(), 1);
/// assert!(matches!(nodes[0], Node::Element(_)));
/// ```
pub fn parse_body(xml: &str) -> Result<Vec<Node>> {
    let mut reader = Reader::from_str(xml);

    let mut roots: Vec<Node> = Vec::new();
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(element_from(&e)?),
            Event::Empty(e) => {
                let element = element_from(&e)?;
                push_node(&mut stack, &mut roots, Node::Element(element));
            }
            Event::End(e) => {
                let element = stack.pop().ok_or_else(|| {
                    Error::Malformed(format!(
                        "closing tag </{}> without opening tag",
                        String::from_utf8_lossy(e.name().as_ref())
                    ))
                })?;
                if element.tag.as_bytes() != e.name().as_ref() {
                    return Err(Error::Malformed(format!(
                        "closing tag </{}> does not match <{}>",
                        String::from_utf8_lossy(e.name().as_ref()),
                        element.tag
                    )));
                }
                push_node(&mut stack, &mut roots, Node::Element(element));
            }
            Event::Text(e) => {
                let text = std::str::from_utf8(e.as_ref())?;
                push_text(&mut stack, text)?;
            }
            Event::CData(e) => {
                let bytes = e.into_inner();
                let text = std::str::from_utf8(&bytes)?;
                push_text(&mut stack, text)?;
            }
            Event::GeneralRef(e) => {
                let entity = std::str::from_utf8(e.as_ref())?;
                let resolved = resolve_entity(entity)
                    .ok_or_else(|| Error::UnknownEntity(entity.to_string()))?;
                push_text(&mut stack, &resolved)?;
            }
            Event::Decl(_) | Event::DocType(_) | Event::PI(_) | Event::Comment(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(unclosed) = stack.last() {
        return Err(Error::Malformed(format!(
            "unexpected end of input inside <{}>",
            unclosed.tag
        )));
    }

    Ok(roots)
}

fn push_node(stack: &mut [Element], roots: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

/// Append text to the current element, merging adjacent runs so that text
/// split by entity references or CDATA boundaries forms one node.
fn push_text(stack: &mut [Element], text: &str) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        match parent.children.last_mut() {
            Some(Node::Text(existing)) => existing.push_str(text),
            _ => parent.children.push(Node::Text(text.to_string())),
        }
        return Ok(());
    }

    // Outside the root element only inter-markup whitespace is allowed.
    if text.chars().all(char::is_whitespace) {
        return Ok(());
    }
    Err(Error::Malformed(format!(
        "text outside root element: {text:?}"
    )))
}

fn element_from(e: &BytesStart<'_>) -> Result<Element> {
    let tag = std::str::from_utf8(e.name().as_ref())?.to_string();
    let mut element = Element::new(tag);

    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::Malformed(err.to_string()))?;
        let name = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = decode_entities(std::str::from_utf8(&attr.value)?)?;
        element.attributes.push((name, value));
    }

    Ok(element)
}

/// Decode entity references embedded in an attribute value.
///
/// Text content does not pass through here: the reader hands entities in
/// text over as separate events. Attribute values arrive raw.
fn decode_entities(raw: &str) -> Result<String> {
    if !raw.contains('&') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 1..];

        let end = rest.find(';').ok_or_else(|| {
            Error::Malformed(format!("unterminated entity reference in {raw:?}"))
        })?;
        let entity = &rest[..end];
        let resolved =
            resolve_entity(entity).ok_or_else(|| Error::UnknownEntity(entity.to_string()))?;
        out.push_str(&resolved);
        rest = &rest[end + 1..];
    }
    out.push_str(rest);

    Ok(out)
}

/// Resolve a standard XML entity or numeric character reference.
fn resolve_entity(entity: &str) -> Option<String> {
    let named = match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    };
    if let Some(c) = named {
        return Some(c.to_string());
    }

    let code = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse().ok()?
    } else {
        return None;
    };

    char::from_u32(code).map(|c| c.to_string())
}
