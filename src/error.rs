//! Error types for note body conversion.

use thiserror::Error;

/// Errors that can occur while converting a note body to HTML.
///
/// Every variant indicates malformed input: the body either is not
/// well-formed XML or violates the exporter's structural contract (such as
/// a media reference with no content hash). A referenced resource that is
/// absent from the resource list is *not* an error; the transformer handles
/// it by emitting a warning fragment and still produces a complete result.
#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed note body: {0}")]
    Malformed(String),

    #[error("unknown entity reference: &{0};")]
    UnknownEntity(String),

    #[error("<{tag}> is missing required attribute {attribute:?}")]
    MissingAttribute { tag: String, attribute: String },

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
