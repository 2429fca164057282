//! # enexml
//!
//! Converts a single exported note body, written in the ENEX XML dialect
//! used by note-export archives, into sanitized HTML suitable for display
//! inside a host note application.
//!
//! ## Pipeline
//!
//! Data flows strictly forward, with no state shared across calls:
//!
//! 1. Parse the body XML into an element tree ([`enex`])
//! 2. Index the supplied resource metadata by content hash ([`resource`])
//! 3. Transform each element to its HTML equivalent ([`transform`])
//! 4. Serialize the result with deterministic escaping ([`html`])
//!
//! ## Quick Start
//!
//! ```
//! use enexml::{ResourceDescriptor, convert};
//!
//! let body = r#"<en-note><div><en-media hash="89ce7da62c6b2832929a6964237e98e9" type="image/jpeg"/></div></en-note>"#;
//! let resources = [ResourceDescriptor {
//!     id: "89ce7da62c6b2832929a6964237e98e9".to_string(),
//!     filename: String::new(),
//!     mime: "image/jpeg".to_string(),
//!     size: 50347,
//!     title: String::new(),
//! }];
//!
//! let html = convert(body, &resources).unwrap();
//! assert_eq!(html, r#"<div><img src=":/89ce7da62c6b2832929a6964237e98e9"/></div>"#);
//! ```
//!
//! A media reference whose hash has no matching descriptor produces a
//! visible warning stamped with the conversion date instead of a media
//! element. That is the one wall-clock dependency in the crate; pass a
//! [`FixedClock`] to [`convert_with_clock`] to pin it in tests.

pub mod clock;
pub mod convert;
pub mod dom;
pub mod enex;
pub mod error;
pub mod html;
pub mod resource;
pub mod transform;

pub use clock::{Clock, FixedClock, SystemClock};
pub use convert::{convert, convert_with_clock};
pub use error::{Error, Result};
pub use resource::{ResourceDescriptor, ResourceIndex};
