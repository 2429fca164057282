//! Resource metadata and the per-conversion lookup index.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata for one binary attachment referenced from a note body.
///
/// The attachment bytes never pass through this crate. A media reference in
/// the body names a resource by content hash; the emitted HTML carries that
/// hash so the host application can resolve it to displayable content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResourceDescriptor {
    /// Content hash, used both as the lookup key and as the reference id
    /// embedded in emitted media elements.
    pub id: String,
    /// Original filename; may be empty.
    pub filename: String,
    /// MIME type, e.g. `image/jpeg` or `audio/x-m4a`.
    pub mime: String,
    /// Size in bytes.
    pub size: u64,
    /// Display title; may be empty.
    pub title: String,
}

/// Hash to descriptor lookup table, built once per conversion call and
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct ResourceIndex<'a> {
    by_id: HashMap<&'a str, &'a ResourceDescriptor>,
}

impl<'a> ResourceIndex<'a> {
    /// Build an index over the supplied descriptors.
    ///
    /// Never fails; an empty slice yields an empty index. Ids are assumed
    /// unique within one call. If the caller supplies duplicates anyway,
    /// the first descriptor wins and later ones are ignored.
    pub fn new(resources: &'a [ResourceDescriptor]) -> Self {
        let mut by_id = HashMap::with_capacity(resources.len());
        for resource in resources {
            by_id.entry(resource.id.as_str()).or_insert(resource);
        }
        Self { by_id }
    }

    /// Look up a descriptor by content hash.
    pub fn get(&self, id: &str) -> Option<&'a ResourceDescriptor> {
        self.by_id.get(id).copied()
    }
}
