//! Lenient Decoding Helpers
//!
//! Servers backed by a document store send `_id`, sometimes alongside an
//! `id` virtual, and may populate references into whole objects.

use serde::de::IgnoredAny;
use serde::Deserialize;

/// `id` wins over `_id`; either one alone is enough.
pub(crate) fn record_id(id: Option<String>, mongo_id: Option<String>) -> Result<String, String> {
    let present = |s: &String| !s.is_empty();
    id.filter(present)
        .or(mongo_id.filter(present))
        .ok_or_else(|| "missing field `id`".to_string())
}

/// A reference to another record: a bare id or a populated object
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RecordRef {
    Id(String),
    Populated {
        #[serde(default)]
        id: Option<String>,
        #[serde(rename = "_id", default)]
        mongo_id: Option<String>,
    },
    Other(IgnoredAny),
}

impl RecordRef {
    pub(crate) fn into_id(self) -> Option<String> {
        match self {
            RecordRef::Id(id) => Some(id).filter(|s| !s.is_empty()),
            RecordRef::Populated { id, mongo_id } => record_id(id, mongo_id).ok(),
            RecordRef::Other(_) => None,
        }
    }
}
