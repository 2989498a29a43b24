//! JSON encoding and decoding of [`Subject`] records.

use serde_json::Value;

use crate::{Error, Result, subject::Subject};

/// Decode a request or document body into a [`Subject`].
pub fn decode(bytes: &[u8]) -> Result<Subject> {
  serde_json::from_slice(bytes).map_err(Error::Decode)
}

/// Decode a [`Subject`] out of an already-parsed JSON value, e.g. the
/// `_source` of a search-engine document.
pub fn decode_value(value: Value) -> Result<Subject> {
  serde_json::from_value(value).map_err(Error::Decode)
}

/// Encode a [`Subject`] as the JSON document sent to the store.
pub fn encode(subject: &Subject) -> Result<Value> {
  serde_json::to_value(subject).map_err(Error::Serialization)
}
