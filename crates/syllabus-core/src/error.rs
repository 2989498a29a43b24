//! Error types for `syllabus-core`.

use thiserror::Error;

use crate::store::{FailureKind, StoreError};

#[derive(Debug, Error)]
pub enum Error {
  /// The payload was not well-formed JSON, or a field had the wrong type.
  #[error("malformed subject record: {0}")]
  Decode(#[source] serde_json::Error),

  #[error("serialization error: {0}")]
  Serialization(#[source] serde_json::Error),

  #[error("subject not found: {0}")]
  SubjectNotFound(String),
}

impl StoreError for Error {
  fn kind(&self) -> FailureKind {
    match self {
      Error::Decode(_) => FailureKind::Decode,
      Error::Serialization(_) => FailureKind::Encode,
      Error::SubjectNotFound(_) => FailureKind::Backend,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
