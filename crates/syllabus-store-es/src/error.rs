//! Error type for `syllabus-store-es`.

use syllabus_core::store::{FailureKind, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),

  #[error("invalid elasticsearch url {url:?}: {reason}")]
  InvalidUrl { url: String, reason: String },

  #[error("document id {0:?} cannot be addressed")]
  UnaddressableId(String),

  #[error("request to elasticsearch failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// The cluster answered with a non-success status.
  #[error("elasticsearch returned {status}: {body}")]
  Backend { status: u16, body: String },

  #[error("unexpected response body from elasticsearch: {0}")]
  InvalidResponse(#[source] reqwest::Error),

  #[error("core error: {0}")]
  Core(#[from] syllabus_core::Error),
}

impl StoreError for Error {
  fn kind(&self) -> FailureKind {
    match self {
      Error::InvalidResponse(_) => FailureKind::Decode,
      Error::Core(e) => e.kind(),
      _ => FailureKind::Backend,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
