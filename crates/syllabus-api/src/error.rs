//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Error bodies are plain text.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use syllabus_core::store::{FailureKind, StoreError};
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("invalid input: {0}")]
  BadRequest(#[source] syllabus_core::Error),

  #[error("subject {0} not found")]
  NotFound(String),

  /// `message` is what the client sees; `source` is only logged.
  #[error("{message}: {source}")]
  Internal {
    message: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  /// Wrap a failed store write. Encoding failures get their own message.
  pub fn write_failed<E: StoreError>(error: E, message: &'static str) -> Self {
    let message = match error.kind() {
      FailureKind::Encode => "Error marshaling subject data",
      FailureKind::Decode | FailureKind::Backend => message,
    };
    ApiError::Internal {
      message,
      source: Box::new(error),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::BadRequest(e) => {
        tracing::debug!(error = %e, "rejected request body");
        (StatusCode::BAD_REQUEST, "Invalid input").into_response()
      }
      ApiError::NotFound(_) => {
        (StatusCode::NOT_FOUND, "Subject not found").into_response()
      }
      ApiError::Internal { message, source } => {
        tracing::error!(error = %source, "{message}");
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
      }
    }
  }
}
