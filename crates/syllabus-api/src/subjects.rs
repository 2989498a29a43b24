//! Handlers for `/subjects` endpoints.
//!
//! | Method   | Path             | Notes |
//! |----------|------------------|-------|
//! | `POST`   | `/subjects`      | Body: subject JSON; stamps `created_at`; 201 |
//! | `GET`    | `/subjects/{id}` | 404 if absent *or* if the store fails |
//! | `PUT`    | `/subjects/{id}` | Body replaces the whole document; 200 |
//! | `DELETE` | `/subjects/{id}` | 500 if the store reports an error |
//!
//! Bodies are read as raw bytes and decoded with [`codec::decode`] so that any
//! malformed payload is a 400, whatever its `Content-Type`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use bytes::Bytes;
use chrono::Utc;
use syllabus_core::{
  codec,
  store::{FailureKind, StoreError, SubjectStore},
  subject::Subject,
};
use tracing::{debug, warn};

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /subjects`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: SubjectStore,
{
  let mut subject = codec::decode(&body).map_err(ApiError::BadRequest)?;
  subject.stamp_created(Utc::now());

  let id = store
    .index_subject(subject)
    .await
    .map_err(|e| ApiError::write_failed(e, "Error indexing document"))?;
  debug!(%id, "subject created");

  Ok((StatusCode::CREATED, "Subject created successfully!"))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /subjects/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Subject>, ApiError>
where
  S: SubjectStore,
{
  match store.get_subject(id.clone()).await {
    Ok(Some(subject)) => Ok(Json(subject)),
    Ok(None) => Err(ApiError::NotFound(id)),
    Err(e) if e.kind() == FailureKind::Decode => Err(ApiError::Internal {
      message: "Error decoding response",
      source:  Box::new(e),
    }),
    // Lookup failures are reported to the client as a plain miss.
    Err(e) => {
      warn!(%id, error = %e, "subject lookup failed");
      Err(ApiError::NotFound(id))
    }
  }
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /subjects/{id}` — `created_at` is not re-stamped.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: SubjectStore,
{
  let subject = codec::decode(&body).map_err(ApiError::BadRequest)?;

  store
    .replace_subject(id.clone(), subject)
    .await
    .map_err(|e| ApiError::write_failed(e, "Error updating document"))?;
  debug!(%id, "subject replaced");

  Ok((StatusCode::OK, "Subject updated successfully!"))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /subjects/{id}`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SubjectStore,
{
  store
    .delete_subject(id.clone())
    .await
    .map_err(|e| ApiError::write_failed(e, "Error deleting subject"))?;
  debug!(%id, "subject deleted");

  Ok((StatusCode::OK, "Subject deleted successfully!"))
}
