//! HTTP CRUD API for subject records.
//!
//! Exposes an axum [`Router`] backed by any [`SubjectStore`]. Transport,
//! tracing layers and startup provisioning are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = syllabus_api::api_router(Arc::new(store));
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod subjects;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use syllabus_core::store::SubjectStore;

pub use error::ApiError;

/// Build the API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SubjectStore + 'static,
{
  Router::new()
    .route("/subjects", post(subjects::create::<S>))
    .route(
      "/subjects/{id}",
      get(subjects::get_one::<S>)
        .put(subjects::update::<S>)
        .delete(subjects::delete::<S>),
    )
    .with_state(store)
}

// ─── Router tests ─────────────────────────────────────────────────────────────
