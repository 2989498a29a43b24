//! The `SubjectStore` trait.
//!
//! Implemented by storage backends (`syllabus-store-es`, and [`MemoryStore`]
//! for tests). The HTTP layer depends on this abstraction, not on any
//! concrete backend.
//!
//! [`MemoryStore`]: crate::memory::MemoryStore

use std::future::Future;

use crate::subject::Subject;

/// Coarse cause of a store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
  /// The record could not be encoded for the backend.
  Encode,
  /// The backend answered but its payload could not be decoded.
  Decode,
  /// Anything else: transport failures and backend-reported errors.
  Backend,
}

/// Classification a handler needs to pick a status code and message.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn kind(&self) -> FailureKind;
}

/// Abstraction over a subject store backend.
///
/// Every write is immediately visible to subsequent reads once the returned
/// future resolves. All methods return `Send` futures so the trait can be
/// used from axum handlers on a multi-threaded runtime.
pub trait SubjectStore: Send + Sync {
  type Error: StoreError;

  /// Write `subject` as a document whose identifier is `subject.code`,
  /// overwriting any existing document with that identifier.
  ///
  /// An empty code lets the backend assign an identifier. Returns the
  /// identifier the document was stored under.
  fn index_subject(
    &self,
    subject: Subject,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;

  /// Retrieve a subject by document identifier. Returns `None` if absent.
  fn get_subject(
    &self,
    id: String,
  ) -> impl Future<Output = Result<Option<Subject>, Self::Error>> + Send + '_;

  /// Replace the whole document at `id` with `subject`. Nothing from the
  /// previous version is kept.
  fn replace_subject(
    &self,
    id: String,
    subject: Subject,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Remove the document at `id`. Removing an absent document is an error.
  fn delete_subject(
    &self,
    id: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
