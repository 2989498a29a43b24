//! [`MemoryStore`] — a process-local [`SubjectStore`].
//!
//! Documents are held as encoded JSON so reads go through the same decode
//! path as a remote backend.

use std::{
  collections::HashMap,
  sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicU64, Ordering},
  },
};

use serde_json::Value;

use crate::{
  Error, Result, codec,
  store::SubjectStore,
  subject::Subject,
};

/// An in-memory subject store.
///
/// Cloning is cheap; clones share the same documents.
#[derive(Clone, Default)]
pub struct MemoryStore {
  docs:    Arc<Mutex<HashMap<String, Value>>>,
  next_id: Arc<AtomicU64>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Store a raw document, bypassing the codec.
  pub fn insert_raw(&self, id: impl Into<String>, doc: Value) {
    self.docs().insert(id.into(), doc);
  }

  pub fn len(&self) -> usize { self.docs().len() }

  pub fn is_empty(&self) -> bool { self.docs().is_empty() }

  fn docs(&self) -> MutexGuard<'_, HashMap<String, Value>> {
    self.docs.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl SubjectStore for MemoryStore {
  type Error = Error;

  async fn index_subject(&self, subject: Subject) -> Result<String> {
    let doc = codec::encode(&subject)?;
    let id = if subject.code.is_empty() {
      format!("auto-{}", self.next_id.fetch_add(1, Ordering::Relaxed))
    } else {
      subject.code
    };
    self.docs().insert(id.clone(), doc);
    Ok(id)
  }

  async fn get_subject(&self, id: String) -> Result<Option<Subject>> {
    let doc = self.docs().get(&id).cloned();
    doc.map(codec::decode_value).transpose()
  }

  async fn replace_subject(&self, id: String, subject: Subject) -> Result<()> {
    let doc = codec::encode(&subject)?;
    self.docs().insert(id, doc);
    Ok(())
  }

  async fn delete_subject(&self, id: String) -> Result<()> {
    self
      .docs()
      .remove(&id)
      .map(|_| ())
      .ok_or(Error::SubjectNotFound(id))
  }
}
