//! Subject — a course record as stored in the index.
//!
//! Field names on the wire follow the index mapping (`ma_mh`, `ten_mon_hoc`,
//! `gvcn`, `so_tin_chi`). The English names are accepted as aliases on input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single course record.
///
/// Every field is optional on input: missing keys decode to an empty string,
/// zero, or an absent timestamp. Unknown keys are ignored. A body that names
/// the same field twice, e.g. both `ma_mh` and its alias `id`, is rejected as
/// a duplicate field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
  /// Course code. Doubles as the document identifier in the index.
  #[serde(rename = "ma_mh", alias = "id")]
  pub code:         String,
  #[serde(rename = "ten_mon_hoc", alias = "name")]
  pub name:         String,
  /// Lecturer in charge.
  #[serde(rename = "gvcn", alias = "owner")]
  pub owner:        String,
  #[serde(rename = "so_tin_chi", alias = "credit_count")]
  pub credit_count: i32,
  /// Server-assigned on create; never re-stamped afterwards.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created_at:   Option<DateTime<Utc>>,
}

impl Subject {
  /// Set `created_at`, overwriting anything the client sent.
  pub fn stamp_created(&mut self, at: DateTime<Utc>) { self.created_at = Some(at); }
}
