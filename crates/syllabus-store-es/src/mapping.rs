//! Index settings and field mapping.

use serde_json::{Value, json};

/// Body of the create-index request. Field names match the serialised form
/// of [`Subject`](syllabus_core::subject::Subject).
pub fn index_body() -> Value {
  json!({
    "settings": {},
    "mappings": {
      "properties": {
        "ma_mh":       { "type": "text" },
        "ten_mon_hoc": { "type": "text" },
        "gvcn":        { "type": "text" },
        "so_tin_chi":  { "type": "integer" },
        "created_at":  { "type": "date" }
      }
    }
  })
}
