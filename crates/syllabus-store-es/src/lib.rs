//! Elasticsearch backend for the subject index.
//!
//! Talks to the cluster over its REST API with [`reqwest`]. Every write is
//! sent with `refresh=true` so it is visible to the next read.

mod mapping;
mod provision;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use provision::ProvisionMode;
pub use store::{EsConfig, EsStore};
