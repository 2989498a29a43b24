//! Core types and trait definitions for the subject index.
//!
//! This crate has no HTTP or search-engine dependencies. The store backend
//! (`syllabus-store-es`) and the HTTP layer (`syllabus-api`) both build on it.

pub mod codec;
pub mod error;
pub mod memory;
pub mod store;
pub mod subject;

pub use error::{Error, Result};
