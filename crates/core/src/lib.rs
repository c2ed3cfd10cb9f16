//! Shared domain types for the Folio article service.
//!
//! Everything here is free of I/O so the storage layer, the HTTP API and
//! the HTTP client can all depend on it.

pub mod article;
pub mod error;
pub mod types;
