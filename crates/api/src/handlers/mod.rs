//! Request handlers.
//!
//! Each submodule provides async handler functions (list, get, create,
//! update, delete) for a single entity type. Handlers validate input via
//! `folio_core`, delegate to the corresponding repository in `folio_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod articles;
