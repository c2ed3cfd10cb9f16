//! Row models.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the conversion into its transfer representation.

pub mod article;
