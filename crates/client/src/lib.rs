//! HTTP client for the Folio article API.
//!
//! Two surfaces are provided:
//! - [`ArticleApiClient`] returns `Result`s and reports every failure.
//! - [`ArticleService`] logs failures and returns an empty value instead
//!   (empty list, `None`, or `false`), for presentation code that only
//!   renders whatever data is available.

pub mod api;
pub mod config;
pub mod service;

pub use api::{ArticleApiClient, ClientError};
pub use config::ClientConfig;
pub use service::ArticleService;
