//! Request extractors whose rejections render as [`AppError`] JSON bodies.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// [`axum::Json`] with malformed bodies reported as `400 BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// [`axum::extract::Path`] with unparsable segments reported as
/// `400 BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
