//! Error types for the Gungnir server application.
//!
//! This module provides a comprehensive error handling system with specialized error types
//! for different domains (configuration, template rendering, compute API). Errors that can
//! occur while serving a request implement `IntoResponse` for Axum HTTP responses;
//! configuration errors are reported at startup instead. All errors use `thiserror` for
//! ergonomic error definitions with automatic `Display` and `Error` trait implementations.

pub mod compute;
pub mod config;
pub mod template;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{compute::ComputeError, template::TemplateError},
};

/// Main error type for the Gungnir server application.
///
/// This enum aggregates the error types that can occur while serving a request into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse`
/// implementation maps errors to appropriate HTTP responses for API consumers.
/// Configuration errors are not part of this enum; they only occur before the server
/// starts and are reported there.
///
/// # Error Categories
/// - Template errors (missing keys, unknown filters, malformed placeholders)
/// - Compute API errors (provider requests, failed operations)
/// - Request parse errors (rendered template is not a valid provider request)
#[derive(Error, Debug)]
pub enum Error {
    /// Template rendering error (missing key, unknown filter, malformed placeholder).
    #[error(transparent)]
    TemplateError(#[from] TemplateError),
    /// Compute API error (provider request failure or failed instance operation).
    #[error(transparent)]
    ComputeError(#[from] ComputeError),
    /// The rendered template could not be parsed as a provider request.
    #[error("Failed to parse rendered template as a provider request: {0}")]
    RequestParseError(#[from] serde_json::Error),
}

/// Converts application errors into HTTP responses.
///
/// Every failure past request validation is a server-side problem: a broken template, a
/// misconfigured provider endpoint, or a failed cloud operation. All of them map to 500
/// Internal Server Error with logging, mirroring the per-domain `IntoResponse`
/// implementations.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::TemplateError(err) => err.into_response(),
            Self::ComputeError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
