use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum ComputeError {
    /// The provider endpoint could not be reached or returned a transport-level failure.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// The provider rejected the request with a non-success status.
    #[error("Compute API returned {status} for {endpoint}: {message}")]
    Api {
        status: u16,
        endpoint: String,
        message: String,
    },
    /// The instance operation completed but reported an error.
    #[error("Instance operation {operation} failed: {message}")]
    OperationFailed { operation: String, message: String },
    /// The operation never reached `DONE` within the client's wait attempt limit.
    #[error("Instance operation {operation} still not done after {attempts} wait calls")]
    WaitTimedOut { operation: String, attempts: usize },
    /// The provider returned an operation without a name, so it cannot be waited on.
    #[error("Compute API returned an operation with no name")]
    MissingOperationName,
    /// The client was configured with a base URL that cannot be joined with API paths.
    #[error("Invalid compute API base URL: {0:?}")]
    InvalidBaseUrl(String),
    /// The client builder was not given a required setting.
    #[error("Compute client is missing required configuration: {0}")]
    Misconfigured(&'static str),
}

impl IntoResponse for ComputeError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
