use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug, PartialEq)]
pub enum TemplateError {
    // A placeholder naming a key absent from the request body fails the
    // whole request rather than rendering an empty value into the provider
    // request body.
    #[error("Template references key {0:?} which is not present in the request body")]
    MissingKey(String),
    #[error("Template uses unknown filter {0:?}, expected \"upper\" or \"lower\"")]
    UnknownFilter(String),
    #[error("Template placeholder opened at byte {0} is never closed")]
    UnclosedPlaceholder(usize),
    #[error("Template placeholder at byte {0} has an empty key")]
    EmptyKey(usize),
}

impl IntoResponse for TemplateError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
