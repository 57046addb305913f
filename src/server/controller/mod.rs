//! HTTP controller endpoints for the Gungnir web API.
//!
//! This module contains Axum handlers for launching and killing VM instances.
//! Controllers handle HTTP requests, validate request bodies, delegate to the instance
//! service, and return appropriate HTTP responses. They use utoipa for OpenAPI
//! documentation.

pub mod instance;
