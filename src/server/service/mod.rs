//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that coordinates the launch/kill pipeline:
//! fetching the configured template, rendering it with request data, parsing the result
//! into a provider request, and driving the compute API call through to operation
//! completion.

pub mod instance;
