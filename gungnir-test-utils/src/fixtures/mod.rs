//! Test fixture modules for HTTP mock creation.
//!
//! This module contains fixture utilities for creating mock compute API endpoints
//! during test execution:
//!
//! - `compute` - instance insert/delete and operation wait endpoints, plus operation
//!   data factories

pub mod compute;
