//! Utility functions and helpers for server operations.
//!
//! This module provides reusable utility functions for common server tasks, currently
//! the request template renderer used to build provider request bodies from launch and
//! kill request data.

pub mod template;
