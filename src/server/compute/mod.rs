//! Cloud compute instance API client.
//!
//! This module provides the typed request/response models for the provider's instance
//! API and a thin reqwest-backed client for the three calls Gungnir makes: instance
//! insert, instance delete, and the zonal operation wait that blocks until the provider
//! reports an operation finished.

pub mod client;
pub mod model;

pub use client::ComputeClient;
