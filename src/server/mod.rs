//! Server application core modules.
//!
//! This module contains all server-side functionality for the Gungnir application, including
//! HTTP routing, configuration, template rendering, and the cloud compute API client. It
//! provides the complete pipeline for turning a launch/kill request into a provider
//! instance operation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod compute;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
