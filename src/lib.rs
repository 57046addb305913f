//! Gungnir: a VM provisioning bridge.
//!
//! Gungnir exposes two HTTP endpoints that launch and kill virtual machine
//! instances at a cloud provider. Each request body is merged into an
//! environment-configured JSON template, the rendered result is parsed into
//! a typed compute API request, and the provider's instance API is invoked
//! with a blocking wait on the resulting operation.

pub mod model;
pub mod server;
