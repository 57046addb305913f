use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Default provider endpoint for the compute instance API.
pub const DEFAULT_COMPUTE_API_URL: &str = "https://compute.googleapis.com/compute/v1";

/// Default address the HTTP server listens on.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub vm_req_template: String,
    pub vm_kill_template: String,
    pub compute_api_url: String,
    pub compute_api_token: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = optional_var("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());
        let listen_addr = listen_addr
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: format!("not a valid socket address: {listen_addr:?}"),
            })?;

        Ok(Self {
            vm_req_template: required_var("VM_REQ_TEMPLATE")?,
            vm_kill_template: required_var("VM_KILL_TEMPLATE")?,
            compute_api_url: optional_var("COMPUTE_API_URL")
                .unwrap_or_else(|| DEFAULT_COMPUTE_API_URL.into()),
            compute_api_token: required_var("COMPUTE_API_TOKEN")?,
            listen_addr,
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_var(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.is_empty())
}
