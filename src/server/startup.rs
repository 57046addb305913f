use tokio::net::TcpListener;

use crate::server::{compute::ComputeClient, config::Config, error::Error};

/// Build and configure the compute API client from the provided configuration
pub fn build_compute_client(config: &Config) -> Result<ComputeClient, Error> {
    let compute = ComputeClient::builder()
        .base_url(&config.compute_api_url)
        .token(&config.compute_api_token)
        .build()?;

    Ok(compute)
}

/// Bind the TCP listener for the HTTP server
pub async fn bind_listener(config: &Config) -> Result<TcpListener, std::io::Error> {
    TcpListener::bind(config.listen_addr).await
}
