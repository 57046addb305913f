use std::sync::Arc;

use crate::server::{compute::ComputeClient, config::Config};

#[derive(Clone)]
pub struct AppState {
    pub compute: ComputeClient,
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates the shared application state from startup products
    pub fn new(compute: ComputeClient, config: Config) -> Self {
        Self {
            compute,
            config: Arc::new(config),
        }
    }
}
