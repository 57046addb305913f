use gungnir::server::{config::Config, model::app::AppState, startup};
use mockito::{Mock, Server, ServerGuard};

use crate::{
    constant::{TEST_COMPUTE_API_TOKEN, TEST_KILL_TEMPLATE, TEST_LAUNCH_TEMPLATE},
    error::TestError,
};

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: AppState,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    /// Create a test setup with the standard test templates.
    ///
    /// Starts a mockito server, points the compute client at it, and builds application
    /// state around the standard launch/kill templates from [`crate::constant`].
    pub async fn new() -> Result<Self, TestError> {
        Self::with_templates(TEST_LAUNCH_TEMPLATE, TEST_KILL_TEMPLATE).await
    }

    /// Create a test setup with custom launch and kill templates.
    ///
    /// Used by tests that need a broken or unusual template, e.g. one referencing keys
    /// the request body will not carry.
    pub async fn with_templates(launch: &str, kill: &str) -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let config = Config {
            vm_req_template: launch.to_string(),
            vm_kill_template: kill.to_string(),
            compute_api_url: mock_server.url(),
            compute_api_token: TEST_COMPUTE_API_TOKEN.to_string(),
            listen_addr: "127.0.0.1:0".parse().unwrap(),
        };

        let compute = startup::build_compute_client(&config)?;

        Ok(TestSetup {
            server: mock_server,
            state: AppState::new(compute, config),
            mocks: Vec::new(),
        })
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on all mocks registered through the fixtures to verify they
    /// were invoked the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
