//! Compute HTTP mock endpoint creation utilities.
//!
//! This module provides methods for creating mock HTTP endpoints that simulate
//! compute API responses. These endpoints are registered with the mockito server
//! and can verify they were called the expected number of times.

use gungnir::server::compute::model::Operation;
use mockito::Mock;

use crate::{
    constant::{TEST_OPERATION_NAME, TEST_PROJECT, TEST_ZONE},
    fixtures::compute::ComputeFixtures,
};

impl<'a> ComputeFixtures<'a> {
    /// Create a mock HTTP endpoint for instance insertion.
    ///
    /// Sets up a mock POST endpoint at the standard test project/zone instances path
    /// that returns the specified operation as JSON. The mock verifies it was called
    /// exactly `expected_requests` times.
    ///
    /// # Arguments
    /// - `operation` - Operation object to return from the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint that will be automatically verified
    pub fn create_insert_endpoint(
        &mut self,
        operation: &Operation,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/projects/{}/zones/{}/instances", TEST_PROJECT, TEST_ZONE);

        self.setup
            .server
            .mock("POST", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(operation).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for instance deletion.
    ///
    /// Sets up a mock DELETE endpoint at the standard test project/zone path for the
    /// given instance that returns the specified operation as JSON. The mock verifies
    /// it was called exactly `expected_requests` times.
    ///
    /// # Arguments
    /// - `instance` - The instance name for the endpoint path
    /// - `operation` - Operation object to return from the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint that will be automatically verified
    pub fn create_delete_endpoint(
        &mut self,
        instance: &str,
        operation: &Operation,
        expected_requests: usize,
    ) -> Mock {
        let url = format!(
            "/projects/{}/zones/{}/instances/{}",
            TEST_PROJECT, TEST_ZONE, instance
        );

        self.setup
            .server
            .mock("DELETE", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(operation).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for the operation wait call.
    ///
    /// Sets up a mock POST endpoint at the standard test operation's wait path that
    /// returns the specified operation as JSON. The mock verifies it was called exactly
    /// `expected_requests` times.
    ///
    /// # Arguments
    /// - `operation` - Operation object to return from the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint that will be automatically verified
    pub fn create_wait_endpoint(
        &mut self,
        operation: &Operation,
        expected_requests: usize,
    ) -> Mock {
        let url = format!(
            "/projects/{}/zones/{}/operations/{}/wait",
            TEST_PROJECT, TEST_ZONE, TEST_OPERATION_NAME
        );

        self.setup
            .server
            .mock("POST", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(operation).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock insert endpoint that returns an error status code.
    ///
    /// Sets up a mock POST endpoint at the standard test project/zone instances path
    /// that returns the specified error status code. Useful for testing provider
    /// rejection handling.
    ///
    /// # Arguments
    /// - `status_code` - HTTP status code to return (e.g., 500, 503, 403)
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint that will be automatically verified
    pub fn create_insert_endpoint_error(
        &mut self,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/projects/{}/zones/{}/instances", TEST_PROJECT, TEST_ZONE);

        self.setup
            .server
            .mock("POST", url.as_str())
            .with_status(status_code)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock delete endpoint that returns an error status code.
    ///
    /// Sets up a mock DELETE endpoint at the standard test project/zone path for the
    /// given instance that returns the specified error status code.
    ///
    /// # Arguments
    /// - `instance` - The instance name for the endpoint path
    /// - `status_code` - HTTP status code to return (e.g., 500, 503, 404)
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint that will be automatically verified
    pub fn create_delete_endpoint_error(
        &mut self,
        instance: &str,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!(
            "/projects/{}/zones/{}/instances/{}",
            TEST_PROJECT, TEST_ZONE, instance
        );

        self.setup
            .server
            .mock("DELETE", url.as_str())
            .with_status(status_code)
            .expect(expected_requests)
            .create()
    }
}
