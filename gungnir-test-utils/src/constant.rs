//! Test configuration constants for compute client and template setup.
//!
//! This module defines standard constant values used across all tests for configuring
//! the compute client and the launch/kill templates. These values are not real
//! credentials but placeholder values for testing purposes.

/// Mock bearer token for test compute API requests.
///
/// Placeholder token used when creating test compute clients. Not a real credential.
pub static TEST_COMPUTE_API_TOKEN: &str = "compute_api_token";

/// Project used in the test templates and mock endpoint paths.
pub static TEST_PROJECT: &str = "gungnir-test";

/// Zone used in the test templates and mock endpoint paths.
pub static TEST_ZONE: &str = "us-central1-a";

/// Instance name produced by rendering the test templates with [`TEST_ZONE`] data.
pub static TEST_INSTANCE_NAME: &str = "worker-1";

/// Operation name used for mock insert/delete responses and wait endpoint paths.
pub static TEST_OPERATION_NAME: &str = "operation-123";

/// Launch template wired into the test configuration.
///
/// Fills project and zone into an instance-insert request and lowercases the requested
/// instance name, exercising both plain substitution and the `lower` filter.
pub static TEST_LAUNCH_TEMPLATE: &str = r#"{
    "project": "gungnir-test",
    "zone": "{{zone}}",
    "instanceResource": {
        "name": "{{name | lower}}",
        "machineType": "zones/{{zone}}/machineTypes/{{machine_type}}"
    }
}"#;

/// Kill template wired into the test configuration.
pub static TEST_KILL_TEMPLATE: &str = r#"{
    "project": "gungnir-test",
    "zone": "{{zone}}",
    "instance": "{{name | lower}}"
}"#;
