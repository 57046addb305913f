//! Tests for InstanceService::launch.
//!
//! This module verifies the launch pipeline: template rendering, parsing into an
//! instance-insert request, the provider insert call, and the operation wait. Provider
//! behavior is simulated with mock endpoints.

use gungnir::server::{
    error::{compute::ComputeError, template::TemplateError, Error},
    service::instance::InstanceService,
};
use gungnir_test_utils::prelude::*;

use crate::service::instance::vm_request_data;

/// Tests a successful launch.
///
/// Expected: Ok, insert and wait endpoints called once each
#[tokio::test]
async fn creates_instance() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let insert = test
        .compute()
        .create_insert_endpoint(&data::running_operation(), 1);
    let wait = test.compute().create_wait_endpoint(&data::done_operation(), 1);
    test.mocks.extend([insert, wait]);

    let instance_service = InstanceService::new(&test.state.compute, &test.state.config);
    let result = instance_service.launch(&vm_request_data()).await;

    assert!(result.is_ok());

    test.assert_mocks();

    Ok(())
}

/// Tests a launch whose request data misses a template key.
///
/// Verifies the strict missing-key behavior: the render fails before any provider
/// call is made.
///
/// Expected: Err(TemplateError::MissingKey)
#[tokio::test]
async fn fails_when_template_key_missing() -> Result<(), TestError> {
    let test = TestSetup::new().await?;

    let mut data = vm_request_data();
    data.remove("machine_type");

    let instance_service = InstanceService::new(&test.state.compute, &test.state.config);
    let result = instance_service.launch(&data).await;

    assert!(matches!(
        result,
        Err(Error::TemplateError(TemplateError::MissingKey(_)))
    ));

    Ok(())
}

/// Tests a launch whose rendered template is not an instance-insert request.
///
/// Verifies that a template rendering to JSON missing required provider fields is
/// surfaced as a parse error rather than sent half-empty.
///
/// Expected: Err(RequestParseError)
#[tokio::test]
async fn fails_when_render_is_not_an_insert_request() -> Result<(), TestError> {
    let test =
        TestSetup::with_templates(r#"{"project": "gungnir-test"}"#, TEST_KILL_TEMPLATE).await?;

    let instance_service = InstanceService::new(&test.state.compute, &test.state.config);
    let result = instance_service.launch(&vm_request_data()).await;

    assert!(matches!(result, Err(Error::RequestParseError(_))));

    Ok(())
}

/// Tests a launch the provider rejects outright.
///
/// Expected: Err(ComputeError::Api) carrying the provider status
#[tokio::test]
async fn fails_when_provider_rejects_insert() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let insert = test.compute().create_insert_endpoint_error(403, 1);
    test.mocks.push(insert);

    let instance_service = InstanceService::new(&test.state.compute, &test.state.config);
    let result = instance_service.launch(&vm_request_data()).await;

    assert!(matches!(
        result,
        Err(Error::ComputeError(ComputeError::Api { status: 403, .. }))
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests a launch whose create operation finishes with an error.
///
/// Expected: Err(ComputeError::OperationFailed)
#[tokio::test]
async fn fails_when_operation_reports_error() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let insert = test
        .compute()
        .create_insert_endpoint(&data::running_operation(), 1);
    let wait = test.compute().create_wait_endpoint(
        &data::failed_operation("QUOTA_EXCEEDED", "Quota CPUS exceeded"),
        1,
    );
    test.mocks.extend([insert, wait]);

    let instance_service = InstanceService::new(&test.state.compute, &test.state.config);
    let result = instance_service.launch(&vm_request_data()).await;

    assert!(matches!(
        result,
        Err(Error::ComputeError(ComputeError::OperationFailed { .. }))
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests a launch where the provider returns an operation without a name.
///
/// An unnamed operation cannot be addressed at the wait endpoint, so the launch fails
/// after the insert call.
///
/// Expected: Err(ComputeError::MissingOperationName)
#[tokio::test]
async fn fails_when_operation_has_no_name() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let insert = test
        .compute()
        .create_insert_endpoint(&data::nameless_operation(), 1);
    test.mocks.push(insert);

    let instance_service = InstanceService::new(&test.state.compute, &test.state.config);
    let result = instance_service.launch(&vm_request_data()).await;

    assert!(matches!(
        result,
        Err(Error::ComputeError(ComputeError::MissingOperationName))
    ));

    test.assert_mocks();

    Ok(())
}
