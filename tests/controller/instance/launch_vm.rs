//! Tests for the VM launch controller endpoint.
//!
//! This module verifies the launch handler end to end against mock provider endpoints:
//! successful creation, template failures, and provider-side failures.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use gungnir::server::controller::instance::launch_vm;
use gungnir_test_utils::prelude::*;

use crate::controller::instance::vm_request_body;

/// Tests a successful launch.
///
/// Verifies that a valid request body renders the launch template, posts the instance
/// to the provider, waits for the operation, and answers 200.
///
/// Expected: 200 OK, both provider endpoints called once
#[tokio::test]
async fn creates_instance_and_returns_200() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let insert = test
        .compute()
        .create_insert_endpoint(&data::running_operation(), 1);
    let wait = test.compute().create_wait_endpoint(&data::done_operation(), 1);
    test.mocks.extend([insert, wait]);

    let result = launch_vm(State(test.state.clone()), Ok(Json(vm_request_body()))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    test.assert_mocks();

    Ok(())
}

/// Tests a launch whose request body misses a template key.
///
/// Verifies that a body lacking a key the launch template references fails the render
/// and answers 500 without calling the provider.
///
/// Expected: 500 Internal Server Error, no provider calls
#[tokio::test]
async fn returns_500_when_template_key_missing() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let insert = test
        .compute()
        .create_insert_endpoint(&data::running_operation(), 0);
    test.mocks.push(insert);

    let mut body = vm_request_body();
    body.remove("machine_type");

    let result = launch_vm(State(test.state.clone()), Ok(Json(body))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    test.assert_mocks();

    Ok(())
}

/// Tests a launch the provider rejects.
///
/// Verifies that a non-success status from the provider's insert endpoint answers 500.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn returns_500_when_provider_rejects_insert() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let insert = test.compute().create_insert_endpoint_error(403, 1);
    test.mocks.push(insert);

    let result = launch_vm(State(test.state.clone()), Ok(Json(vm_request_body()))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    test.assert_mocks();

    Ok(())
}

/// Tests a launch whose create operation fails at the provider.
///
/// Verifies that an operation finishing with an embedded error answers 500.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn returns_500_when_operation_fails() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let insert = test
        .compute()
        .create_insert_endpoint(&data::running_operation(), 1);
    let wait = test.compute().create_wait_endpoint(
        &data::failed_operation("QUOTA_EXCEEDED", "Quota CPUS exceeded"),
        1,
    );
    test.mocks.extend([insert, wait]);

    let result = launch_vm(State(test.state.clone()), Ok(Json(vm_request_body()))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    test.assert_mocks();

    Ok(())
}
