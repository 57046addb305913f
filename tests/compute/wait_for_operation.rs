//! Tests for ComputeClient::wait_for_operation.

use std::time::Duration;

use gungnir::server::{compute::ComputeClient, error::compute::ComputeError};
use gungnir_test_utils::prelude::*;

/// Tests waiting on an operation the provider never reports as done.
///
/// The wait endpoint answers immediately with a still-running operation every time.
/// The client must stop after its attempt limit instead of re-issuing the call
/// indefinitely; the mock's expected call count pins the number of calls to exactly
/// that limit.
///
/// Expected: Err(ComputeError::WaitTimedOut), wait endpoint called limit times
#[tokio::test]
async fn gives_up_when_operation_never_finishes() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let wait = test
        .compute()
        .create_wait_endpoint(&data::running_operation(), 3);
    test.mocks.push(wait);

    let compute = ComputeClient::builder()
        .base_url(&test.server.url())
        .token(TEST_COMPUTE_API_TOKEN)
        .wait_retry_delay(Duration::ZERO)
        .wait_attempt_limit(3)
        .build()?;

    let result = compute
        .wait_for_operation(TEST_PROJECT, TEST_ZONE, &data::running_operation())
        .await;

    assert!(matches!(
        result,
        Err(ComputeError::WaitTimedOut { attempts: 3, .. })
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests that a wait answered with a done operation returns before the attempt limit.
///
/// Expected: Ok, wait endpoint called once
#[tokio::test]
async fn returns_once_operation_is_done() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let wait = test.compute().create_wait_endpoint(&data::done_operation(), 1);
    test.mocks.push(wait);

    let compute = ComputeClient::builder()
        .base_url(&test.server.url())
        .token(TEST_COMPUTE_API_TOKEN)
        .wait_retry_delay(Duration::ZERO)
        .wait_attempt_limit(3)
        .build()?;

    let result = compute
        .wait_for_operation(TEST_PROJECT, TEST_ZONE, &data::running_operation())
        .await;

    assert!(result.is_ok());

    test.assert_mocks();

    Ok(())
}
