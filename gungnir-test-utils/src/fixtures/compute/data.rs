//! Operation data factories for compute API mocks.
//!
//! This module builds the [`Operation`] values returned by mock insert/delete and wait
//! endpoints, with standard test values from [`crate::constant`].

use gungnir::server::compute::model::{
    Operation, OperationError, OperationErrorDetail, OperationStatus,
};

use crate::constant::TEST_OPERATION_NAME;

/// A freshly-accepted operation, as the insert/delete endpoints return it.
pub fn running_operation() -> Operation {
    Operation {
        name: Some(TEST_OPERATION_NAME.to_string()),
        status: Some(OperationStatus::Running),
        error: None,
    }
}

/// A successfully finished operation, as the wait endpoint returns it.
pub fn done_operation() -> Operation {
    Operation {
        name: Some(TEST_OPERATION_NAME.to_string()),
        status: Some(OperationStatus::Done),
        error: None,
    }
}

/// A finished operation carrying a provider error.
pub fn failed_operation(code: &str, message: &str) -> Operation {
    Operation {
        name: Some(TEST_OPERATION_NAME.to_string()),
        status: Some(OperationStatus::Done),
        error: Some(OperationError {
            errors: vec![OperationErrorDetail {
                code: Some(code.to_string()),
                message: Some(message.to_string()),
            }],
        }),
    }
}

/// An operation missing its name, which cannot be waited on.
pub fn nameless_operation() -> Operation {
    Operation {
        name: None,
        status: Some(OperationStatus::Running),
        error: None,
    }
}
