//! Tests for ComputeClient.

mod wait_for_operation;
