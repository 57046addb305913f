//! Typed models for the provider's compute instance API.
//!
//! Field names follow the provider's camelCase JSON convention. Only the fields Gungnir
//! reads or writes are modeled; unknown fields in provider responses are ignored on
//! deserialization, and rendered templates may carry any subset of the optional instance
//! fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Request to create an instance in a project and zone.
///
/// This is the shape the rendered launch template must parse into.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertInstanceRequest {
    /// Project to create the instance in
    pub project: String,
    /// Zone to create the instance in, e.g. `us-central1-a`
    pub zone: String,
    /// The instance resource to create
    pub instance_resource: Instance,
}

/// Request to delete an instance from a project and zone.
///
/// This is the shape the rendered kill template must parse into.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteInstanceRequest {
    /// Project the instance lives in
    pub project: String,
    /// Zone the instance lives in
    pub zone: String,
    /// Name of the instance to delete
    pub instance: String,
}

/// An instance resource as sent to the provider's insert endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    /// Instance name, unique within the zone
    pub name: String,
    /// Machine type, either a bare type name or a full resource URL
    pub machine_type: String,
    /// Disks to attach at creation time
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disks: Vec<AttachedDisk>,
    /// Network interfaces to attach at creation time
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_interfaces: Vec<NetworkInterface>,
    /// Labels applied to the instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
}

/// A disk attached to an instance at creation time.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttachedDisk {
    /// Whether this is the boot disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot: Option<bool>,
    /// Whether the disk is deleted with the instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<bool>,
    /// Parameters for a disk created alongside the instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initialize_params: Option<AttachedDiskInitializeParams>,
}

/// Creation parameters for a new disk attached to a new instance.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttachedDiskInitializeParams {
    /// Source image to initialize the disk from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_image: Option<String>,
    /// Disk size in GB; the provider encodes this int64 as a JSON string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<String>,
}

/// A network interface attached to an instance at creation time.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    /// Network resource the interface attaches to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Subnetwork resource the interface attaches to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnetwork: Option<String>,
}

/// A zonal operation returned by the instance insert/delete and wait endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Operation name, used to address the wait endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current status of the operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OperationStatus>,
    /// Errors encountered while processing the operation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OperationError>,
}

impl Operation {
    /// Whether the provider reports this operation as finished.
    pub fn is_done(&self) -> bool {
        self.status == Some(OperationStatus::Done)
    }
}

/// Status of a zonal operation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    /// The operation has been accepted but not started
    Pending,
    /// The operation is in progress
    Running,
    /// The operation has finished, successfully or not
    Done,
}

/// Error container embedded in a failed operation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OperationError {
    /// Individual errors encountered while processing the operation
    #[serde(default)]
    pub errors: Vec<OperationErrorDetail>,
}

/// A single error from a failed operation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OperationErrorDetail {
    /// Provider error code, e.g. `QUOTA_EXCEEDED`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable error description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
