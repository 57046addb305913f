use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a VM launch or kill request completes successfully
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct VmActionDto {
    /// What happened to the instance, `"created"` or `"deleted"`
    pub status: String,
}
