use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

use crate::{
    model::api::{ErrorDto, VmActionDto},
    server::{error::Error, model::app::AppState, service::instance::InstanceService},
};

pub static VM_TAG: &str = "vm";

/// Request body accepted by the launch and kill endpoints.
///
/// Both endpoints take an arbitrary JSON object; its top-level keys fill the
/// placeholders of the corresponding configured template.
type VmRequestBody = Result<Json<Map<String, Value>>, JsonRejection>;

/// Launch a VM instance
///
/// Renders the configured launch template with the request body, submits the resulting
/// instance-insert request to the compute API, and waits for the create operation to
/// complete before responding.
#[utoipa::path(
    post,
    path = "/api/vm/launch",
    tag = VM_TAG,
    responses(
        (status = 200, description = "Instance created", body = VmActionDto),
        (status = 400, description = "Request body is not a JSON object or is missing the application/json content type", body = ErrorDto),
        (status = 500, description = "Template rendering, request parsing, or the provider operation failed", body = ErrorDto)
    ),
)]
pub async fn launch_vm(
    State(state): State<AppState>,
    body: VmRequestBody,
) -> Result<impl IntoResponse, Error> {
    let data = match reject_bad_body(body, "launch") {
        Ok(data) => data,
        Err(response) => return Ok(response),
    };

    let instance_service = InstanceService::new(&state.compute, &state.config);

    instance_service.launch(&data).await?;

    Ok((
        StatusCode::OK,
        Json(VmActionDto {
            status: "created".to_string(),
        }),
    )
        .into_response())
}

/// Kill a VM instance
///
/// Renders the configured kill template with the request body, submits the resulting
/// instance-delete request to the compute API, and waits for the delete operation to
/// complete before responding.
#[utoipa::path(
    post,
    path = "/api/vm/kill",
    tag = VM_TAG,
    responses(
        (status = 200, description = "Instance deleted", body = VmActionDto),
        (status = 400, description = "Request body is not a JSON object or is missing the application/json content type", body = ErrorDto),
        (status = 500, description = "Template rendering, request parsing, or the provider operation failed", body = ErrorDto)
    ),
)]
pub async fn kill_vm(
    State(state): State<AppState>,
    body: VmRequestBody,
) -> Result<impl IntoResponse, Error> {
    let data = match reject_bad_body(body, "kill") {
        Ok(data) => data,
        Err(response) => return Ok(response),
    };

    let instance_service = InstanceService::new(&state.compute, &state.config);

    instance_service.kill(&data).await?;

    Ok((
        StatusCode::OK,
        Json(VmActionDto {
            status: "deleted".to_string(),
        }),
    )
        .into_response())
}

/// Unwraps an extracted request body, mapping any rejection to a 400 response.
///
/// Axum distinguishes missing content types from malformed bodies; both are client
/// errors here and both answer 400 with the rejection's description, matching the
/// blanket bad-request handling of the endpoints' contract.
fn reject_bad_body(
    body: VmRequestBody,
    endpoint: &str,
) -> Result<Map<String, Value>, axum::response::Response> {
    match body {
        Ok(Json(data)) => Ok(data),
        Err(rejection) => {
            tracing::warn!("Rejected {} request body: {}", endpoint, rejection);

            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: rejection.body_text(),
                }),
            )
                .into_response())
        }
    }
}
