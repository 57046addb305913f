//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Constructs an Axum router with the VM launch and kill endpoints registered. Each
/// endpoint is annotated with OpenAPI specifications via utoipa, which are collected
/// into a unified OpenAPI document. The router includes Swagger UI at `/api/docs` for
/// interactive API exploration and testing.
///
/// # Registered Endpoints
/// - `POST /api/vm/launch` - Launch a VM instance from the launch template
/// - `POST /api/vm/kill` - Kill a VM instance named by the kill template
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be served once
/// application state is attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Gungnir", description = "Gungnir API"), tags(
        (name = controller::instance::VM_TAG, description = "VM instance API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::instance::launch_vm))
        .routes(routes!(controller::instance::kill_vm))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
