//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{advertisements, health, visitors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Adboard API",
        version = "0.1.0",
        description = "Advertisement board and visitor counter REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Advertisements
        advertisements::active_ad,
        advertisements::submit_ad,
        // Visitors
        visitors::record_visit,
        visitors::visitor_totals,
    ),
    components(
        schemas(
            // Advertisements
            crate::models::advertisement::ActiveAd,
            crate::models::advertisement::CreateAdvertisement,
            crate::models::advertisement::AdSubmissionReceipt,
            // Visitors
            crate::models::visitor::VisitSnapshot,
            crate::models::visitor::VisitorTotals,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "advertisements", description = "Paid advertisement slot"),
        (name = "visitors", description = "Daily visit counters")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
