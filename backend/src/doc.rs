//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (compatibility,
//!   art pulse, health)
//! - **Schemas**: Request/response bodies plus the domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::art_pulse::{
    ArtPulseSessionBody, DailySessionResponseBody, TransitionSweepResponseBody,
};
use crate::inbound::http::compatibility::{
    CalculateCompatibilityRequestBody, CompatibilityResponseBody, DimensionScoresBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SAYU backend API",
        description = "HTTP interface for compatibility scoring, Art Pulse session maintenance, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::compatibility::calculate_compatibility,
        crate::inbound::http::art_pulse::create_daily_session,
        crate::inbound::http::art_pulse::sweep_session_statuses,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CalculateCompatibilityRequestBody,
        CompatibilityResponseBody,
        DimensionScoresBody,
        ArtPulseSessionBody,
        DailySessionResponseBody,
        TransitionSweepResponseBody,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "compatibility", description = "Aesthetic compatibility scoring"),
        (name = "art-pulse", description = "Daily Art Pulse session lifecycle"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
