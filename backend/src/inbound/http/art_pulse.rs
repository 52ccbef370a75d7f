//! Art Pulse session maintenance HTTP handlers.
//!
//! ```text
//! POST /api/v1/art-pulse/sessions
//! POST /api/v1/art-pulse/sessions/transitions
//! ```
//!
//! Both endpoints take no request body: creation is keyed off the server
//! clock's current day, and the transition sweep is meant to be triggered
//! periodically by an external scheduler.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{ArtPulseSessionPayload, DailySessionOutcome, TransitionSweepReport};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Session representation in responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtPulseSessionBody {
    /// Session identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Challenge this session belongs to.
    #[schema(format = "uuid")]
    pub daily_challenge_id: String,
    /// Window open time.
    #[schema(format = "date-time")]
    pub start_time: String,
    /// Window close time.
    #[schema(format = "date-time")]
    pub end_time: String,
    /// Current lifecycle status.
    pub status: String,
}

impl From<ArtPulseSessionPayload> for ArtPulseSessionBody {
    fn from(value: ArtPulseSessionPayload) -> Self {
        Self {
            id: value.id.to_string(),
            daily_challenge_id: value.daily_challenge_id.to_string(),
            start_time: value.start_time.to_rfc3339(),
            end_time: value.end_time.to_rfc3339(),
            status: value.status.to_string(),
        }
    }
}

/// Response payload for the daily session initialiser.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailySessionResponseBody {
    /// The session for today's challenge.
    pub session: ArtPulseSessionBody,
    /// Whether this invocation created the session.
    pub created: bool,
    /// Human-readable outcome description.
    pub message: String,
}

impl From<DailySessionOutcome> for DailySessionResponseBody {
    fn from(value: DailySessionOutcome) -> Self {
        let message = if value.created {
            "created today's art pulse session".to_owned()
        } else {
            "today's art pulse session already exists".to_owned()
        };
        Self {
            session: value.session.into(),
            created: value.created,
            message,
        }
    }
}

/// Response payload for one transition sweep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSweepResponseBody {
    /// Sessions moved `scheduled → active`.
    pub activated: u64,
    /// Sessions moved to `completed`.
    pub completed: u64,
}

impl From<TransitionSweepReport> for TransitionSweepResponseBody {
    fn from(value: TransitionSweepReport) -> Self {
        Self {
            activated: value.activated,
            completed: value.completed,
        }
    }
}

/// Ensure today's Art Pulse session exists.
#[utoipa::path(
    post,
    path = "/api/v1/art-pulse/sessions",
    responses(
        (status = 200, description = "Session created or already present", body = DailySessionResponseBody),
        (status = 404, description = "No challenge scheduled for today", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["art-pulse"],
    operation_id = "createDailySession"
)]
#[post("/art-pulse/sessions")]
pub async fn create_daily_session(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<DailySessionResponseBody>> {
    let outcome = state.art_pulse.create_daily_session().await?;
    Ok(web::Json(DailySessionResponseBody::from(outcome)))
}

/// Apply the time-driven status transitions.
#[utoipa::path(
    post,
    path = "/api/v1/art-pulse/sessions/transitions",
    responses(
        (status = 200, description = "Sweep applied", body = TransitionSweepResponseBody),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["art-pulse"],
    operation_id = "sweepSessionStatuses"
)]
#[post("/art-pulse/sessions/transitions")]
pub async fn sweep_session_statuses(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<TransitionSweepResponseBody>> {
    let report = state.art_pulse.sweep_session_statuses().await?;
    Ok(web::Json(TransitionSweepResponseBody::from(report)))
}

#[cfg(test)]
#[path = "art_pulse_tests.rs"]
mod tests;
