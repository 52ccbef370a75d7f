//! Compatibility scoring HTTP handler.
//!
//! ```text
//! POST /api/v1/compatibility
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CalculateCompatibilityRequest, CompatibilityReport};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_user_id};

/// Request payload naming the two users to score.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateCompatibilityRequestBody {
    /// First participant.
    #[schema(format = "uuid")]
    pub user1_id: String,
    /// Second participant.
    #[schema(format = "uuid")]
    pub user2_id: String,
}

/// Per-dimension sub-scores in the response payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScoresBody {
    /// Social axis sub-score.
    pub social: u8,
    /// Abstract axis sub-score, served under the `artistic` key.
    pub artistic: u8,
    /// Emotional axis sub-score.
    pub emotional: u8,
    /// Structured axis sub-score, served under the `structural` key.
    pub structural: u8,
}

/// Response payload for a scoring run.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResponseBody {
    /// Overall compatibility in `[0, 100]`.
    pub overall: u8,
    /// Per-dimension sub-scores.
    pub dimensions: DimensionScoresBody,
    /// Human-readable shared-interest tags.
    pub shared_interests: Vec<String>,
    /// Human-readable complementary-trait tags.
    pub complementary_traits: Vec<String>,
}

impl From<CompatibilityReport> for CompatibilityResponseBody {
    fn from(value: CompatibilityReport) -> Self {
        Self {
            overall: value.overall,
            dimensions: DimensionScoresBody {
                social: value.dimensions.social,
                artistic: value.dimensions.artistic,
                emotional: value.dimensions.emotional,
                structural: value.dimensions.structural,
            },
            shared_interests: value.shared_interests,
            complementary_traits: value.complementary_traits,
        }
    }
}

/// Score two users' aesthetic compatibility.
#[utoipa::path(
    post,
    path = "/api/v1/compatibility",
    request_body = CalculateCompatibilityRequestBody,
    responses(
        (status = 200, description = "Compatibility computed", body = CompatibilityResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Profile not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["compatibility"],
    operation_id = "calculateCompatibility"
)]
#[post("/compatibility")]
pub async fn calculate_compatibility(
    state: web::Data<HttpState>,
    payload: web::Json<CalculateCompatibilityRequestBody>,
) -> ApiResult<web::Json<CompatibilityResponseBody>> {
    let body = payload.into_inner();
    let request = CalculateCompatibilityRequest {
        user1_id: parse_user_id(&body.user1_id, FieldName::new("user1Id"))?,
        user2_id: parse_user_id(&body.user2_id, FieldName::new("user2Id"))?,
    };

    let report = state.compatibility.calculate(request).await?;
    Ok(web::Json(CompatibilityResponseBody::from(report)))
}

#[cfg(test)]
#[path = "compatibility_tests.rs"]
mod tests;
