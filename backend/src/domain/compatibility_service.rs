//! Compatibility scoring service.
//!
//! Resolves two user identifiers into stored profiles, runs the pure scoring
//! functions, and upserts the result. Persistence is best-effort: the caller
//! still receives the computed report when the write fails, because the
//! computation is deterministic and safely re-runnable.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::warn;

use crate::domain::compatibility::{
    CompatibilityScore, UserPair, complementary_traits, overall_score, score_dimensions,
    shared_interests,
};
use crate::domain::ports::{
    CalculateCompatibilityRequest, CompatibilityCommand, CompatibilityReport,
    CompatibilityScoreRepository, CompatibilityScoreRepositoryError, ProfileRepository,
    ProfileRepositoryError,
};
use crate::domain::{Error, PersonalityCode, UserProfile};

fn map_profile_error(error: ProfileRepositoryError) -> Error {
    match error {
        ProfileRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("profile repository unavailable: {message}"))
        }
        ProfileRepositoryError::Query { message } => {
            Error::internal(format!("profile repository error: {message}"))
        }
    }
}

/// Service implementing the compatibility driving port.
#[derive(Clone)]
pub struct CompatibilityService<P, S> {
    profile_repo: Arc<P>,
    score_repo: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<P, S> CompatibilityService<P, S> {
    /// Create a new service over the profile and score repositories.
    pub fn new(profile_repo: Arc<P>, score_repo: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            profile_repo,
            score_repo,
            clock,
        }
    }
}

fn personality_code_of(profile: &UserProfile) -> Result<PersonalityCode, Error> {
    profile.personality_code.ok_or_else(|| {
        Error::not_found(format!(
            "personality profile not found for user {}",
            profile.user_id
        ))
    })
}

#[async_trait]
impl<P, S> CompatibilityCommand for CompatibilityService<P, S>
where
    P: ProfileRepository,
    S: CompatibilityScoreRepository,
{
    async fn calculate(
        &self,
        request: CalculateCompatibilityRequest,
    ) -> Result<CompatibilityReport, Error> {
        let profiles = self
            .profile_repo
            .find_by_ids([request.user1_id, request.user2_id])
            .await
            .map_err(map_profile_error)?;

        // Covers both "user does not exist" and "user never took the quiz";
        // a pair of equal identifiers resolves to a single row and lands
        // here as well.
        let [first, second]: [UserProfile; 2] = profiles
            .try_into()
            .map_err(|_| Error::not_found("user profiles not found for both participants"))?;

        let first_code = personality_code_of(&first)?;
        let second_code = personality_code_of(&second)?;

        let first_traits = first_code.traits();
        let second_traits = second_code.traits();

        let dimensions = score_dimensions(&first_traits, &second_traits);
        let report = CompatibilityReport {
            overall: overall_score(dimensions),
            dimensions,
            shared_interests: shared_interests(
                first.quiz_responses.as_ref(),
                second.quiz_responses.as_ref(),
            ),
            complementary_traits: complementary_traits(&first_traits, &second_traits),
        };

        let pair = UserPair::new(first.user_id, second.user_id);
        let (pair_first_code, pair_second_code) = if pair.first() == first.user_id {
            (first_code, second_code)
        } else {
            (second_code, first_code)
        };
        let score = CompatibilityScore {
            pair,
            first_code: pair_first_code,
            second_code: pair_second_code,
            overall: report.overall,
            dimensions: report.dimensions,
            shared_interests: report.shared_interests.clone(),
            complementary_traits: report.complementary_traits.clone(),
            calculated_at: self.clock.utc(),
        };

        if let Err(error) = self.score_repo.upsert(&score).await {
            log_persistence_failure(&error);
        }

        Ok(report)
    }
}

fn log_persistence_failure(error: &CompatibilityScoreRepositoryError) {
    warn!(%error, "compatibility score persistence failed; returning computed result");
}

#[cfg(test)]
#[path = "compatibility_service_tests.rs"]
mod tests;
