//! Art Pulse session maintenance service.
//!
//! Owns the idempotent daily session initialiser and the periodic status
//! sweep. Both operations are stateless request-scoped computations; the
//! only shared mutable state is the session rows themselves, protected by
//! conditional writes rather than locks.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;
use uuid::Uuid;

use crate::domain::ports::{
    ArtPulseCommand, ArtPulseSessionRepository, ArtPulseSessionRepositoryError,
    DailyChallengeRepository, DailyChallengeRepositoryError, DailySessionOutcome,
    TransitionSweepReport,
};
use crate::domain::{ArtPulseSession, Error};

fn map_challenge_error(error: DailyChallengeRepositoryError) -> Error {
    match error {
        DailyChallengeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("daily challenge repository unavailable: {message}"))
        }
        DailyChallengeRepositoryError::Query { message } => {
            Error::internal(format!("daily challenge repository error: {message}"))
        }
    }
}

fn map_session_error(error: ArtPulseSessionRepositoryError) -> Error {
    match error {
        ArtPulseSessionRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("session repository unavailable: {message}"))
        }
        ArtPulseSessionRepositoryError::Query { message } => {
            Error::internal(format!("session repository error: {message}"))
        }
        ArtPulseSessionRepositoryError::Conflict { challenge_id } => Error::conflict(format!(
            "a session already exists for challenge {challenge_id}"
        )),
    }
}

/// Service implementing the Art Pulse driving port.
#[derive(Clone)]
pub struct ArtPulseService<C, S> {
    challenge_repo: Arc<C>,
    session_repo: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<C, S> ArtPulseService<C, S> {
    /// Create a new service over the challenge and session repositories.
    pub fn new(challenge_repo: Arc<C>, session_repo: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            challenge_repo,
            session_repo,
            clock,
        }
    }
}

#[async_trait]
impl<C, S> ArtPulseCommand for ArtPulseService<C, S>
where
    C: DailyChallengeRepository,
    S: ArtPulseSessionRepository,
{
    async fn create_daily_session(&self) -> Result<DailySessionOutcome, Error> {
        // One canonical day boundary for the whole service, not a
        // per-caller timezone.
        let today = self.clock.utc().date_naive();

        let challenge = self
            .challenge_repo
            .find_by_date(today)
            .await
            .map_err(map_challenge_error)?
            .ok_or_else(|| Error::not_found("no daily challenge scheduled for today"))?;

        if let Some(existing) = self
            .session_repo
            .find_by_challenge_id(challenge.id)
            .await
            .map_err(map_session_error)?
        {
            return Ok(DailySessionOutcome {
                session: existing.into(),
                created: false,
            });
        }

        let session = ArtPulseSession::scheduled_for(Uuid::new_v4(), challenge.id, today)
            .ok_or_else(|| Error::internal("session window start is unrepresentable"))?;

        match self.session_repo.insert(&session).await {
            Ok(()) => {
                info!(session_id = %session.id, challenge_id = %challenge.id, "created daily art pulse session");
                Ok(DailySessionOutcome {
                    session: session.into(),
                    created: true,
                })
            }
            // A concurrent initialiser won the insert race; the store's
            // uniqueness constraint is the idempotence signal, so fetch the
            // winner and report it as pre-existing.
            Err(ArtPulseSessionRepositoryError::Conflict { .. }) => {
                let existing = self
                    .session_repo
                    .find_by_challenge_id(challenge.id)
                    .await
                    .map_err(map_session_error)?
                    .ok_or_else(|| {
                        Error::service_unavailable(
                            "session conflict reported but no existing session was found",
                        )
                    })?;
                Ok(DailySessionOutcome {
                    session: existing.into(),
                    created: false,
                })
            }
            Err(error) => Err(map_session_error(error)),
        }
    }

    async fn sweep_session_statuses(&self) -> Result<TransitionSweepReport, Error> {
        let now = self.clock.utc();

        // Activation runs strictly before completion; a window that has
        // fully elapsed between sweeps therefore jumps scheduled →
        // completed in this single invocation.
        let activated = self
            .session_repo
            .activate_due(now)
            .await
            .map_err(map_session_error)?;
        let completed = self
            .session_repo
            .complete_elapsed(now)
            .await
            .map_err(map_session_error)?;

        info!(activated, completed, "art pulse status sweep applied");
        Ok(TransitionSweepReport {
            activated,
            completed,
        })
    }
}

#[cfg(test)]
#[path = "art_pulse_service_tests.rs"]
mod tests;
