//! Driving port for Art Pulse session maintenance.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    ArtPulseSession, Error, SESSION_DURATION_MINUTES, SESSION_START_HOUR, SessionStatus,
};

/// Serialisable session payload for driving ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtPulseSessionPayload {
    /// Session identifier.
    pub id: Uuid,
    /// Challenge this session belongs to.
    pub daily_challenge_id: Uuid,
    /// Window open time.
    pub start_time: DateTime<Utc>,
    /// Window close time.
    pub end_time: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: SessionStatus,
}

impl From<ArtPulseSession> for ArtPulseSessionPayload {
    fn from(value: ArtPulseSession) -> Self {
        Self {
            id: value.id,
            daily_challenge_id: value.daily_challenge_id,
            start_time: value.start_time,
            end_time: value.end_time,
            status: value.status,
        }
    }
}

/// Result of the idempotent daily session initialiser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySessionOutcome {
    /// The session for today's challenge, new or pre-existing.
    pub session: ArtPulseSessionPayload,
    /// Whether this invocation created the session.
    pub created: bool,
}

/// Transition counts from one status sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSweepReport {
    /// Sessions moved `scheduled → active`.
    pub activated: u64,
    /// Sessions moved to `completed`.
    pub completed: u64,
}

/// Port exposed to inbound adapters and schedulers for session maintenance.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtPulseCommand: Send + Sync {
    /// Ensure today's session exists, creating it when absent.
    async fn create_daily_session(&self) -> Result<DailySessionOutcome, Error>;

    /// Apply the two conditional status transitions against the clock.
    async fn sweep_session_statuses(&self) -> Result<TransitionSweepReport, Error>;
}

/// Fixture implementation for wiring tests and doc examples.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureArtPulseCommand;

#[async_trait]
impl ArtPulseCommand for FixtureArtPulseCommand {
    async fn create_daily_session(&self) -> Result<DailySessionOutcome, Error> {
        let start_time = Utc::now()
            .date_naive()
            .and_hms_opt(SESSION_START_HOUR, 0, 0)
            .ok_or_else(|| Error::internal("fixture session window is unrepresentable"))?
            .and_utc();
        Ok(DailySessionOutcome {
            session: ArtPulseSessionPayload {
                id: Uuid::new_v4(),
                daily_challenge_id: Uuid::new_v4(),
                start_time,
                end_time: start_time + Duration::minutes(SESSION_DURATION_MINUTES),
                status: SessionStatus::Scheduled,
            },
            created: true,
        })
    }

    async fn sweep_session_statuses(&self) -> Result<TransitionSweepReport, Error> {
        Ok(TransitionSweepReport {
            activated: 0,
            completed: 0,
        })
    }
}
