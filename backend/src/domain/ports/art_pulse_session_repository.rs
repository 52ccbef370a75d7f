//! Port for Art Pulse session persistence and bulk status sweeps.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::ArtPulseSession;

/// Errors raised by session repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtPulseSessionRepositoryError {
    /// Repository connection could not be established.
    #[error("art pulse session repository connection failed: {message}")]
    Connection {
        /// Adapter-level failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("art pulse session repository query failed: {message}")]
    Query {
        /// Adapter-level failure description.
        message: String,
    },
    /// A session already exists for the challenge.
    ///
    /// Raised by the store's uniqueness constraint on the challenge
    /// reference; callers treat it as the idempotence signal rather than
    /// relying on a preceding existence check.
    #[error("a session already exists for challenge {challenge_id}")]
    Conflict {
        /// The challenge whose session already exists.
        challenge_id: Uuid,
    },
}

impl ArtPulseSessionRepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Helper for duplicate-session conflicts.
    pub const fn conflict(challenge_id: Uuid) -> Self {
        Self::Conflict { challenge_id }
    }
}

/// Port for session writes and the two conditional status sweeps.
///
/// Both sweep operations are idempotent: re-applying the same conditional
/// update yields the same end state, so concurrent invocations are safe
/// without locking.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtPulseSessionRepository: Send + Sync {
    /// Find the session referencing the given challenge, if any.
    async fn find_by_challenge_id(
        &self,
        challenge_id: Uuid,
    ) -> Result<Option<ArtPulseSession>, ArtPulseSessionRepositoryError>;

    /// Insert a new session.
    ///
    /// Fails with [`ArtPulseSessionRepositoryError::Conflict`] when a
    /// session for the same challenge already exists.
    async fn insert(
        &self,
        session: &ArtPulseSession,
    ) -> Result<(), ArtPulseSessionRepositoryError>;

    /// Move every `scheduled` session whose window contains `now` to
    /// `active`. Returns the number of sessions transitioned.
    async fn activate_due(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, ArtPulseSessionRepositoryError>;

    /// Move every non-completed session whose window has closed by `now` to
    /// `completed`. Returns the number of sessions transitioned.
    async fn complete_elapsed(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, ArtPulseSessionRepositoryError>;
}
