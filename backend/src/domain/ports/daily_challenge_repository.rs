//! Port for reading the date-keyed daily challenge.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::DailyChallenge;

/// Errors raised by daily challenge repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DailyChallengeRepositoryError {
    /// Repository connection could not be established.
    #[error("daily challenge repository connection failed: {message}")]
    Connection {
        /// Adapter-level failure description.
        message: String,
    },
    /// Query failed during execution.
    #[error("daily challenge repository query failed: {message}")]
    Query {
        /// Adapter-level failure description.
        message: String,
    },
}

impl DailyChallengeRepositoryError {
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
}

/// Read-only port over the challenge subsystem's store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DailyChallengeRepository: Send + Sync {
    /// Find the challenge featured on the exact date, if any.
    async fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<DailyChallenge>, DailyChallengeRepositoryError>;
}
