//! Port for persisting computed compatibility scores.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CompatibilityScore;

/// Errors raised by compatibility score repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompatibilityScoreRepositoryError {
    /// Repository connection could not be established.
    #[error("compatibility score repository connection failed: {message}")]
    Connection {
        /// Adapter-level failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("compatibility score repository query failed: {message}")]
    Query {
        /// Adapter-level failure description.
        message: String,
    },
}

impl CompatibilityScoreRepositoryError {
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

/// Port for writing scores keyed by the canonical user pair.
///
/// Writes overwrite any prior score for the pair; concurrent writers race
/// benignly because the computation is deterministic for fixed inputs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompatibilityScoreRepository: Send + Sync {
    /// Insert or overwrite the stored score for the pair.
    async fn upsert(
        &self,
        score: &CompatibilityScore,
    ) -> Result<(), CompatibilityScoreRepositoryError>;
}
