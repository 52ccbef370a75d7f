//! Port for reading aesthetic user profiles.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{UserId, UserProfile};

/// Errors raised by profile repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileRepositoryError {
    /// Repository connection could not be established.
    #[error("profile repository connection failed: {message}")]
    Connection {
        /// Adapter-level failure description.
        message: String,
    },
    /// Query failed during execution.
    #[error("profile repository query failed: {message}")]
    Query {
        /// Adapter-level failure description.
        message: String,
    },
}

impl ProfileRepositoryError {
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

/// Port for resolving user identifiers into stored profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch the profiles for the given identifiers.
    ///
    /// Returns at most one profile per identifier; absent users simply do
    /// not appear in the result, so callers must check the length.
    async fn find_by_ids(
        &self,
        ids: [UserId; 2],
    ) -> Result<Vec<UserProfile>, ProfileRepositoryError>;
}
