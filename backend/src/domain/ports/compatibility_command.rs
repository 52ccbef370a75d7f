//! Driving port for compatibility scoring.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{DimensionScores, Error, UserId};

/// Request to score two users against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateCompatibilityRequest {
    /// First participant.
    pub user1_id: UserId,
    /// Second participant.
    pub user2_id: UserId,
}

/// Scoring result returned to callers.
///
/// The same values are persisted best-effort; callers receive this report
/// even when the write fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    /// Overall compatibility in `[0, 100]`.
    pub overall: u8,
    /// Per-dimension sub-scores.
    pub dimensions: DimensionScores,
    /// Human-readable shared-interest tags.
    pub shared_interests: Vec<String>,
    /// Human-readable complementary-trait tags.
    pub complementary_traits: Vec<String>,
}

/// Port exposed to inbound adapters for running the scorer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompatibilityCommand: Send + Sync {
    /// Compute (and best-effort persist) the compatibility report for a
    /// pair of users.
    async fn calculate(
        &self,
        request: CalculateCompatibilityRequest,
    ) -> Result<CompatibilityReport, Error>;
}

/// Fixture implementation returning a neutral report, for wiring tests and
/// doc examples that do not exercise scoring.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCompatibilityCommand;

#[async_trait]
impl CompatibilityCommand for FixtureCompatibilityCommand {
    async fn calculate(
        &self,
        _request: CalculateCompatibilityRequest,
    ) -> Result<CompatibilityReport, Error> {
        Ok(CompatibilityReport {
            overall: 100,
            dimensions: DimensionScores {
                social: 100,
                artistic: 100,
                emotional: 100,
                structural: 100,
            },
            shared_interests: Vec::new(),
            complementary_traits: Vec::new(),
        })
    }
}
