//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports describe how the domain expects to interact with the
//! external data store; driving ports are the use-case surface inbound
//! adapters call. Each trait exposes strongly typed errors so adapters map
//! their failures into predictable variants.

mod art_pulse_command;
mod art_pulse_session_repository;
mod compatibility_command;
mod compatibility_score_repository;
mod daily_challenge_repository;
mod profile_repository;

pub use art_pulse_command::{
    ArtPulseCommand, ArtPulseSessionPayload, DailySessionOutcome, FixtureArtPulseCommand,
    TransitionSweepReport,
};
pub use art_pulse_session_repository::{ArtPulseSessionRepository, ArtPulseSessionRepositoryError};
pub use compatibility_command::{
    CalculateCompatibilityRequest, CompatibilityCommand, CompatibilityReport,
    FixtureCompatibilityCommand,
};
pub use compatibility_score_repository::{
    CompatibilityScoreRepository, CompatibilityScoreRepositoryError,
};
pub use daily_challenge_repository::{DailyChallengeRepository, DailyChallengeRepositoryError};
pub use profile_repository::{ProfileRepository, ProfileRepositoryError};

#[cfg(test)]
pub use art_pulse_command::MockArtPulseCommand;
#[cfg(test)]
pub use art_pulse_session_repository::MockArtPulseSessionRepository;
#[cfg(test)]
pub use compatibility_command::MockCompatibilityCommand;
#[cfg(test)]
pub use compatibility_score_repository::MockCompatibilityScoreRepository;
#[cfg(test)]
pub use daily_challenge_repository::MockDailyChallengeRepository;
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
