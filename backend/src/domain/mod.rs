//! Domain entities, pure scoring logic, and services.
//!
//! The domain is transport and storage agnostic: entities are immutable
//! value types, scoring is pure, and every external interaction goes
//! through a trait in [`ports`]. Inbound and outbound adapters depend on
//! this module, never the other way around.

pub mod art_pulse;
pub mod art_pulse_service;
pub mod compatibility;
pub mod compatibility_service;
pub mod error;
pub mod personality;
pub mod ports;
pub mod user;

pub use self::art_pulse::{
    ArtPulseSession, DailyChallenge, SESSION_DURATION_MINUTES, SESSION_START_HOUR, SessionStatus,
    SessionStatusParseError,
};
pub use self::art_pulse_service::ArtPulseService;
pub use self::compatibility::{
    CompatibilityScore, DimensionScores, QuizResponses, UserPair, complementary_traits,
    overall_score, score_dimensions, shared_interests,
};
pub use self::compatibility_service::CompatibilityService;
pub use self::error::{Error, ErrorCode};
pub use self::personality::{PersonalityCode, PersonalityCodeError, TraitVector};
pub use self::user::{UserId, UserProfile};

/// Convenient result alias for domain operations.
pub type DomainResult<T> = Result<T, Error>;
