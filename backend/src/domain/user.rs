//! User identity and aesthetic profile aggregates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::compatibility::QuizResponses;
use super::personality::PersonalityCode;

/// Opaque user identifier backed by a UUID.
///
/// # Examples
/// ```
/// use sayu_backend::domain::UserId;
///
/// let id = UserId::random();
/// assert!(!id.as_uuid().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an existing UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Borrow the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A user's aesthetic profile as stored by the quiz subsystem.
///
/// The personality code is assigned once at quiz completion and never
/// mutated afterwards; this layer only reads it. Users who have not finished
/// the quiz have no code yet, hence the `Option`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Owning user.
    pub user_id: UserId,
    /// Four-letter aesthetic personality code, absent until quiz completion.
    pub personality_code: Option<PersonalityCode>,
    /// Free-form quiz answers used only for tag derivation.
    pub quiz_responses: Option<QuizResponses>,
}
