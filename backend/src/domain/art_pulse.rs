//! Art Pulse session entities and their time-driven lifecycle.
//!
//! An Art Pulse session is a fixed 25-minute collective-viewing window tied
//! to the day's challenge. Its status is a pure function of wall-clock time:
//! `scheduled` until the window opens, `active` inside it, `completed` once
//! it closes. Nothing but time drives the transitions and a completed
//! session never reverts.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Hour of day (UTC) at which every session window opens.
pub const SESSION_START_HOUR: u32 = 19;

/// Length of the daily session window in minutes.
pub const SESSION_DURATION_MINUTES: i64 = 25;

/// Lifecycle state of an Art Pulse session.
///
/// Transitions are monotonic: `Scheduled → Active → Completed`, with a
/// direct `Scheduled → Completed` jump when a whole window elapses between
/// transition sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Window has not opened yet.
    Scheduled,
    /// Window is currently open.
    Active,
    /// Window has closed; terminal.
    Completed,
}

impl SessionStatus {
    /// The status a session window should hold at `now`.
    ///
    /// # Examples
    /// ```
    /// use chrono::{Duration, Utc};
    /// use sayu_backend::domain::SessionStatus;
    ///
    /// let now = Utc::now();
    /// let status = SessionStatus::for_window(now - Duration::minutes(5), now + Duration::minutes(20), now);
    /// assert_eq!(status, SessionStatus::Active);
    /// ```
    pub fn for_window(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now >= end {
            Self::Completed
        } else if now >= start {
            Self::Active
        } else {
            Self::Scheduled
        }
    }

    /// Whether the status admits no further transition.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Scheduled => "scheduled",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// Error raised when decoding a stored status label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown session status '{label}'")]
pub struct SessionStatusParseError {
    /// The rejected label.
    pub label: String,
}

impl std::str::FromStr for SessionStatus {
    type Err = SessionStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(SessionStatusParseError {
                label: other.to_owned(),
            }),
        }
    }
}

/// The day's featured challenge, owned by a separate subsystem.
///
/// This layer only ever reads the identifier and date; challenges are
/// created and mutated elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyChallenge {
    /// Challenge identifier.
    pub id: Uuid,
    /// The date the challenge is featured on.
    pub challenge_date: NaiveDate,
}

/// A persisted Art Pulse session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtPulseSession {
    /// Session identifier.
    pub id: Uuid,
    /// Challenge this session belongs to; at most one session per challenge.
    pub daily_challenge_id: Uuid,
    /// Window open time.
    pub start_time: DateTime<Utc>,
    /// Window close time.
    pub end_time: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: SessionStatus,
}

impl ArtPulseSession {
    /// Build a freshly scheduled session for a challenge with the canonical
    /// evening window on `day`.
    ///
    /// Returns `None` only if the window start cannot be represented, which
    /// cannot happen for the fixed start hour.
    pub fn scheduled_for(id: Uuid, daily_challenge_id: Uuid, day: NaiveDate) -> Option<Self> {
        let start_time = day.and_hms_opt(SESSION_START_HOUR, 0, 0)?.and_utc();
        let end_time = start_time + Duration::minutes(SESSION_DURATION_MINUTES);
        Some(Self {
            id,
            daily_challenge_id,
            start_time,
            end_time,
            status: SessionStatus::Scheduled,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        let start = Utc
            .with_ymd_and_hms(2026, 3, 1, 19, 0, 0)
            .single()
            .expect("valid timestamp");
        (start, start + Duration::minutes(SESSION_DURATION_MINUTES))
    }

    #[rstest]
    #[case(-1, SessionStatus::Scheduled)]
    #[case(0, SessionStatus::Active)]
    #[case(24, SessionStatus::Active)]
    #[case(25, SessionStatus::Completed)]
    #[case(60, SessionStatus::Completed)]
    fn window_status_follows_the_clock(
        #[case] minutes_after_start: i64,
        #[case] expected: SessionStatus,
    ) {
        let (start, end) = window();
        let now = start + Duration::minutes(minutes_after_start);
        assert_eq!(SessionStatus::for_window(start, end, now), expected);
    }

    #[rstest]
    fn only_completed_is_terminal() {
        assert!(SessionStatus::Completed.is_terminal());
        assert!(!SessionStatus::Scheduled.is_terminal());
        assert!(!SessionStatus::Active.is_terminal());
    }

    #[rstest]
    #[case("scheduled", SessionStatus::Scheduled)]
    #[case("active", SessionStatus::Active)]
    #[case("completed", SessionStatus::Completed)]
    fn status_labels_round_trip(#[case] label: &str, #[case] status: SessionStatus) {
        assert_eq!(label.parse::<SessionStatus>().expect("known label"), status);
        assert_eq!(status.to_string(), label);
    }

    #[rstest]
    fn unknown_status_label_is_rejected() {
        let error = "cancelled"
            .parse::<SessionStatus>()
            .expect_err("unknown label");
        assert_eq!(error.label, "cancelled");
    }

    #[rstest]
    fn scheduled_session_uses_the_canonical_evening_window() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");
        let session = ArtPulseSession::scheduled_for(Uuid::new_v4(), Uuid::new_v4(), day)
            .expect("window start is representable");

        assert_eq!(session.status, SessionStatus::Scheduled);
        assert_eq!(
            session.start_time,
            Utc.with_ymd_and_hms(2026, 3, 1, 19, 0, 0)
                .single()
                .expect("valid timestamp")
        );
        assert_eq!(
            session.end_time - session.start_time,
            Duration::minutes(25)
        );
    }
}
