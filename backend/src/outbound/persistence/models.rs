//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{art_pulse_sessions, compatibility_scores, daily_challenges, user_profiles};

/// Row struct for reading from the user_profiles table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user_profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserProfileRow {
    pub user_id: Uuid,
    pub personality_code: Option<String>,
    pub quiz_responses: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Compatibility score models
// ---------------------------------------------------------------------------

/// Insertable struct for creating compatibility score records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = compatibility_scores)]
pub(crate) struct NewCompatibilityScoreRow<'a> {
    pub user1_id: Uuid,
    pub user2_id: Uuid,
    pub user1_personality_code: &'a str,
    pub user2_personality_code: &'a str,
    pub overall_score: i16,
    pub dimension_scores: &'a serde_json::Value,
    pub shared_interests: &'a [String],
    pub complementary_traits: &'a [String],
    pub calculated_at: DateTime<Utc>,
}

/// Changeset struct for refreshing an existing compatibility score.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = compatibility_scores)]
pub(crate) struct CompatibilityScoreUpdate<'a> {
    pub user1_personality_code: &'a str,
    pub user2_personality_code: &'a str,
    pub overall_score: i16,
    pub dimension_scores: &'a serde_json::Value,
    pub shared_interests: &'a [String],
    pub complementary_traits: &'a [String],
    pub calculated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Daily challenge models
// ---------------------------------------------------------------------------

/// Row struct for reading from the daily_challenges table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = daily_challenges)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DailyChallengeRow {
    pub id: Uuid,
    pub challenge_date: NaiveDate,
}

// ---------------------------------------------------------------------------
// Art pulse session models
// ---------------------------------------------------------------------------

/// Row struct for reading from the art_pulse_sessions table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = art_pulse_sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ArtPulseSessionRow {
    pub id: Uuid,
    pub daily_challenge_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
}

/// Insertable struct for creating art pulse session records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = art_pulse_sessions)]
pub(crate) struct NewArtPulseSessionRow<'a> {
    pub id: Uuid,
    pub daily_challenge_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: &'a str,
}
