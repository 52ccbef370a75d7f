//! Diesel table definitions for the persistence layer.

diesel::table! {
    /// User profiles holding the personality code and quiz answers used by
    /// the compatibility scorer.
    user_profiles (user_id) {
        /// Identifier of the profile owner.
        user_id -> Uuid,
        /// Four letter personality code, if the user finished the quiz.
        personality_code -> Nullable<Text>,
        /// Raw quiz answers as JSONB, if the user finished the quiz.
        quiz_responses -> Nullable<Jsonb>,
    }
}

diesel::table! {
    /// Cached compatibility reports keyed by the canonical user pair.
    compatibility_scores (user1_id, user2_id) {
        /// Lesser identifier of the canonical pair.
        user1_id -> Uuid,
        /// Greater identifier of the canonical pair.
        user2_id -> Uuid,
        /// Personality code of the first user at calculation time.
        user1_personality_code -> Text,
        /// Personality code of the second user at calculation time.
        user2_personality_code -> Text,
        /// Weighted overall score in the range 0 to 100.
        overall_score -> SmallInt,
        /// Per-dimension scores as a JSONB object.
        dimension_scores -> Jsonb,
        /// Shared interest tags.
        shared_interests -> Array<Text>,
        /// Complementary trait tags.
        complementary_traits -> Array<Text>,
        /// When the score was last calculated.
        calculated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Daily art challenges, one per calendar day.
    daily_challenges (id) {
        /// Challenge identifier.
        id -> Uuid,
        /// Calendar day the challenge is scheduled for.
        challenge_date -> Date,
    }
}

diesel::table! {
    /// Art pulse sessions, one per daily challenge.
    art_pulse_sessions (id) {
        /// Session identifier.
        id -> Uuid,
        /// Challenge this session belongs to. Unique, so at most one
        /// session exists per challenge.
        daily_challenge_id -> Uuid,
        /// When the session opens.
        start_time -> Timestamptz,
        /// When the session closes.
        end_time -> Timestamptz,
        /// Lifecycle status label.
        status -> Text,
    }
}

diesel::joinable!(art_pulse_sessions -> daily_challenges (daily_challenge_id));

diesel::allow_tables_to_appear_in_same_query!(
    art_pulse_sessions,
    compatibility_scores,
    daily_challenges,
    user_profiles,
);
