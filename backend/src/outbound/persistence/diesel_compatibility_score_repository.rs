//! PostgreSQL-backed `CompatibilityScoreRepository` implementation using
//! Diesel ORM.
//!
//! This adapter caches compatibility reports keyed by the canonical user
//! pair, refreshing the stored row when a pair is scored again.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::CompatibilityScore;
use crate::domain::ports::{CompatibilityScoreRepository, CompatibilityScoreRepositoryError};

use super::diesel_error_mapping::{map_shared_diesel_error, map_shared_pool_error};
use super::models::{CompatibilityScoreUpdate, NewCompatibilityScoreRow};
use super::pool::{DbPool, PoolError};
use super::schema::compatibility_scores;

/// Diesel-backed implementation of the compatibility score repository port.
#[derive(Clone)]
pub struct DieselCompatibilityScoreRepository {
    pool: DbPool,
}

impl DieselCompatibilityScoreRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> CompatibilityScoreRepositoryError {
    map_shared_pool_error(error, CompatibilityScoreRepositoryError::connection)
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> CompatibilityScoreRepositoryError {
    map_shared_diesel_error(
        error,
        CompatibilityScoreRepositoryError::query,
        CompatibilityScoreRepositoryError::connection,
    )
}

fn serialize_dimensions(
    score: &CompatibilityScore,
) -> Result<serde_json::Value, CompatibilityScoreRepositoryError> {
    serde_json::to_value(score.dimensions).map_err(|err| {
        CompatibilityScoreRepositoryError::query(format!("serialise dimension scores: {err}"))
    })
}

#[async_trait]
impl CompatibilityScoreRepository for DieselCompatibilityScoreRepository {
    async fn upsert(&self, score: &CompatibilityScore) -> Result<(), CompatibilityScoreRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let dimension_scores = serialize_dimensions(score)?;
        let first_code = score.first_code.to_string();
        let second_code = score.second_code.to_string();

        let new_row = NewCompatibilityScoreRow {
            // Fully qualified: `RunQueryDsl::first` is in scope and would
            // otherwise shadow the inherent accessor during method lookup.
            user1_id: *crate::domain::UserPair::first(&score.pair).as_uuid(),
            user2_id: *score.pair.second().as_uuid(),
            user1_personality_code: &first_code,
            user2_personality_code: &second_code,
            overall_score: i16::from(score.overall),
            dimension_scores: &dimension_scores,
            shared_interests: &score.shared_interests,
            complementary_traits: &score.complementary_traits,
            calculated_at: score.calculated_at,
        };

        let update_row = CompatibilityScoreUpdate {
            user1_personality_code: &first_code,
            user2_personality_code: &second_code,
            overall_score: i16::from(score.overall),
            dimension_scores: &dimension_scores,
            shared_interests: &score.shared_interests,
            complementary_traits: &score.complementary_traits,
            calculated_at: score.calculated_at,
        };

        diesel::insert_into(compatibility_scores::table)
            .values(&new_row)
            .on_conflict((compatibility_scores::user1_id, compatibility_scores::user2_id))
            .do_update()
            .set(&update_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
