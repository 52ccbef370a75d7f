//! PostgreSQL-backed `ArtPulseSessionRepository` implementation using Diesel
//! ORM.
//!
//! The unique index on `daily_challenge_id` is the concurrency guard for
//! session creation: a lost insert race surfaces as a unique violation,
//! which this adapter reports as a conflict for the service to replay.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ArtPulseSessionRepository, ArtPulseSessionRepositoryError};
use crate::domain::{ArtPulseSession, SessionStatus};

use super::diesel_error_mapping::{
    is_unique_violation, map_shared_diesel_error, map_shared_pool_error,
};
use super::models::{ArtPulseSessionRow, NewArtPulseSessionRow};
use super::pool::{DbPool, PoolError};
use super::schema::art_pulse_sessions;

/// Diesel-backed implementation of the art pulse session repository port.
#[derive(Clone)]
pub struct DieselArtPulseSessionRepository {
    pool: DbPool,
}

impl DieselArtPulseSessionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> ArtPulseSessionRepositoryError {
    map_shared_pool_error(error, ArtPulseSessionRepositoryError::connection)
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> ArtPulseSessionRepositoryError {
    map_shared_diesel_error(
        error,
        ArtPulseSessionRepositoryError::query,
        ArtPulseSessionRepositoryError::connection,
    )
}

/// Convert a database row into a validated domain session.
fn row_to_session(row: ArtPulseSessionRow) -> Result<ArtPulseSession, ArtPulseSessionRepositoryError> {
    let ArtPulseSessionRow {
        id,
        daily_challenge_id,
        start_time,
        end_time,
        status,
    } = row;

    let status = status
        .parse::<SessionStatus>()
        .map_err(|err| ArtPulseSessionRepositoryError::query(format!("decode status: {err}")))?;

    Ok(ArtPulseSession {
        id,
        daily_challenge_id,
        start_time,
        end_time,
        status,
    })
}

#[async_trait]
impl ArtPulseSessionRepository for DieselArtPulseSessionRepository {
    async fn find_by_challenge_id(
        &self,
        challenge_id: Uuid,
    ) -> Result<Option<ArtPulseSession>, ArtPulseSessionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = art_pulse_sessions::table
            .filter(art_pulse_sessions::daily_challenge_id.eq(challenge_id))
            .select(ArtPulseSessionRow::as_select())
            .first::<ArtPulseSessionRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_session).transpose()
    }

    async fn insert(
        &self,
        session: &ArtPulseSession,
    ) -> Result<(), ArtPulseSessionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let status = session.status.to_string();

        let new_row = NewArtPulseSessionRow {
            id: session.id,
            daily_challenge_id: session.daily_challenge_id,
            start_time: session.start_time,
            end_time: session.end_time,
            status: &status,
        };

        diesel::insert_into(art_pulse_sessions::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                if is_unique_violation(&err) {
                    ArtPulseSessionRepositoryError::conflict(session.daily_challenge_id)
                } else {
                    map_diesel_error(err)
                }
            })
    }

    async fn activate_due(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, ArtPulseSessionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(
            art_pulse_sessions::table.filter(
                art_pulse_sessions::status
                    .eq(SessionStatus::Scheduled.to_string())
                    .and(art_pulse_sessions::start_time.le(now))
                    .and(art_pulse_sessions::end_time.gt(now)),
            ),
        )
        .set(art_pulse_sessions::status.eq(SessionStatus::Active.to_string()))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(updated as u64)
    }

    async fn complete_elapsed(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, ArtPulseSessionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(
            art_pulse_sessions::table.filter(
                art_pulse_sessions::status
                    .eq_any([
                        SessionStatus::Scheduled.to_string(),
                        SessionStatus::Active.to_string(),
                    ])
                    .and(art_pulse_sessions::end_time.le(now)),
            ),
        )
        .set(art_pulse_sessions::status.eq(SessionStatus::Completed.to_string()))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(updated as u64)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion edge cases.

    use chrono::{Duration, Utc};
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn valid_row() -> ArtPulseSessionRow {
        let start_time = Utc::now();
        ArtPulseSessionRow {
            id: Uuid::new_v4(),
            daily_challenge_id: Uuid::new_v4(),
            start_time,
            end_time: start_time + Duration::minutes(25),
            status: "scheduled".to_string(),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(
            repo_err,
            ArtPulseSessionRepositoryError::Connection { .. }
        ));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(
            repo_err,
            ArtPulseSessionRepositoryError::Query { .. }
        ));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    #[case("scheduled", SessionStatus::Scheduled)]
    #[case("active", SessionStatus::Active)]
    #[case("completed", SessionStatus::Completed)]
    fn row_conversion_decodes_each_status_label(
        mut valid_row: ArtPulseSessionRow,
        #[case] label: &str,
        #[case] expected: SessionStatus,
    ) {
        valid_row.status = label.to_string();

        let session = row_to_session(valid_row).expect("valid row should convert");
        assert_eq!(session.status, expected);
    }

    #[rstest]
    fn row_conversion_rejects_unknown_status_labels(mut valid_row: ArtPulseSessionRow) {
        valid_row.status = "paused".to_string();

        let error = row_to_session(valid_row).expect_err("unknown label should fail");
        assert!(matches!(error, ArtPulseSessionRepositoryError::Query { .. }));
        assert!(error.to_string().contains("decode status"));
    }
}
