//! PostgreSQL-backed `DailyChallengeRepository` implementation using Diesel
//! ORM.

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::DailyChallenge;
use crate::domain::ports::{DailyChallengeRepository, DailyChallengeRepositoryError};

use super::diesel_error_mapping::{map_shared_diesel_error, map_shared_pool_error};
use super::models::DailyChallengeRow;
use super::pool::{DbPool, PoolError};
use super::schema::daily_challenges;

/// Diesel-backed implementation of the daily challenge repository port.
#[derive(Clone)]
pub struct DieselDailyChallengeRepository {
    pool: DbPool,
}

impl DieselDailyChallengeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> DailyChallengeRepositoryError {
    map_shared_pool_error(error, DailyChallengeRepositoryError::connection)
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> DailyChallengeRepositoryError {
    map_shared_diesel_error(
        error,
        DailyChallengeRepositoryError::query,
        DailyChallengeRepositoryError::connection,
    )
}

/// Convert a database row into a domain daily challenge.
fn row_to_daily_challenge(row: DailyChallengeRow) -> DailyChallenge {
    DailyChallenge {
        id: row.id,
        challenge_date: row.challenge_date,
    }
}

#[async_trait]
impl DailyChallengeRepository for DieselDailyChallengeRepository {
    async fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<DailyChallenge>, DailyChallengeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = daily_challenges::table
            .filter(daily_challenges::challenge_date.eq(date))
            .select(DailyChallengeRow::as_select())
            .first::<DailyChallengeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_daily_challenge))
    }
}
