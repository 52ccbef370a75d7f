//! PostgreSQL-backed `ProfileRepository` implementation using Diesel ORM.
//!
//! This adapter loads user profiles and decodes the stored personality code
//! and quiz answers through validated domain constructors.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ProfileRepository, ProfileRepositoryError};
use crate::domain::{PersonalityCode, QuizResponses, UserId, UserProfile};

use super::diesel_error_mapping::{map_shared_diesel_error, map_shared_pool_error};
use super::models::UserProfileRow;
use super::pool::{DbPool, PoolError};
use super::schema::user_profiles;

/// Diesel-backed implementation of the profile repository port.
#[derive(Clone)]
pub struct DieselProfileRepository {
    pool: DbPool,
}

impl DieselProfileRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> ProfileRepositoryError {
    map_shared_pool_error(error, ProfileRepositoryError::connection)
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> ProfileRepositoryError {
    map_shared_diesel_error(
        error,
        ProfileRepositoryError::query,
        ProfileRepositoryError::connection,
    )
}

fn decode_personality_code(
    code: Option<String>,
) -> Result<Option<PersonalityCode>, ProfileRepositoryError> {
    code.map(|raw| {
        raw.parse::<PersonalityCode>().map_err(|err| {
            ProfileRepositoryError::query(format!("decode personality_code: {err}"))
        })
    })
    .transpose()
}

fn decode_quiz_responses(
    responses: Option<serde_json::Value>,
) -> Result<Option<QuizResponses>, ProfileRepositoryError> {
    responses
        .map(|value| {
            serde_json::from_value(value).map_err(|err| {
                ProfileRepositoryError::query(format!("decode quiz_responses: {err}"))
            })
        })
        .transpose()
}

/// Convert a database row into a validated domain user profile.
fn row_to_user_profile(row: UserProfileRow) -> Result<UserProfile, ProfileRepositoryError> {
    let UserProfileRow {
        user_id,
        personality_code,
        quiz_responses,
    } = row;

    Ok(UserProfile {
        user_id: UserId::from_uuid(user_id),
        personality_code: decode_personality_code(personality_code)?,
        quiz_responses: decode_quiz_responses(quiz_responses)?,
    })
}

#[async_trait]
impl ProfileRepository for DieselProfileRepository {
    async fn find_by_ids(
        &self,
        ids: [UserId; 2],
    ) -> Result<Vec<UserProfile>, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let uuids = ids.map(|id| *id.as_uuid());

        let rows: Vec<UserProfileRow> = user_profiles::table
            .filter(user_profiles::user_id.eq_any(uuids))
            .select(UserProfileRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_user_profile).collect()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion edge cases.

    use rstest::{fixture, rstest};
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    #[fixture]
    fn valid_row() -> UserProfileRow {
        UserProfileRow {
            user_id: Uuid::new_v4(),
            personality_code: Some("LAEF".to_string()),
            quiz_responses: Some(json!({
                "favoriteArtStyle": "impressionism",
                "museumVisitFrequency": "monthly",
                "preferredColors": ["teal", "ochre"]
            })),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(repo_err, ProfileRepositoryError::Connection { .. }));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, ProfileRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn row_conversion_decodes_code_and_responses(valid_row: UserProfileRow) {
        let profile = row_to_user_profile(valid_row).expect("valid row should convert");

        let code = profile.personality_code.expect("code should decode");
        assert_eq!(code.to_string(), "LAEF");
        let responses = profile.quiz_responses.expect("responses should decode");
        assert_eq!(responses.preferred_colors, vec!["teal", "ochre"]);
    }

    #[rstest]
    fn row_conversion_preserves_missing_quiz_data() {
        let row = UserProfileRow {
            user_id: Uuid::new_v4(),
            personality_code: None,
            quiz_responses: None,
        };

        let profile = row_to_user_profile(row).expect("sparse row should convert");
        assert!(profile.personality_code.is_none());
        assert!(profile.quiz_responses.is_none());
    }

    #[rstest]
    fn row_conversion_rejects_malformed_personality_code(mut valid_row: UserProfileRow) {
        valid_row.personality_code = Some("LAZY".to_string());

        let error = row_to_user_profile(valid_row).expect_err("invalid code should fail");
        assert!(matches!(error, ProfileRepositoryError::Query { .. }));
        assert!(error.to_string().contains("decode personality_code"));
    }

    #[rstest]
    fn row_conversion_rejects_malformed_quiz_responses(mut valid_row: UserProfileRow) {
        valid_row.quiz_responses = Some(json!("not-an-object"));

        let error = row_to_user_profile(valid_row).expect_err("invalid json should fail");
        assert!(matches!(error, ProfileRepositoryError::Query { .. }));
        assert!(error.to_string().contains("decode quiz_responses"));
    }
}
