//! Tests for the compatibility scoring service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use super::*;
use crate::domain::ports::{MockCompatibilityScoreRepository, MockProfileRepository};
use crate::domain::{QuizResponses, UserId, UserProfile};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

fn profile(id: UserId, code: &str, responses: Option<QuizResponses>) -> UserProfile {
    UserProfile {
        user_id: id,
        personality_code: Some(code.parse().expect("valid code")),
        quiz_responses: responses,
    }
}

fn request() -> CalculateCompatibilityRequest {
    CalculateCompatibilityRequest {
        user1_id: UserId::random(),
        user2_id: UserId::random(),
    }
}

#[tokio::test]
async fn calculate_scores_and_persists_for_the_canonical_pair() {
    let request = request();
    let first = profile(request.user1_id, "LAEF", None);
    let second = profile(request.user2_id, "SRMC", None);
    let expected_pair = UserPair::new(request.user1_id, request.user2_id);

    let mut profiles = MockProfileRepository::new();
    profiles
        .expect_find_by_ids()
        .times(1)
        .return_once(move |_| Ok(vec![first, second]));

    let mut scores = MockCompatibilityScoreRepository::new();
    scores
        .expect_upsert()
        .times(1)
        .withf(move |score| {
            score.pair == expected_pair
                && score.overall == 40
                && score.calculated_at == fixture_timestamp()
        })
        .return_once(|_| Ok(()));

    let service = CompatibilityService::new(Arc::new(profiles), Arc::new(scores), fixture_clock());
    let report = service.calculate(request).await.expect("scoring succeeds");

    assert_eq!(report.overall, 40);
    assert_eq!(report.dimensions.social, 70);
    assert_eq!(report.dimensions.emotional, 20);
}

#[tokio::test]
async fn calculate_is_symmetric_in_argument_order() {
    let request = request();
    let reversed = CalculateCompatibilityRequest {
        user1_id: request.user2_id,
        user2_id: request.user1_id,
    };

    let make_service = |user1: UserId, user2: UserId| {
        let first = profile(user1, "LREC", None);
        let second = profile(user2, "SAMF", None);
        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_find_by_ids()
            .return_once(move |_| Ok(vec![first, second]));
        let mut scores = MockCompatibilityScoreRepository::new();
        scores.expect_upsert().return_once(|_| Ok(()));
        CompatibilityService::new(Arc::new(profiles), Arc::new(scores), fixture_clock())
    };

    let forwards = make_service(request.user1_id, request.user2_id)
        .calculate(request)
        .await
        .expect("scoring succeeds");
    let backwards = make_service(reversed.user1_id, reversed.user2_id)
        .calculate(reversed)
        .await
        .expect("scoring succeeds");

    assert_eq!(forwards.overall, backwards.overall);
    assert_eq!(forwards.dimensions, backwards.dimensions);
}

#[tokio::test]
async fn calculate_returns_not_found_when_a_profile_is_missing() {
    let request = request();
    let only = profile(request.user1_id, "LAEF", None);

    let mut profiles = MockProfileRepository::new();
    profiles
        .expect_find_by_ids()
        .return_once(move |_| Ok(vec![only]));

    let mut scores = MockCompatibilityScoreRepository::new();
    scores.expect_upsert().times(0);

    let service = CompatibilityService::new(Arc::new(profiles), Arc::new(scores), fixture_clock());
    let error = service.calculate(request).await.expect_err("missing user");

    assert_eq!(error.code(), crate::domain::ErrorCode::NotFound);
}

#[tokio::test]
async fn calculate_returns_not_found_when_a_profile_has_no_code() {
    let request = request();
    let first = profile(request.user1_id, "LAEF", None);
    let second = UserProfile {
        user_id: request.user2_id,
        personality_code: None,
        quiz_responses: None,
    };

    let mut profiles = MockProfileRepository::new();
    profiles
        .expect_find_by_ids()
        .return_once(move |_| Ok(vec![first, second]));

    let mut scores = MockCompatibilityScoreRepository::new();
    scores.expect_upsert().times(0);

    let service = CompatibilityService::new(Arc::new(profiles), Arc::new(scores), fixture_clock());
    let error = service.calculate(request).await.expect_err("missing code");

    assert_eq!(error.code(), crate::domain::ErrorCode::NotFound);
    assert!(error.message().contains(&request.user2_id.to_string()));
}

#[tokio::test]
async fn persistence_failure_is_swallowed_and_the_report_still_returned() {
    let request = request();
    let first = profile(request.user1_id, "LAEF", None);
    let second = profile(request.user2_id, "LAEF", None);

    let mut profiles = MockProfileRepository::new();
    profiles
        .expect_find_by_ids()
        .return_once(move |_| Ok(vec![first, second]));

    let mut scores = MockCompatibilityScoreRepository::new();
    scores
        .expect_upsert()
        .times(1)
        .return_once(|_| Err(CompatibilityScoreRepositoryError::query("disk full")));

    let service = CompatibilityService::new(Arc::new(profiles), Arc::new(scores), fixture_clock());
    let report = service
        .calculate(request)
        .await
        .expect("write failure must not fail the caller");

    assert_eq!(report.overall, 100);
}

#[tokio::test]
async fn profile_connection_failure_maps_to_service_unavailable() {
    let mut profiles = MockProfileRepository::new();
    profiles
        .expect_find_by_ids()
        .return_once(|_| Err(ProfileRepositoryError::connection("refused")));

    let scores = MockCompatibilityScoreRepository::new();

    let service = CompatibilityService::new(Arc::new(profiles), Arc::new(scores), fixture_clock());
    let error = service
        .calculate(request())
        .await
        .expect_err("store unreachable");

    assert_eq!(error.code(), crate::domain::ErrorCode::ServiceUnavailable);
}

#[tokio::test]
async fn shared_interest_tags_flow_through_from_quiz_responses() {
    let request = request();
    let responses = QuizResponses {
        favorite_art_style: Some("impressionism".to_owned()),
        museum_visit_frequency: None,
        preferred_colors: vec!["blue".to_owned()],
    };
    let first = profile(request.user1_id, "LAEF", Some(responses.clone()));
    let second = profile(request.user2_id, "LAEF", Some(responses));

    let mut profiles = MockProfileRepository::new();
    profiles
        .expect_find_by_ids()
        .return_once(move |_| Ok(vec![first, second]));

    let mut scores = MockCompatibilityScoreRepository::new();
    scores.expect_upsert().return_once(|_| Ok(()));

    let service = CompatibilityService::new(Arc::new(profiles), Arc::new(scores), fixture_clock());
    let report = service.calculate(request).await.expect("scoring succeeds");

    assert!(
        report
            .shared_interests
            .contains(&"Same preferred art style".to_owned())
    );
    assert!(
        report
            .shared_interests
            .contains(&"1 shared colour preference".to_owned())
    );
}
