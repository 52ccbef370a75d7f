//! Tests for the Art Pulse session maintenance service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use mockall::Sequence;

use super::*;
use crate::domain::ports::{MockArtPulseSessionRepository, MockDailyChallengeRepository};
use crate::domain::{DailyChallenge, SESSION_DURATION_MINUTES, SessionStatus};

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

fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn fixture_clock_at(utc_now: DateTime<Utc>) -> Arc<dyn Clock> {
    Arc::new(FixtureClock { utc_now })
}

fn fixture_date() -> NaiveDate {
    fixture_now().date_naive()
}

fn fixture_challenge() -> DailyChallenge {
    DailyChallenge {
        id: Uuid::new_v4(),
        challenge_date: fixture_date(),
    }
}

fn fixture_session(challenge_id: Uuid) -> ArtPulseSession {
    ArtPulseSession::scheduled_for(Uuid::new_v4(), challenge_id, fixture_date())
        .expect("window start is representable")
}

fn challenge_repo_returning(challenge: DailyChallenge) -> MockDailyChallengeRepository {
    let mut repo = MockDailyChallengeRepository::new();
    repo.expect_find_by_date()
        .withf(move |date| *date == challenge.challenge_date)
        .return_once(move |_| Ok(Some(challenge)));
    repo
}

#[tokio::test]
async fn create_daily_session_inserts_the_canonical_window() {
    let challenge = fixture_challenge();
    let challenge_id = challenge.id;
    let challenges = challenge_repo_returning(challenge);

    let mut sessions = MockArtPulseSessionRepository::new();
    sessions
        .expect_find_by_challenge_id()
        .times(1)
        .return_once(|_| Ok(None));
    sessions
        .expect_insert()
        .times(1)
        .withf(move |session| {
            session.daily_challenge_id == challenge_id
                && session.status == SessionStatus::Scheduled
                && session.start_time
                    == Utc
                        .with_ymd_and_hms(2026, 3, 1, 19, 0, 0)
                        .single()
                        .expect("valid timestamp")
                && session.end_time - session.start_time
                    == Duration::minutes(SESSION_DURATION_MINUTES)
        })
        .return_once(|_| Ok(()));

    let service = ArtPulseService::new(
        Arc::new(challenges),
        Arc::new(sessions),
        fixture_clock_at(fixture_now()),
    );
    let outcome = service
        .create_daily_session()
        .await
        .expect("creation succeeds");

    assert!(outcome.created);
    assert_eq!(outcome.session.daily_challenge_id, challenge_id);
    assert_eq!(outcome.session.status, SessionStatus::Scheduled);
}

#[tokio::test]
async fn create_daily_session_returns_existing_session_unchanged() {
    let challenge = fixture_challenge();
    let existing = fixture_session(challenge.id);
    let challenges = challenge_repo_returning(challenge);

    let mut sessions = MockArtPulseSessionRepository::new();
    sessions
        .expect_find_by_challenge_id()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    sessions.expect_insert().times(0);

    let service = ArtPulseService::new(
        Arc::new(challenges),
        Arc::new(sessions),
        fixture_clock_at(fixture_now()),
    );
    let outcome = service
        .create_daily_session()
        .await
        .expect("lookup succeeds");

    assert!(!outcome.created);
    assert_eq!(outcome.session.id, existing.id);
}

#[tokio::test]
async fn insert_conflict_is_treated_as_idempotent_creation() {
    let challenge = fixture_challenge();
    let challenge_id = challenge.id;
    let winner = fixture_session(challenge_id);
    let challenges = challenge_repo_returning(challenge);

    let mut sessions = MockArtPulseSessionRepository::new();
    let mut order = Sequence::new();
    sessions
        .expect_find_by_challenge_id()
        .times(1)
        .in_sequence(&mut order)
        .return_once(|_| Ok(None));
    sessions
        .expect_insert()
        .times(1)
        .in_sequence(&mut order)
        .return_once(move |_| Err(ArtPulseSessionRepositoryError::conflict(challenge_id)));
    sessions
        .expect_find_by_challenge_id()
        .times(1)
        .in_sequence(&mut order)
        .return_once(move |_| Ok(Some(winner)));

    let service = ArtPulseService::new(
        Arc::new(challenges),
        Arc::new(sessions),
        fixture_clock_at(fixture_now()),
    );
    let outcome = service
        .create_daily_session()
        .await
        .expect("conflict resolves to the winning session");

    assert!(!outcome.created);
    assert_eq!(outcome.session.id, winner.id);
}

#[tokio::test]
async fn missing_challenge_surfaces_as_not_found() {
    let mut challenges = MockDailyChallengeRepository::new();
    challenges.expect_find_by_date().return_once(|_| Ok(None));

    let sessions = MockArtPulseSessionRepository::new();

    let service = ArtPulseService::new(
        Arc::new(challenges),
        Arc::new(sessions),
        fixture_clock_at(fixture_now()),
    );
    let error = service
        .create_daily_session()
        .await
        .expect_err("no challenge today");

    assert_eq!(error.code(), crate::domain::ErrorCode::NotFound);
    assert!(error.message().contains("daily challenge"));
}

#[tokio::test]
async fn insert_failure_other_than_conflict_propagates() {
    let challenge = fixture_challenge();
    let challenges = challenge_repo_returning(challenge);

    let mut sessions = MockArtPulseSessionRepository::new();
    sessions
        .expect_find_by_challenge_id()
        .return_once(|_| Ok(None));
    sessions
        .expect_insert()
        .return_once(|_| Err(ArtPulseSessionRepositoryError::query("write failed")));

    let service = ArtPulseService::new(
        Arc::new(challenges),
        Arc::new(sessions),
        fixture_clock_at(fixture_now()),
    );
    let error = service
        .create_daily_session()
        .await
        .expect_err("creation's entire purpose is the write");

    assert_eq!(error.code(), crate::domain::ErrorCode::InternalError);
}

#[tokio::test]
async fn sweep_runs_activation_strictly_before_completion() {
    let now = fixture_now();
    let challenges = MockDailyChallengeRepository::new();

    let mut sessions = MockArtPulseSessionRepository::new();
    let mut order = Sequence::new();
    sessions
        .expect_activate_due()
        .times(1)
        .in_sequence(&mut order)
        .withf(move |at| *at == now)
        .return_once(|_| Ok(2));
    sessions
        .expect_complete_elapsed()
        .times(1)
        .in_sequence(&mut order)
        .withf(move |at| *at == now)
        .return_once(|_| Ok(1));

    let service = ArtPulseService::new(
        Arc::new(challenges),
        Arc::new(sessions),
        fixture_clock_at(now),
    );
    let report = service
        .sweep_session_statuses()
        .await
        .expect("sweep succeeds");

    assert_eq!(report.activated, 2);
    assert_eq!(report.completed, 1);
}

#[tokio::test]
async fn sweep_connection_failure_maps_to_service_unavailable() {
    let challenges = MockDailyChallengeRepository::new();

    let mut sessions = MockArtPulseSessionRepository::new();
    sessions
        .expect_activate_due()
        .return_once(|_| Err(ArtPulseSessionRepositoryError::connection("refused")));
    sessions.expect_complete_elapsed().times(0);

    let service = ArtPulseService::new(
        Arc::new(challenges),
        Arc::new(sessions),
        fixture_clock_at(fixture_now()),
    );
    let error = service
        .sweep_session_statuses()
        .await
        .expect_err("store unreachable");

    assert_eq!(error.code(), crate::domain::ErrorCode::ServiceUnavailable);
}
