//! Builders wiring repository-backed services into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{
    ArtPulseCommand, CompatibilityCommand, FixtureArtPulseCommand, FixtureCompatibilityCommand,
};
use crate::domain::{ArtPulseService, CompatibilityService};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DieselArtPulseSessionRepository, DieselCompatibilityScoreRepository,
    DieselDailyChallengeRepository, DieselProfileRepository,
};

use super::ServerConfig;

fn build_compatibility_command(config: &ServerConfig) -> Arc<dyn CompatibilityCommand> {
    match &config.db_pool {
        Some(pool) => Arc::new(CompatibilityService::new(
            Arc::new(DieselProfileRepository::new(pool.clone())),
            Arc::new(DieselCompatibilityScoreRepository::new(pool.clone())),
            Arc::new(mockable::DefaultClock),
        )),
        None => Arc::new(FixtureCompatibilityCommand),
    }
}

fn build_art_pulse_command(config: &ServerConfig) -> Arc<dyn ArtPulseCommand> {
    match &config.db_pool {
        Some(pool) => Arc::new(ArtPulseService::new(
            Arc::new(DieselDailyChallengeRepository::new(pool.clone())),
            Arc::new(DieselArtPulseSessionRepository::new(pool.clone())),
            Arc::new(mockable::DefaultClock),
        )),
        None => Arc::new(FixtureArtPulseCommand),
    }
}

/// Build the shared HTTP state from configured ports and fixture fallbacks.
///
/// Fixture use-cases are wired when no database pool is configured so the
/// server still starts for local smoke testing.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState {
        compatibility: build_compatibility_command(config),
        art_pulse: build_art_pulse_command(config),
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for fixture fallback wiring.

    use std::net::SocketAddr;

    use rstest::rstest;

    use crate::domain::ports::CalculateCompatibilityRequest;
    use crate::domain::UserId;

    use super::*;

    fn poolless_config() -> ServerConfig {
        let addr: SocketAddr = "127.0.0.1:0".parse().expect("valid socket address");
        ServerConfig::new(addr)
    }

    #[rstest]
    #[tokio::test]
    async fn db_pool_absent_wires_the_fixture_compatibility_command() {
        let state = build_http_state(&poolless_config());

        let report = state
            .compatibility
            .calculate(CalculateCompatibilityRequest {
                user1_id: UserId::random(),
                user2_id: UserId::random(),
            })
            .await
            .expect("fixture calculation should succeed");
        assert_eq!(report.overall, 100);
    }

    #[rstest]
    #[tokio::test]
    async fn db_pool_absent_wires_the_fixture_art_pulse_command() {
        let state = build_http_state(&poolless_config());

        let outcome = state
            .art_pulse
            .create_daily_session()
            .await
            .expect("fixture creation should succeed");
        assert!(outcome.created);
    }
}
