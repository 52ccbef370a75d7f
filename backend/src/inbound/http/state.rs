//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ArtPulseCommand, CompatibilityCommand};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use sayu_backend::domain::ports::{FixtureArtPulseCommand, FixtureCompatibilityCommand};
/// use sayu_backend::inbound::http::state::HttpState;
///
/// let state = HttpState {
///     compatibility: Arc::new(FixtureCompatibilityCommand),
///     art_pulse: Arc::new(FixtureArtPulseCommand),
/// };
/// let _ = state.compatibility.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Compatibility scoring use-case.
    pub compatibility: Arc<dyn CompatibilityCommand>,
    /// Art Pulse session maintenance use-case.
    pub art_pulse: Arc<dyn ArtPulseCommand>,
}
