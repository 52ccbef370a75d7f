//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by PostgreSQL via the Diesel ORM with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Strongly typed errors**: All database errors are mapped to the
//!   repository port error types, with unique key violations surfaced as
//!   conflicts where the port distinguishes them.
//!
//! # Example
//!
//! ```ignore
//! use sayu_backend::outbound::persistence::{DbPool, PoolConfig, DieselProfileRepository};
//!
//! let config = PoolConfig::new("postgres://localhost/sayu");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselProfileRepository::new(pool);
//! ```

mod diesel_art_pulse_session_repository;
mod diesel_compatibility_score_repository;
mod diesel_daily_challenge_repository;
mod diesel_error_mapping;
mod diesel_profile_repository;
mod models;
mod pool;
mod schema;

pub use diesel_art_pulse_session_repository::DieselArtPulseSessionRepository;
pub use diesel_compatibility_score_repository::DieselCompatibilityScoreRepository;
pub use diesel_daily_challenge_repository::DieselDailyChallengeRepository;
pub use diesel_profile_repository::DieselProfileRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
