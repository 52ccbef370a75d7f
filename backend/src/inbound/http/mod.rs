//! HTTP inbound adapter exposing REST endpoints.

pub mod art_pulse;
pub mod compatibility;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub(crate) mod validation;

pub use error::ApiResult;
