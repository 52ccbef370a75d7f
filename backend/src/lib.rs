//! SAYU backend library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds entities, services,
//! and ports; `inbound` adapts HTTP traffic onto the driving ports; and
//! `outbound` implements the driven ports against PostgreSQL. `server` wires
//! the layers together for the binary.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
