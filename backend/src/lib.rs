//! Aula: a small HTTP service for students, courses and enrolments.
//!
//! Layout follows a hexagonal split: [`domain`] holds documents, services
//! and ports; [`inbound`] adapts HTTP onto the driving ports; [`outbound`]
//! implements the driven ports over PostgreSQL or memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
