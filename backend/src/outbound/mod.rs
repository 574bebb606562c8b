//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: process-local store for running without a database.
//!
//! Adapters translate between domain documents and storage representations
//! and contain no business logic.

pub mod memory;
pub mod persistence;
