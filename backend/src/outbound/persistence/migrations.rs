//! Embedded Diesel migrations applied at startup.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The database could not be reached.
    #[error("failed to connect for migrations: {message}")]
    Connection { message: String },
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
}

/// Apply every pending migration to the database at `database_url`.
///
/// Blocks the calling thread; async callers should go through
/// `tokio::task::spawn_blocking`.
pub fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut conn =
        PgConnection::establish(database_url).map_err(|err| MigrationError::Connection {
            message: err.to_string(),
        })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    info!(count = applied.len(), "database migrations applied");
    Ok(())
}
