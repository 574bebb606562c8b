//! Diesel and pool error mapping shared by the repositories.
//!
//! Adapter errors carry fixed messages; the Diesel detail only reaches the
//! `debug!` log.

use tracing::debug;

use super::pool::PoolError;

/// Map a pool failure through the repository's connection constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    debug!(%error, "connection pool failure");
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => connection(message),
    }
}

/// Map a Diesel failure through the repository's query and connection
/// constructors.
pub fn map_basic_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DeserializationError(_) => query("stored document could not be decoded"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::StudentRepositoryError;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    fn map(error: DieselError) -> StudentRepositoryError {
        map_basic_diesel_error(
            error,
            StudentRepositoryError::query,
            StudentRepositoryError::connection,
        )
    }

    #[rstest]
    fn not_found_is_a_query_error() {
        assert_eq!(
            map(DieselError::NotFound),
            StudentRepositoryError::query("record not found")
        );
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert_eq!(
            map(error),
            StudentRepositoryError::connection("database connection error")
        );
    }

    #[rstest]
    fn other_database_errors_hide_details() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_owned()),
        );
        assert_eq!(map(error), StudentRepositoryError::query("database error"));
    }

    #[rstest]
    fn pool_errors_keep_their_message() {
        let mapped = map_basic_pool_error(
            PoolError::checkout("timed out"),
            StudentRepositoryError::connection,
        );
        assert_eq!(mapped, StudentRepositoryError::connection("timed out"));
    }
}
