//! Shared Diesel error mapping for repositories with basic query semantics.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Constructors a repository supplies to [`map_basic_diesel_error`].
pub struct DieselErrorConstructors<Q, C, V> {
    pub query: Q,
    pub connection: C,
    pub constraint: V,
}

/// Map common Diesel error variants into repository error constructors.
///
/// Unique and not-null violations map to the constraint constructor with
/// the database's own message so callers can report which rule fired.
pub fn map_basic_diesel_error<E, Q, C, V>(
    error: diesel::result::Error,
    constructors: DieselErrorConstructors<Q, C, V>,
) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
    V: Fn(String) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let DieselErrorConstructors {
        query,
        connection,
        constraint,
    } = constructors;

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::NotNullViolation,
            info,
        ) => constraint(info.message().to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => query("database error"),
        _ => query("database error"),
    }
}
