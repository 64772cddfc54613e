//! Embedded schema migrations for the cafe database.

use diesel::sqlite::SqliteConnection;
use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while bringing the schema up to date.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database file could not be opened.
    #[error("failed to open database {database_url}: {message}")]
    Connection {
        database_url: String,
        message: String,
    },
    /// A migration failed to apply.
    #[error("failed to apply migrations to {database_url}: {message}")]
    Apply {
        database_url: String,
        message: String,
    },
}

/// Apply every pending migration to the SQLite file at `database_url`.
///
/// The file is created when it does not exist. Returns how many migrations
/// ran. This blocks, so async callers should run it on the blocking pool.
pub fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let mut conn =
        SqliteConnection::establish(database_url).map_err(|err| MigrationError::Connection {
            database_url: database_url.to_owned(),
            message: err.to_string(),
        })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            database_url: database_url.to_owned(),
            message: err.to_string(),
        })?;

    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(applied.len())
}
