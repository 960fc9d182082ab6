/*!
 * Error types for the decemvirate application.
 *
 * This module contains custom error types for the database layer, the query
 * dispatcher and the application as a whole, using the thiserror crate for
 * ergonomic error definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

use crate::database::SchemaVersion;

/// Errors that can occur when opening or reading the Pathfinder database
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database file does not exist
    #[error("Pathfinder database not found: {0:?}")]
    NotFound(PathBuf),

    /// The database declares a version this application can't work with
    #[error("Incompatible database version (want ~= {required}, got {actual})")]
    VersionMismatch {
        /// Required version (patch is always 0)
        required: SchemaVersion,
        /// Version stored in the database
        actual: SchemaVersion,
    },

    /// The version table is empty or malformed
    #[error("Failed to get the database's version: {0}")]
    MissingVersion(String),

    /// Any failure reported by SQLite
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A blocking database task panicked or was cancelled
    #[error("Database task failed: {0}")]
    Task(String),
}

/// Errors that can occur while dispatching a lookup
#[derive(Error, Debug)]
pub enum QueryError {
    /// The operation name is not one of the known lookups
    #[error("Invalid query operation '{0}'")]
    InvalidOperation(String),

    /// A lookup against the database failed
    #[error("Lookup failed: {0}")]
    Lookup(#[from] DatabaseError),
}

impl From<rusqlite::Error> for QueryError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Lookup(DatabaseError::Sqlite(error))
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the database layer
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Error from the query dispatcher
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
