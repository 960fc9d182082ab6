/*!
 * Database connection management.
 *
 * This module opens Pathfinder databases read-only, runs the version gate,
 * registers the `REGEXP` SQL function and provides async-safe access
 * patterns using tokio's spawn_blocking.
 */

use log::{debug, info};
use parking_lot::Mutex;
use regex::Regex;
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::version::SchemaVersion;
use crate::errors::DatabaseError;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An open, version-checked Pathfinder database
#[derive(Clone)]
pub struct DatabaseConnection {
    /// Path to the database file
    db_path: PathBuf,
    /// Version declared by the database
    version: SchemaVersion,
    /// Connection shared between clones of this handle
    connection: Arc<Mutex<Connection>>,
}

impl DatabaseConnection {
    /// Open the database at `db_path`, requiring a compatible version
    ///
    /// Fails with `NotFound` if the file doesn't exist and with
    /// `VersionMismatch` if the declared version isn't compatible.
    pub fn open<P: AsRef<Path>>(db_path: P, required: SchemaVersion) -> Result<Self, DatabaseError> {
        let db_path = db_path.as_ref().to_path_buf();

        if !db_path.is_file() {
            return Err(DatabaseError::NotFound(db_path));
        }

        debug!("Opening Pathfinder database at: {:?}", db_path);

        let conn = Connection::open_with_flags(
            &db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        Self::from_connection(conn, db_path, required)
    }

    /// Wrap an already opened connection, running the same checks as `open`
    pub fn from_connection(
        conn: Connection,
        db_path: PathBuf,
        required: SchemaVersion,
    ) -> Result<Self, DatabaseError> {
        register_regexp(&conn)?;

        let version = SchemaVersion::read(&conn)?;
        version.ensure_compatible(&required)?;

        info!("Opened Pathfinder database {:?}: Version {}", db_path, version);

        Ok(Self {
            db_path,
            version,
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Get the version the database declares
    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// Execute a database operation with the connection
    ///
    /// This method acquires the lock and executes the provided closure
    /// with access to the connection. For async contexts, use `execute_async`.
    pub fn execute<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Connection) -> Result<T, E>,
    {
        let conn = self.connection.lock();
        f(&conn)
    }

    /// Execute a database operation asynchronously using spawn_blocking
    ///
    /// This is the preferred method for async contexts as it prevents
    /// blocking the async runtime.
    pub async fn execute_async<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Connection) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<DatabaseError> + Send + 'static,
    {
        let conn = self.connection.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock();
            f(&conn)
        })
        .await
        .map_err(|e| E::from(DatabaseError::Task(e.to_string())))?
    }
}

impl std::fmt::Debug for DatabaseConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConnection")
            .field("db_path", &self.db_path)
            .field("version", &self.version)
            .finish()
    }
}

/// Register `X REGEXP Y`, which SQLite calls as `regexp(Y, X)`
fn register_regexp(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "regexp",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let pattern: Arc<Regex> = ctx.get_or_create_aux(0, |value| -> Result<Regex, BoxError> {
                Ok(Regex::new(value.as_str()?)?)
            })?;

            let text: Option<String> = ctx.get(1)?;
            Ok(text.is_some_and(|text| pattern.is_match(&text)))
        },
    )
}
