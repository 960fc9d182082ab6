/*!
 * Session manager for database handle lifecycle.
 *
 * This module handles:
 * - Opening the configured database lazily, once per session
 * - Reopening when the configured path changes
 * - Tearing handles down when a session ends
 */

use log::{debug, warn};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::models::{DatabaseInfo, OpenDatabase, SessionId};
use crate::database::{DatabaseConnection, SchemaVersion};
use crate::errors::AppError;
use crate::query::{self, Operation, QueryResult};

/// Per-session cache of open database handles
pub struct SessionManager {
    /// Database new sessions open, if one is configured
    database_path: RwLock<Option<PathBuf>>,
    /// Version every opened database has to be compatible with
    required: SchemaVersion,
    /// Open handles, keyed by session
    sessions: Mutex<HashMap<SessionId, OpenDatabase>>,
}

impl SessionManager {
    /// Create a session manager for the database at `database_path`
    pub fn new(database_path: Option<PathBuf>, required: SchemaVersion) -> Self {
        Self {
            database_path: RwLock::new(database_path.filter(|p| !path_is_blank(p))),
            required,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Change the database; sessions reopen on their next use
    pub fn set_database_path(&self, path: Option<PathBuf>) {
        *self.database_path.write() = path.filter(|p| !path_is_blank(p));
    }

    pub fn database_path(&self) -> Option<PathBuf> {
        self.database_path.read().clone()
    }

    pub fn required_version(&self) -> SchemaVersion {
        self.required
    }

    /// Number of sessions currently holding a handle
    pub fn open_sessions(&self) -> usize {
        self.sessions.lock().len()
    }

    // =========================================================================
    // Session Lifecycle
    // =========================================================================

    /// Start a new session; no database is opened until it's used
    pub fn begin_session(&self) -> SessionId {
        let id = SessionId::new();
        debug!("Session {} started", id);
        id
    }

    /// Start a session that ends when the returned guard is dropped
    pub fn session(&self) -> Session<'_> {
        Session {
            manager: self,
            id: self.begin_session(),
        }
    }

    /// Get the session's handle, opening the database on first use
    pub fn database(&self, session: SessionId) -> Result<DatabaseConnection, AppError> {
        let path = self
            .database_path()
            .ok_or_else(|| AppError::Config("No Pathfinder database set".to_string()))?;

        {
            let mut sessions = self.sessions.lock();
            match sessions.get(&session) {
                Some(open) if open.path == path => return Ok(open.db.clone()),
                Some(open) => {
                    debug!("Session {} switches database from {:?}", session, open.path);
                    sessions.remove(&session);
                }
                None => {}
            }
        }

        // Opened outside the lock, so other sessions aren't held up
        let db = DatabaseConnection::open(&path, self.required)?;

        self.sessions.lock().insert(
            session,
            OpenDatabase {
                path,
                db: db.clone(),
            },
        );

        Ok(db)
    }

    /// Close the session's handle; unknown sessions are ignored
    pub fn end_session(&self, session: SessionId) {
        if self.sessions.lock().remove(&session).is_some() {
            debug!("Session {} ended, database closed", session);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Run a query within a session
    pub fn run_query(
        &self,
        session: SessionId,
        operation: &str,
        query: &str,
        param: Option<&str>,
    ) -> Result<QueryResult, AppError> {
        if query::is_noop(operation, query) {
            return Ok(QueryResult::None);
        }

        let operation: Operation = operation.parse()?;
        let db = self.database(session)?;

        Ok(db.execute(|conn| query::dispatch(conn, operation, query, param))?)
    }

    /// Run a query within a session on the blocking thread pool
    pub async fn run_query_async(
        &self,
        session: SessionId,
        operation: Operation,
        query: String,
        param: Option<String>,
    ) -> Result<QueryResult, AppError> {
        if query.is_empty() {
            return Ok(QueryResult::None);
        }

        let db = self.database(session)?;

        let result = db
            .execute_async(move |conn| query::dispatch(conn, operation, &query, param.as_deref()))
            .await?;

        Ok(result)
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Open the configured database once and close it again
    pub fn try_open(&self) -> Result<DatabaseInfo, AppError> {
        let session = self.session();
        let db = session.database()?;

        Ok(DatabaseInfo {
            path: db.path().to_path_buf(),
            version: db.version().to_string(),
        })
    }

    /// Version information of the configured database, if it can be opened
    pub fn database_info(&self) -> Option<DatabaseInfo> {
        match self.try_open() {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("Pathfinder database unavailable: {}", e);
                None
            }
        }
    }
}

fn path_is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}

/// A session that releases its handle when dropped
pub struct Session<'a> {
    manager: &'a SessionManager,
    id: SessionId,
}

impl Session<'_> {
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn database(&self) -> Result<DatabaseConnection, AppError> {
        self.manager.database(self.id)
    }

    pub fn run_query(
        &self,
        operation: &str,
        query: &str,
        param: Option<&str>,
    ) -> Result<QueryResult, AppError> {
        self.manager.run_query(self.id, operation, query, param)
    }

    pub async fn run_query_async(
        &self,
        operation: Operation,
        query: String,
        param: Option<String>,
    ) -> Result<QueryResult, AppError> {
        self.manager
            .run_query_async(self.id, operation, query, param)
            .await
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        self.manager.end_session(self.id);
    }
}
