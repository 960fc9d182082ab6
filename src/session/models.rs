/*!
 * Session-specific models.
 */

use std::fmt;
use std::path::PathBuf;

use uuid::Uuid;

use crate::database::DatabaseConnection;

/// Identifies one logical caller context (one CLI run, one request)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The handle a session has open, and the path it was opened from
#[derive(Debug, Clone)]
pub(crate) struct OpenDatabase {
    pub path: PathBuf,
    pub db: DatabaseConnection,
}

/// Path and version of an opened database, for version reporting
#[derive(Debug, Clone, serde::Serialize)]
pub struct DatabaseInfo {
    pub path: PathBuf,
    pub version: String,
}
