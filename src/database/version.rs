/*!
 * Pathfinder database version gate.
 *
 * Every Pathfinder database carries a single row in its `Version` table.
 * A database is only usable if its major version matches the one this
 * application was written against and its minor version is at least the
 * required one. The patch level is informational.
 */

use log::debug;
use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;
use std::fmt;

use crate::errors::DatabaseError;

/// Version of a Pathfinder database
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SchemaVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// The version a caller requires: exact major, minimum minor
    pub const fn required(major: u32, min_minor: u32) -> Self {
        Self::new(major, min_minor, 0)
    }

    /// Is this version compatible with the wanted version?
    ///
    /// Compatible means that the major version matches exactly and the
    /// wanted minor version is at least matched.
    pub fn is_compatible(&self, wanted: &SchemaVersion) -> bool {
        self.major == wanted.major && self.minor >= wanted.minor
    }

    /// Read the version row out of the database
    pub fn read(conn: &Connection) -> Result<Self, DatabaseError> {
        let row = conn
            .query_row("SELECT Major, Minor, Patch FROM Version LIMIT 1", [], |row| {
                Ok((
                    row.get::<_, Option<i64>>(0)?,
                    row.get::<_, Option<i64>>(1)?,
                    row.get::<_, Option<i64>>(2)?,
                ))
            })
            .optional()?;

        let Some((major, minor, patch)) = row else {
            return Err(DatabaseError::MissingVersion("Version table empty".to_string()));
        };

        let part = |value: Option<i64>, name: &str| -> Result<u32, DatabaseError> {
            value
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| {
                    DatabaseError::MissingVersion(format!("Version table has no valid {} version", name))
                })
        };

        let version = Self::new(part(major, "major")?, part(minor, "minor")?, part(patch, "patch")?);
        debug!("Database declares version {}", version);

        Ok(version)
    }

    /// Fail with `VersionMismatch` unless this version satisfies `required`
    pub fn ensure_compatible(&self, required: &SchemaVersion) -> Result<(), DatabaseError> {
        if self.is_compatible(required) {
            Ok(())
        } else {
            Err(DatabaseError::VersionMismatch {
                required: *required,
                actual: *self,
            })
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
