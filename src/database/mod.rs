/*!
 * Read-only access to the Pathfinder SQLite database.
 *
 * This module provides:
 * - The schema version gate run whenever a database is opened
 * - A connection wrapper with the `REGEXP` function registered
 * - Typed records for feats, spells and publications
 * - The canned lookups the query dispatcher is built on
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod version;

// Re-export main types
pub use connection::DatabaseConnection;
pub use models::{EnglishPublication, Feat, GermanPublication, Spell};
pub use repository::Repository;
pub use version::SchemaVersion;
