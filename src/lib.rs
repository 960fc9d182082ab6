/*!
 * # Decemvirate - A Pathfinder TTRPG helper
 *
 * A Rust library for looking up feats, spells and publications in a
 * Pathfinder rules database, in German and English.
 *
 * ## Features
 *
 * - Find feats and spells by German or English name
 * - Find spells by class, optionally at a specific level
 * - Find German publications by abbreviation or title, together with the
 *   English originals they translate
 * - Find English publications by product code, abbreviation or title,
 *   together with their German translations
 * - Reject databases with an incompatible schema version
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `database`: Read-only access to the Pathfinder SQLite database:
 *   - `database::version`: The schema version gate
 *   - `database::connection`: Version-checked connections
 *   - `database::repository`: The canned SQL lookups
 *   - `database::models`: Typed records
 * - `query`: Operation dispatch, sorting and cross-referencing
 * - `session`: Per-session database handles
 * - `output`: Text and JSON rendering
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the GNU Affero General Public License,
 * version 3 or later
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod database;
pub mod errors;
pub mod output;
pub mod query;
pub mod session;

// Re-export main types for easier usage
pub use app_config::Config;
pub use database::{DatabaseConnection, SchemaVersion};
pub use errors::{AppError, DatabaseError, QueryError};
pub use query::{run_query, Operation, QueryResult, ResultKind};
pub use session::SessionManager;
