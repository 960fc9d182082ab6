/*!
 * Session management for database handles.
 *
 * A session is one logical caller context: one CLI run, or one request of a
 * hosting service. Each session holds at most one open database handle, which
 * is opened on first use and closed when the session ends.
 */

pub mod manager;
pub mod models;

// Re-export main types
pub use manager::{Session, SessionManager};
pub use models::{DatabaseInfo, SessionId};
