/*!
 * Query dispatching.
 *
 * Maps an `(operation, query, param)` triple onto the canned lookups of the
 * repository, sorts the records and attaches publication cross-references.
 */

pub mod class_level;
pub mod dispatcher;
pub mod operation;

pub use class_level::LevelKey;
pub use dispatcher::{dispatch, is_noop, run_query};
pub use operation::{Operation, ResultKind};

use crate::database::{EnglishPublication, Feat, GermanPublication, Spell};

/// The records a query produced, tagged by kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// No search was submitted
    None,
    Feat(Vec<Feat>),
    Spell(Vec<Spell>),
    GermanPublication(Vec<GermanPublication>),
    EnglishPublication(Vec<EnglishPublication>),
}

impl QueryResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            Self::None => ResultKind::None,
            Self::Feat(_) => ResultKind::Feat,
            Self::Spell(_) => ResultKind::Spell,
            Self::GermanPublication(_) => ResultKind::GermanPublication,
            Self::EnglishPublication(_) => ResultKind::EnglishPublication,
        }
    }

    /// Number of top-level records
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Feat(rows) => rows.len(),
            Self::Spell(rows) => rows.len(),
            Self::GermanPublication(rows) => rows.len(),
            Self::EnglishPublication(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
