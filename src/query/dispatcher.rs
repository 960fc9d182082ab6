/*!
 * The query dispatcher.
 *
 * Every operation runs its primary lookup, sorts the records stably and, for
 * publications, attaches the records on the other side of the translation
 * graph. Cross-references are only looked up when the primary lookup found
 * exactly one publication, and the graph is never followed further than
 * that one hop.
 */

use log::debug;
use rusqlite::Connection;

use super::class_level::LevelKey;
use super::operation::Operation;
use super::QueryResult;
use crate::database::{DatabaseConnection, EnglishPublication, GermanPublication, Repository};
use crate::errors::QueryError;

/// An empty operation or query means no search was submitted yet
pub fn is_noop(operation: &str, query: &str) -> bool {
    operation.is_empty() || query.is_empty()
}

/// Run the operation named `operation` against an open database
pub fn run_query(
    db: &DatabaseConnection,
    operation: &str,
    query: &str,
    param: Option<&str>,
) -> Result<QueryResult, QueryError> {
    if is_noop(operation, query) {
        return Ok(QueryResult::None);
    }

    let operation: Operation = operation.parse()?;

    db.execute(|conn| dispatch(conn, operation, query, param))
}

/// Run an already validated operation on a connection
///
/// Callers apply the no-op shortcut first; an empty query here matches
/// every row of a substring lookup.
pub fn dispatch(
    conn: &Connection,
    operation: Operation,
    query: &str,
    param: Option<&str>,
) -> Result<QueryResult, QueryError> {
    let repo = Repository::new(conn);

    let result = match operation {
        Operation::FindGermanFeat => {
            let mut feats = repo.find_german_feats(query)?;
            feats.sort_by(|a, b| a.german_name.cmp(&b.german_name));
            QueryResult::Feat(feats)
        }
        Operation::FindEnglishFeat => {
            let mut feats = repo.find_english_feats(query)?;
            feats.sort_by(|a, b| a.english_name.cmp(&b.english_name));
            QueryResult::Feat(feats)
        }
        Operation::FindGermanSpell => {
            let mut spells = repo.find_german_spells(query)?;
            spells.sort_by(|a, b| a.german_name.cmp(&b.german_name));
            QueryResult::Spell(spells)
        }
        Operation::FindEnglishSpell => {
            let mut spells = repo.find_english_spells(query)?;
            spells.sort_by(|a, b| a.english_name.cmp(&b.english_name));
            QueryResult::Spell(spells)
        }
        Operation::FindSpellByClass => {
            let level = param.filter(|p| !p.is_empty());
            let mut spells = repo.find_spells_by_class(query, level)?;
            spells.sort_by(|a, b| a.german_name.cmp(&b.german_name));
            spells.sort_by_cached_key(|spell| LevelKey::of(spell, query));
            QueryResult::Spell(spells)
        }
        Operation::FindGermanPublication => {
            let mut publications = repo.find_german_publications(query)?;
            publications.sort_by(|a, b| a.title.cmp(&b.title));

            if let [publication] = publications.as_mut_slice() {
                attach_originals(&repo, publication)?;
            }

            QueryResult::GermanPublication(publications)
        }
        Operation::FindEnglishPublication => {
            let mut publications = repo.find_english_publications(query)?;
            publications.sort_by(|a, b| a.title.cmp(&b.title));

            if let [publication] = publications.as_mut_slice() {
                attach_translations(&repo, publication)?;
            }

            QueryResult::EnglishPublication(publications)
        }
    };

    debug!(
        "{} '{}'{}: {} result(s)",
        operation,
        query,
        param.map(|p| format!(" {}", p)).unwrap_or_default(),
        result.len()
    );

    Ok(result)
}

/// Attach the English originals a German publication translates
fn attach_originals(
    repo: &Repository<'_>,
    publication: &mut GermanPublication,
) -> Result<(), QueryError> {
    let mut originals: Vec<EnglishPublication> = Vec::new();

    for code in publication.paizo_product_codes() {
        originals.extend(repo.english_publications_by_product_code(code)?);
    }

    if !originals.is_empty() {
        publication.originals = Some(originals);
    }

    Ok(())
}

/// Attach the German translations of an English publication
fn attach_translations(
    repo: &Repository<'_>,
    publication: &mut EnglishPublication,
) -> Result<(), QueryError> {
    let mut translations = repo.german_publications_by_paizo_code(&publication.product_code)?;
    translations.sort_by(|a, b| a.title.cmp(&b.title));

    if !translations.is_empty() {
        publication.translations = Some(translations);
    }

    Ok(())
}
