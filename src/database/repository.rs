/*!
 * Repository layer for the Pathfinder lookups.
 *
 * This module holds every canned SQL statement the query dispatcher runs and
 * converts the resulting rows into typed records. Substring searches use
 * `LIKE '%query%'` with the query composed in verbatim.
 */

use log::trace;
use rusqlite::{Connection, Params, Row};

use super::models::{EnglishPublication, Feat, GermanPublication, Spell};

/// Build the feat/spell lookup, aggregating the URLs into one column
fn with_urls(table: &str, url_table: &str, id_column: &str, condition: &str) -> String {
    format!(
        "SELECT {table}.*, group_concat({url_table}.URL) AS URLs \
         FROM {table} LEFT JOIN {url_table} ON {url_table}.{id_column} = {table}.rowid \
         WHERE {condition} GROUP BY {table}.rowid"
    )
}

fn feat_query(condition: &str) -> String {
    with_urls("GermanFeats", "GermanFeatURLs", "GermanFeatID", condition)
}

fn spell_query(condition: &str) -> String {
    with_urls("GermanSpells", "GermanSpellURLs", "GermanSpellID", condition)
}

fn like_pattern(query: &str) -> String {
    format!("%{}%", query)
}

/// Regex for a whole-word class (and level) match inside a class list
pub fn class_pattern(class_name: &str, level: Option<&str>) -> String {
    match level {
        Some(level) => format!(r"\b{} {}\b", class_name, level),
        None => format!(r"\b{}\b", class_name),
    }
}

/// Lookups against one open connection
pub struct Repository<'c> {
    conn: &'c Connection,
}

impl<'c> Repository<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    fn fetch<T, P, F>(&self, sql: &str, params: P, map: F) -> rusqlite::Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        trace!("SQL: {}", sql);

        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map(params, map)?;
        rows.collect()
    }

    // =========================================================================
    // Feats
    // =========================================================================

    /// Feats whose German name contains `name`
    pub fn find_german_feats(&self, name: &str) -> rusqlite::Result<Vec<Feat>> {
        let sql = feat_query("GermanFeats.GermanName LIKE ?1");
        self.fetch(&sql, [like_pattern(name)], Feat::from_row)
    }

    /// Feats whose English name contains `name`
    pub fn find_english_feats(&self, name: &str) -> rusqlite::Result<Vec<Feat>> {
        let sql = feat_query("GermanFeats.EnglishName LIKE ?1");
        self.fetch(&sql, [like_pattern(name)], Feat::from_row)
    }

    // =========================================================================
    // Spells
    // =========================================================================

    /// Spells whose German name contains `name`
    pub fn find_german_spells(&self, name: &str) -> rusqlite::Result<Vec<Spell>> {
        let sql = spell_query("GermanSpells.GermanName LIKE ?1");
        self.fetch(&sql, [like_pattern(name)], Spell::from_row)
    }

    /// Spells whose English name contains `name`
    pub fn find_english_spells(&self, name: &str) -> rusqlite::Result<Vec<Spell>> {
        let sql = spell_query("GermanSpells.EnglishName LIKE ?1");
        self.fetch(&sql, [like_pattern(name)], Spell::from_row)
    }

    /// Spells available to a class, optionally at one exact level
    pub fn find_spells_by_class(
        &self,
        class_name: &str,
        level: Option<&str>,
    ) -> rusqlite::Result<Vec<Spell>> {
        let sql = spell_query("lower(GermanSpells.Classes) REGEXP lower(?1)");
        self.fetch(&sql, [class_pattern(class_name, level)], Spell::from_row)
    }

    // =========================================================================
    // German publications
    // =========================================================================

    pub fn german_publications_by_abbreviation(
        &self,
        abbreviation: &str,
    ) -> rusqlite::Result<Vec<GermanPublication>> {
        self.fetch(
            "SELECT * FROM GermanPublications WHERE Abbreviation = ?1 COLLATE NOCASE",
            [abbreviation],
            GermanPublication::from_row,
        )
    }

    pub fn german_publications_by_title(
        &self,
        title: &str,
    ) -> rusqlite::Result<Vec<GermanPublication>> {
        self.fetch(
            "SELECT * FROM GermanPublications WHERE Title LIKE ?1",
            [like_pattern(title)],
            GermanPublication::from_row,
        )
    }

    /// German publications by exact abbreviation, falling back to title
    pub fn find_german_publications(&self, name: &str) -> rusqlite::Result<Vec<GermanPublication>> {
        let result = self.german_publications_by_abbreviation(name)?;
        if !result.is_empty() {
            return Ok(result);
        }

        self.german_publications_by_title(name)
    }

    /// German publications that translate the product with `code`
    pub fn german_publications_by_paizo_code(
        &self,
        code: &str,
    ) -> rusqlite::Result<Vec<GermanPublication>> {
        if code.is_empty() {
            return Ok(Vec::new());
        }

        // LIKE narrows it down, the whole-code check drops e.g. PZO11101 for PZO1110
        let candidates = self.fetch(
            "SELECT * FROM GermanPublications WHERE PaizoProductCodes LIKE ?1",
            [like_pattern(code)],
            GermanPublication::from_row,
        )?;

        Ok(candidates.into_iter().filter(|p| p.translates(code)).collect())
    }

    // =========================================================================
    // English publications
    // =========================================================================

    pub fn english_publications_by_product_code(
        &self,
        code: &str,
    ) -> rusqlite::Result<Vec<EnglishPublication>> {
        self.fetch(
            "SELECT * FROM EnglishPublications WHERE ProductCode = ?1 COLLATE NOCASE",
            [code],
            EnglishPublication::from_row,
        )
    }

    pub fn english_publications_by_abbreviation(
        &self,
        abbreviation: &str,
    ) -> rusqlite::Result<Vec<EnglishPublication>> {
        self.fetch(
            "SELECT * FROM EnglishPublications WHERE Abbreviation = ?1 COLLATE NOCASE",
            [abbreviation],
            EnglishPublication::from_row,
        )
    }

    pub fn english_publications_by_title(
        &self,
        title: &str,
    ) -> rusqlite::Result<Vec<EnglishPublication>> {
        self.fetch(
            "SELECT * FROM EnglishPublications WHERE Title LIKE ?1",
            [like_pattern(title)],
            EnglishPublication::from_row,
        )
    }

    /// English publications by product code, then abbreviation, then title
    pub fn find_english_publications(
        &self,
        name: &str,
    ) -> rusqlite::Result<Vec<EnglishPublication>> {
        let result = self.english_publications_by_product_code(name)?;
        if !result.is_empty() {
            return Ok(result);
        }

        let result = self.english_publications_by_abbreviation(name)?;
        if !result.is_empty() {
            return Ok(result);
        }

        self.english_publications_by_title(name)
    }
}
