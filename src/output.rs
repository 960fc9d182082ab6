/*!
 * Rendering of lookup results, as plain text or JSON.
 */

use serde::Serialize;
use serde_json::{json, Value};
use std::io::{self, Write};

use crate::database::{EnglishPublication, Feat, GermanPublication, Spell};
use crate::query::QueryResult;
use crate::session::DatabaseInfo;

/// Notice printed when a lookup found nothing
pub const NO_RESULTS: &str = "No results found";

/// Name, version and origin of this application
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub authors: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseInfo>,
}

impl VersionInfo {
    pub fn new(database: Option<DatabaseInfo>) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            authors: env!("CARGO_PKG_AUTHORS"),
            database,
        }
    }
}

/// The JSON document for a query result
pub fn result_to_json(result: &QueryResult) -> Value {
    let data = match result {
        QueryResult::None => json!([]),
        QueryResult::Feat(rows) => json!(rows),
        QueryResult::Spell(rows) => json!(rows),
        QueryResult::GermanPublication(rows) => json!(rows),
        QueryResult::EnglishPublication(rows) => json!(rows),
    };

    json!({
        "type": result.kind(),
        "count": result.len(),
        "data": data,
    })
}

/// The JSON document for version information
pub fn version_to_json(info: &VersionInfo) -> Value {
    json!({
        "type": "version",
        "data": info,
    })
}

/// Print a query result as human-readable text
pub fn write_result<W: Write>(out: &mut W, result: &QueryResult) -> io::Result<()> {
    match result {
        QueryResult::None => Ok(()),
        QueryResult::Feat(feats) => feats.iter().try_for_each(|feat| write_feat(out, feat)),
        QueryResult::Spell(spells) => spells.iter().try_for_each(|spell| write_spell(out, spell)),
        QueryResult::GermanPublication(publications) => {
            for publication in publications {
                write_german_publication(out, publication)?;
            }

            if let [publication] = publications.as_slice() {
                if let Some(originals) = &publication.originals {
                    writeln!(out, "This publication translates the following originals:\n")?;
                    for original in originals {
                        write_english_publication(out, original)?;
                    }
                }
            }

            Ok(())
        }
        QueryResult::EnglishPublication(publications) => {
            for publication in publications {
                write_english_publication(out, publication)?;
            }

            if let [publication] = publications.as_slice() {
                if let Some(translations) = &publication.translations {
                    writeln!(out, "This publication is translated in the following publications:\n")?;
                    for translation in translations {
                        write_german_publication(out, translation)?;
                    }
                }
            }

            Ok(())
        }
    }
}

/// Print version information as human-readable text
pub fn write_version<W: Write>(out: &mut W, info: &VersionInfo) -> io::Result<()> {
    writeln!(out, "{} {}", info.name, info.version)?;
    writeln!(out, "{}", info.description)?;
    if !info.authors.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", info.authors)?;
    }

    if let Some(db) = &info.database {
        writeln!(out)?;
        writeln!(out, "Pathfinder database {:?}: Version {}", db.path, db.version)?;
    }

    Ok(())
}

fn write_feat<W: Write>(out: &mut W, feat: &Feat) -> io::Result<()> {
    writeln!(out, "German Name: {}", feat.german_name)?;
    writeln!(out, "English Name: {}", feat.english_name)?;
    writeln!(out, "Book: {}, Page: {}", feat.book, feat.page)?;
    writeln!(out, "Description: {}", feat.description)?;
    writeln!(out, "Types: {}", feat.types().join(", "))?;
    write_urls(out, &feat.urls)?;
    writeln!(out)
}

fn write_spell<W: Write>(out: &mut W, spell: &Spell) -> io::Result<()> {
    let classes: Vec<String> = spell
        .class_levels()
        .iter()
        .map(|c| format!("{} {}", c.class, c.level).trim_end().to_string())
        .collect();

    writeln!(out, "German Name: {}", spell.german_name)?;
    writeln!(out, "English Name: {}", spell.english_name)?;
    writeln!(out, "Book: {}, Page: {}", spell.book, spell.page)?;
    writeln!(out, "Class: {}", classes.join(", "))?;
    match (&spell.school, &spell.race) {
        (Some(school), Some(race)) => writeln!(out, "School: {}, Race: {}", school, race)?,
        (Some(school), None) => writeln!(out, "School: {}", school)?,
        _ => {}
    }
    writeln!(out, "Meta: {}", spell.meta)?;
    writeln!(out, "Description: {}", spell.description)?;
    write_urls(out, &spell.urls)?;
    writeln!(out)
}

fn write_german_publication<W: Write>(out: &mut W, publication: &GermanPublication) -> io::Result<()> {
    writeln!(out, "Title: {}", publication.title)?;
    writeln!(out, "Abbreviation: {}", publication.abbreviation)?;
    writeln!(out, "StatBlock: {}", publication.stat_block)?;
    writeln!(out, "Category: {}", publication.category)?;
    writeln!(out, "Date: {}", publication.date.as_deref().unwrap_or(""))?;
    writeln!(out, "URL: {}", publication.url.as_deref().unwrap_or(""))?;
    writeln!(out, "ISBNs: {}", publication.isbns().join(", "))?;
    writeln!(out)
}

fn write_english_publication<W: Write>(out: &mut W, publication: &EnglishPublication) -> io::Result<()> {
    writeln!(out, "Title: {}", publication.title)?;
    writeln!(out, "Product Code: {}", publication.product_code)?;
    writeln!(out, "Abbreviation: {}", publication.abbreviation)?;
    writeln!(out, "Category: {}", publication.category)?;
    writeln!(out, "Date: {}", publication.date.as_deref().unwrap_or(""))?;
    writeln!(out, "URL: {}", publication.url.as_deref().unwrap_or(""))?;
    writeln!(out, "ISBNs: {}", publication.isbns().join(", "))?;
    writeln!(out)
}

fn write_urls<W: Write>(out: &mut W, urls: &[String]) -> io::Result<()> {
    if !urls.is_empty() {
        writeln!(out, "URLs: {}", urls.join(", "))?;
    }
    Ok(())
}
