/*!
 * Typed records for the Pathfinder tables.
 *
 * Rows are converted into these records at the query boundary. The serialized
 * field names match the database column names, which is what the JSON output
 * exposes.
 */

use rusqlite::Row;
use rusqlite::types::ValueRef;
use serde::Serialize;

/// A feat, with its German and English name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Feat {
    pub german_name: String,
    pub english_name: String,
    pub book: String,
    pub page: String,
    pub description: String,
    /// Comma-separated feat types
    #[serde(rename = "Type")]
    pub feat_type: String,
    #[serde(rename = "URLs")]
    pub urls: Vec<String>,
}

impl Feat {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            german_name: text_column(row, "GermanName")?,
            english_name: text_column(row, "EnglishName")?,
            book: text_column(row, "Book")?,
            page: text_column(row, "Page")?,
            description: text_column(row, "Description")?,
            feat_type: text_column(row, "Type")?,
            urls: split_list(&text_column(row, "URLs")?),
        })
    }

    pub fn types(&self) -> Vec<&str> {
        split_list_ref(&self.feat_type)
    }
}

/// A spell, with its German and English name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Spell {
    pub german_name: String,
    pub english_name: String,
    pub book: String,
    pub page: String,
    /// Comma-separated `"<class> <level>"` pairs
    pub classes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    pub meta: String,
    pub description: String,
    #[serde(rename = "URLs")]
    pub urls: Vec<String>,
}

impl Spell {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            german_name: text_column(row, "GermanName")?,
            english_name: text_column(row, "EnglishName")?,
            book: text_column(row, "Book")?,
            page: text_column(row, "Page")?,
            classes: text_column(row, "Classes")?,
            school: optional_column(row, "School")?,
            race: optional_column(row, "Race")?,
            meta: text_column(row, "Meta")?,
            description: text_column(row, "Description")?,
            urls: split_list(&text_column(row, "URLs")?),
        })
    }

    /// The class/level pairs of this spell, in stored order
    pub fn class_levels(&self) -> Vec<ClassLevel<'_>> {
        split_list_ref(&self.classes)
            .into_iter()
            .map(ClassLevel::parse)
            .collect()
    }
}

/// One `"<class> <level>"` entry of a spell's class list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassLevel<'a> {
    pub class: &'a str,
    pub level: &'a str,
}

impl<'a> ClassLevel<'a> {
    /// Split on the last space, so multi-word class names survive
    pub fn parse(entry: &'a str) -> Self {
        match entry.trim().rsplit_once(' ') {
            Some((class, level)) => Self {
                class: class.trim(),
                level: level.trim(),
            },
            None => Self {
                class: entry.trim(),
                level: "",
            },
        }
    }
}

/// A German publication
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GermanPublication {
    pub title: String,
    pub abbreviation: String,
    pub stat_block: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Comma-separated ISBNs
    #[serde(rename = "ISBN")]
    pub isbn: String,
    /// Comma-separated product codes of the translated originals
    pub paizo_product_codes: String,
    /// Originals, only attached to a single-row result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originals: Option<Vec<EnglishPublication>>,
}

impl GermanPublication {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            title: text_column(row, "Title")?,
            abbreviation: text_column(row, "Abbreviation")?,
            stat_block: text_column(row, "StatBlock")?,
            category: text_column(row, "Category")?,
            date: optional_column(row, "Date")?,
            url: optional_column(row, "URL")?,
            isbn: text_column(row, "ISBN")?,
            paizo_product_codes: text_column(row, "PaizoProductCodes")?,
            originals: None,
        })
    }

    pub fn isbns(&self) -> Vec<&str> {
        split_list_ref(&self.isbn)
    }

    pub fn paizo_product_codes(&self) -> Vec<&str> {
        split_list_ref(&self.paizo_product_codes)
    }

    /// Does this publication translate the product with `code`?
    pub fn translates(&self, code: &str) -> bool {
        !code.is_empty()
            && self
                .paizo_product_codes()
                .iter()
                .any(|c| c.eq_ignore_ascii_case(code))
    }
}

/// An English (original) publication
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnglishPublication {
    pub title: String,
    pub product_code: String,
    pub abbreviation: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    /// Translations, only attached to a single-row result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<GermanPublication>>,
}

impl EnglishPublication {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            title: text_column(row, "Title")?,
            product_code: text_column(row, "ProductCode")?,
            abbreviation: text_column(row, "Abbreviation")?,
            category: text_column(row, "Category")?,
            date: optional_column(row, "Date")?,
            url: optional_column(row, "URL")?,
            isbn: text_column(row, "ISBN")?,
            translations: None,
        })
    }

    pub fn isbns(&self) -> Vec<&str> {
        split_list_ref(&self.isbn)
    }
}

/// Split a comma-joined list, dropping empty entries
pub fn split_list(list: &str) -> Vec<String> {
    split_list_ref(list).into_iter().map(str::to_string).collect()
}

fn split_list_ref(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

// Columns are loosely typed in SQLite; Page in particular may be stored
// as either text or integer.
fn value_to_string(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    }
}

fn text_column(row: &Row<'_>, name: &str) -> rusqlite::Result<String> {
    Ok(value_to_string(row.get_ref(name)?).unwrap_or_default())
}

/// A column that may be NULL, empty or missing from the table entirely
fn optional_column(row: &Row<'_>, name: &str) -> rusqlite::Result<Option<String>> {
    if row.as_ref().column_index(name).is_err() {
        return Ok(None);
    }

    Ok(value_to_string(row.get_ref(name)?).filter(|s| !s.trim().is_empty()))
}
