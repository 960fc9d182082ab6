/*!
 * Common test utilities for the decemvirate test suite
 */

#![allow(dead_code)]

use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use decemvirate::{DatabaseConnection, SchemaVersion};

/// The version the fixture database is checked against
pub const REQUIRED: SchemaVersion = SchemaVersion::required(0, 8);

const SCHEMA: &str = r#"
CREATE TABLE Version (Major INTEGER NOT NULL, Minor INTEGER NOT NULL, Patch INTEGER NOT NULL);

CREATE TABLE GermanFeats (
    GermanName TEXT, EnglishName TEXT, Book TEXT, Page INTEGER,
    Description TEXT, Type TEXT
);
CREATE TABLE GermanFeatURLs (GermanFeatID INTEGER, URL TEXT);

CREATE TABLE GermanSpells (
    GermanName TEXT, EnglishName TEXT, Book TEXT, Page INTEGER,
    Classes TEXT, School TEXT, Meta TEXT, Description TEXT
);
CREATE TABLE GermanSpellURLs (GermanSpellID INTEGER, URL TEXT);

CREATE TABLE GermanPublications (
    Title TEXT, Abbreviation TEXT, StatBlock TEXT, Category TEXT,
    Date TEXT, URL TEXT, ISBN TEXT, PaizoProductCodes TEXT
);
CREATE TABLE EnglishPublications (
    Title TEXT, ProductCode TEXT, Abbreviation TEXT, Category TEXT,
    Date TEXT, URL TEXT, ISBN TEXT
);
"#;

const DATA: &str = r#"
INSERT INTO GermanFeats VALUES
    ('Heftiger Angriff', 'Power Attack', 'GRW', 131, 'Mehr Schaden, weniger Treffer.', 'Kampf'),
    ('Ausweichen', 'Dodge', 'GRW', 122, '+1 RK.', 'Kampf'),
    ('Zauberfokus', 'Spell Focus', 'GRW', 136, 'Eine Schule.', 'Allgemein'),
    ('Zauberfokus', 'Spell Focus (Mythic)', 'MA', 80, 'Mythisch.', 'Mythisch'),
    ('Abhärtung', 'Toughness', 'GRW', 135, '+3 TP.', 'Allgemein');

INSERT INTO GermanFeatURLs VALUES
    (1, 'https://example.org/feats/heftiger-angriff'),
    (1, 'https://example.org/feats/power-attack'),
    (3, 'https://example.org/feats/zauberfokus');

INSERT INTO GermanSpells VALUES
    ('Feuerball', 'Fireball', 'GRW', 281, 'Sorcerer 3,Wizard 3,Magus 3', 'Hervorrufung', '[Feuer]', 'Bumm.'),
    ('Höllenfeuer', 'Hellfire', 'BoD', 12, 'Cleric 5,Wizard 6', 'Hervorrufung', '[Böse]', 'Heiß.'),
    ('Blitz', 'Lightning Bolt', 'GRW', 250, 'Sorcerer 3,Wizard 3', 'Hervorrufung', '[Elektrizität]', 'Zack.'),
    ('Vampirgriff', 'Vampiric Touch', 'GRW', 366, 'Sorcerer 3', 'Nekromantie', '', 'Saugt.'),
    ('Schlaf', 'Sleep', 'GRW', 342, 'Bard 1,Sorcerer 1,Wizard 1,Witch 1', 'Verzauberung', '[Geist]', 'Müde.'),
    ('Magisches Geschoss', 'Magic Missile', 'GRW', 310, 'Sorcerer 1,Wizard 1,Magus 1', 'Hervorrufung', '[Energie]', 'Trifft.'),
    ('Hast', 'Haste', 'GRW', 295, 'Bard 3,Sorcerer 3,Wizard 3', 'Verwandlung', '', 'Schnell.'),
    ('Alter Zauber', 'Old Spell', 'ALT', 1, 'Sorcerer/Wizard 2', 'Verwandlung', '', 'Veraltet.'),
    ('Zeitstopp', 'Time Stop', 'GRW', 360, 'Sorcerer 9,Wizard 9,Wizard 30', 'Verwandlung', '', 'Stopp.'),
    ('Wizardlicht', 'Wizardlight', 'HOM', 7, 'Wizardling 3', 'Hervorrufung', '[Licht]', 'Hell.');

INSERT INTO GermanSpellURLs VALUES
    (1, 'https://example.org/spells/feuerball');

INSERT INTO GermanPublications VALUES
    ('Pathfinder Grundregelwerk', 'GRW', 'PF1', 'Regelwerk', '2009-12', 'https://example.org/de/grw', '978-3-86889-001-5,978-3-86889-002-2', 'PZO1110'),
    ('Expertenregeln', 'EXP', 'PF1', 'Regelwerk', NULL, NULL, '978-3-86889-018-3', 'PZO1115'),
    ('Almanach der Götter', 'AdG', 'PF1', 'Almanach', '', '', '', 'PZO9226,PZO9267'),
    ('Grundregelwerk Taschenbuch', 'GRWT', 'PF1', 'Regelwerk', '2016-03', NULL, '', 'PZO1110'),
    ('Ausbauregeln Test', 'ART', 'PF1', 'Regelwerk', NULL, NULL, '', 'PZO11100'),
    ('Spielleiterschirm', 'SLS', 'PF1', 'Zubehör', NULL, NULL, '', '');

INSERT INTO EnglishPublications VALUES
    ('Core Rulebook', 'PZO1110', 'CRB', 'Rulebook', '2009-08', 'https://example.org/en/crb', '978-1-60125-150-3'),
    ('Advanced Player''s Guide', 'PZO1115', 'APG', 'Rulebook', '2010-08', NULL, '978-1-60125-246-3'),
    ('Inner Sea Gods', 'PZO9267', 'ISG', 'Campaign Setting', '2014-06', NULL, ''),
    ('Gods and Magic', 'PZO9226', 'GaM', 'Campaign Setting', '2008-12', NULL, ''),
    ('Ultimate Test', 'PZO11100', 'UT', 'Rulebook', NULL, NULL, ''),
    ('Bestiary', 'PZO1112', 'B1', 'Rulebook', '2009-10', NULL, '');
"#;

/// A Pathfinder database in a temporary directory
pub struct PathfinderFixture {
    // Keeps the directory alive for as long as the fixture
    _dir: TempDir,
    pub path: PathBuf,
}

impl PathfinderFixture {
    /// Create the standard fixture with version 0.8.2
    pub fn new() -> Result<Self> {
        Self::with_version(0, 8, 2)
    }

    /// Create the standard fixture declaring the given version
    pub fn with_version(major: i64, minor: i64, patch: i64) -> Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join("pathfinder.sqlite");

        let conn = Connection::open(&path)?;
        conn.execute_batch(SCHEMA)?;
        conn.execute(
            "INSERT INTO Version (Major, Minor, Patch) VALUES (?1, ?2, ?3)",
            [major, minor, patch],
        )?;
        conn.execute_batch(DATA)?;
        drop(conn);

        Ok(Self { _dir: dir, path })
    }

    /// Open the fixture through the version gate
    pub fn open(&self) -> Result<DatabaseConnection> {
        Ok(DatabaseConnection::open(&self.path, REQUIRED)?)
    }

    /// Run extra SQL against the fixture, e.g. to add rows for one test
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch(sql)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Route library logs through env_logger while testing
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
