/*!
 * The fixed set of lookup operations.
 */

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::QueryError;

/// One of the lookups the dispatcher knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Feats by German name
    FindGermanFeat,
    /// Feats by English name
    FindEnglishFeat,
    /// Spells by German name
    FindGermanSpell,
    /// Spells by English name
    FindEnglishSpell,
    /// Spells by class and optionally level
    FindSpellByClass,
    /// German publications by abbreviation or title
    FindGermanPublication,
    /// English publications by product code, abbreviation or title
    FindEnglishPublication,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::FindGermanFeat,
        Operation::FindEnglishFeat,
        Operation::FindGermanSpell,
        Operation::FindEnglishSpell,
        Operation::FindSpellByClass,
        Operation::FindGermanPublication,
        Operation::FindEnglishPublication,
    ];

    /// The name callers select this operation by
    pub fn name(&self) -> &'static str {
        match self {
            Self::FindGermanFeat => "finddefeat",
            Self::FindEnglishFeat => "findenfeat",
            Self::FindGermanSpell => "finddespell",
            Self::FindEnglishSpell => "findenspell",
            Self::FindSpellByClass => "findspellbyclass",
            Self::FindGermanPublication => "finddepub",
            Self::FindEnglishPublication => "findenpub",
        }
    }

    /// The kind of result this operation produces
    pub fn result_kind(&self) -> ResultKind {
        match self {
            Self::FindGermanFeat | Self::FindEnglishFeat => ResultKind::Feat,
            Self::FindGermanSpell | Self::FindEnglishSpell | Self::FindSpellByClass => {
                ResultKind::Spell
            }
            Self::FindGermanPublication => ResultKind::GermanPublication,
            Self::FindEnglishPublication => ResultKind::EnglishPublication,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| QueryError::InvalidOperation(s.to_string()))
    }
}

/// The tag of a query result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    None,
    Feat,
    Spell,
    #[serde(rename = "depub")]
    GermanPublication,
    #[serde(rename = "enpub")]
    EnglishPublication,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Feat => "feat",
            Self::Spell => "spell",
            Self::GermanPublication => "depub",
            Self::EnglishPublication => "enpub",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
