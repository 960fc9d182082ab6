/*!
 * Sort keys for spells looked up by class.
 */

use crate::database::Spell;

/// Level of a class within a spell's class list
///
/// Numeric levels order numerically; anything else orders after them by text.
/// Spells that don't list the class at all order last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LevelKey {
    Numeric(u32),
    Symbolic(String),
    /// The class isn't listed; sorts like level 9999, after every listed level
    Missing,
}

impl LevelKey {
    fn parse(level: &str) -> Self {
        match level.parse::<u32>() {
            Ok(level) => Self::Numeric(level),
            Err(_) => Self::Symbolic(level.to_string()),
        }
    }

    /// Level of the first entry for `class_name`, compared case-insensitively
    pub fn of(spell: &Spell, class_name: &str) -> Self {
        let class_name = class_name.to_lowercase();

        spell
            .class_levels()
            .into_iter()
            .find(|entry| entry.class.to_lowercase() == class_name)
            .map(|entry| Self::parse(entry.level))
            .unwrap_or(Self::Missing)
    }
}
