use crate::error::{AnilistError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain printable ASCII characters and spaces, and it should not be blank";

/// An anime's name. Guaranteed valid by [`Name::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(AnilistError::InvalidFormat {
                constraints: NAME_CONSTRAINTS,
            });
        }
        Ok(Self(raw))
    }

    /// The first character must not be whitespace, otherwise `" "` would pass.
    pub fn is_valid(raw: &str) -> bool {
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) if first.is_ascii_graphic() => {
                chars.all(|ch| ch.is_ascii_graphic() || ch == ' ')
            }
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whole-word, case-insensitive keyword match against the name.
    pub fn contains_word(&self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() || keyword.contains(' ') {
            return false;
        }
        self.0
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case(keyword))
    }
}

impl FromStr for Name {
    type Err = AnilistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Name {
    type Error = AnilistError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_names() {
        assert!(Name::is_valid("a"));
        assert!(Name::is_valid("Attack on Titan"));
        assert!(Name::is_valid("Steins;Gate 0"));
        assert!(Name::is_valid("86"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!Name::is_valid(""));
        assert!(!Name::is_valid(" "));
        assert!(!Name::is_valid(" leading space"));
        assert!(!Name::is_valid("tab\tinside"));
        assert!(!Name::is_valid("進撃の巨人"));
    }

    #[test]
    fn test_invalid_name_reports_constraints() {
        let err = Name::new("").unwrap_err();
        assert_eq!(err.to_string(), NAME_CONSTRAINTS);
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(Name::new("Naruto").unwrap(), Name::new("Naruto").unwrap());
        assert_ne!(Name::new("Naruto").unwrap(), Name::new("naruto").unwrap());
    }

    #[test]
    fn test_contains_word() {
        let name = Name::new("Fullmetal Alchemist Brotherhood").unwrap();
        assert!(name.contains_word("alchemist"));
        assert!(name.contains_word("BROTHERHOOD"));
        assert!(!name.contains_word("Alch"));
        assert!(!name.contains_word(""));
        assert!(!name.contains_word("Fullmetal Alchemist"));
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let parsed: std::result::Result<Name, _> = serde_json::from_str("\" bad\"");
        assert!(parsed.is_err());
        let parsed: Name = serde_json::from_str("\"Monster\"").unwrap();
        assert_eq!(parsed.as_str(), "Monster");
    }

    proptest! {
        #[test]
        fn prop_constructor_agrees_with_predicate(raw in "\\PC*") {
            prop_assert_eq!(Name::new(raw.clone()).is_ok(), Name::is_valid(&raw));
        }

        #[test]
        fn prop_constructor_agrees_with_predicate_ascii(raw in "[ -~\t]{0,12}") {
            prop_assert_eq!(Name::new(raw.clone()).is_ok(), Name::is_valid(&raw));
        }
    }
}
