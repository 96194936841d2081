use crate::error::{AnilistError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const STATUS_CONSTRAINTS: &str =
    "Status should be one of 'watching', 'towatch' or 'finished', and it should not be blank";

/// Watch status of an anime.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Watching,
    #[default]
    ToWatch,
    Finished,
}

impl Status {
    pub fn new(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "watching" => Ok(Status::Watching),
            "towatch" => Ok(Status::ToWatch),
            "finished" => Ok(Status::Finished),
            _ => Err(AnilistError::InvalidFormat {
                constraints: STATUS_CONSTRAINTS,
            }),
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::new(raw).is_ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Watching => "watching",
            Status::ToWatch => "towatch",
            Status::Finished => "finished",
        }
    }
}

impl FromStr for Status {
    type Err = AnilistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parsing_is_case_insensitive() {
        assert_eq!(Status::new("watching").unwrap(), Status::Watching);
        assert_eq!(Status::new("ToWatch").unwrap(), Status::ToWatch);
        assert_eq!(Status::new("FINISHED").unwrap(), Status::Finished);
    }

    #[test]
    fn test_invalid_status() {
        assert!(!Status::is_valid(""));
        assert!(!Status::is_valid("to watch"));
        assert!(!Status::is_valid(" watching"));
        assert_eq!(
            Status::new("dropped").unwrap_err().to_string(),
            STATUS_CONSTRAINTS
        );
    }

    #[test]
    fn test_display_roundtrip() {
        for status in [Status::Watching, Status::ToWatch, Status::Finished] {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Status::ToWatch).unwrap(),
            "\"towatch\""
        );
    }

    proptest! {
        #[test]
        fn prop_constructor_agrees_with_predicate(raw in "(watching|Towatch|FINISHED|\\PC{0,10})") {
            prop_assert_eq!(Status::new(&raw).is_ok(), Status::is_valid(&raw));
        }
    }
}
