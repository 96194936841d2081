//! Genres categorize an anime. An anime holds a set of them, so two genres
//! wrapping the same string are the same genre.
//!
//! Naming rules:
//! - Alphanumeric characters, spaces and hyphens only
//! - Must start with a letter or digit
//! - Cannot end with a space

use crate::error::{AnilistError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const GENRE_CONSTRAINTS: &str =
    "Genres should only contain alphanumeric characters, spaces and hyphens, and it should not be blank";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Genre(String);

impl Genre {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(AnilistError::InvalidFormat {
                constraints: GENRE_CONSTRAINTS,
            });
        }
        Ok(Self(raw))
    }

    pub fn is_valid(raw: &str) -> bool {
        let Some(first) = raw.chars().next() else {
            return false;
        };
        if !first.is_ascii_alphanumeric() || raw.ends_with(' ') {
            return false;
        }
        raw.chars().all(is_valid_genre_char)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_genre_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == ' ' || ch == '-'
}

impl FromStr for Genre {
    type Err = AnilistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Genre {
    type Error = AnilistError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        genre.0
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
