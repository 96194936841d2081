use crate::error::{AnilistError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const EPISODE_CONSTRAINTS: &str =
    "Episode should be a non-negative number of at most 5 digits, and it should not be blank";

const MAX_DIGITS: usize = 5;
const MAX_EPISODE: u32 = 99_999;

/// Number of episodes watched.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Episode(u32);

impl Episode {
    pub fn new(raw: &str) -> Result<Self> {
        if !Self::is_valid(raw) {
            return Err(AnilistError::InvalidFormat {
                constraints: EPISODE_CONSTRAINTS,
            });
        }
        raw.parse()
            .map(Self)
            .map_err(|_| AnilistError::InvalidFormat {
                constraints: EPISODE_CONSTRAINTS,
            })
    }

    pub fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.len() <= MAX_DIGITS && raw.chars().all(|ch| ch.is_ascii_digit())
    }

    pub fn count(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Episode {
    type Error = AnilistError;

    fn try_from(value: u32) -> Result<Self> {
        if value > MAX_EPISODE {
            return Err(AnilistError::InvalidFormat {
                constraints: EPISODE_CONSTRAINTS,
            });
        }
        Ok(Self(value))
    }
}

impl From<Episode> for u32 {
    fn from(episode: Episode) -> Self {
        episode.0
    }
}

impl FromStr for Episode {
    type Err = AnilistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
