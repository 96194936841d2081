//! # Displayed Indexes
//!
//! Anime records carry no identifier. Users refer to an anime by the number
//! shown next to it in the last list they saw, so every index is relative to
//! the **currently displayed** (filtered) list, not to the full backing list.
//!
//! With ten anime stored and a filter showing one of them, `1` is the only
//! valid index: `2` is rejected even though the backing list has a second
//! entry. This keeps "what you see" and "what you act on" in agreement.
//!
//! ## Implementation
//!
//! - [`DisplayIndex`]: a one-based, always-positive index as typed by the user
//! - [`DisplayAnime`]: connects an [`Anime`] with the index it is displayed at
//! - [`index_animes`]: numbers a displayed list `1..=N`
//!
//! Resolution against the model lives in
//! [`crate::model::Model::resolve_displayed_index`].
//!
//! **Developer Note**: When rendering or returning lists, always use
//! [`index_animes`] (or [`crate::model::Model::displayed_animes`]). Never
//! enumerate by hand, or the shown numbers drift from what resolution expects.

use crate::anime::Anime;
use crate::error::{AnilistError, Result};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// A one-based index into the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(NonZeroUsize);

impl DisplayIndex {
    /// Returns `None` for `0`.
    pub fn from_one_based(index: usize) -> Option<Self> {
        NonZeroUsize::new(index).map(Self)
    }

    pub fn from_zero_based(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    pub fn one_based(&self) -> usize {
        self.0.get()
    }

    pub fn zero_based(&self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = AnilistError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(AnilistError::InvalidIndex(s.to_string()));
        }
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(Self::from_one_based)
            .ok_or_else(|| AnilistError::InvalidIndex(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayAnime {
    pub anime: Anime,
    pub index: DisplayIndex,
}

/// Numbers the displayed list, starting at 1.
pub fn index_animes<'a, I>(animes: I) -> Vec<DisplayAnime>
where
    I: IntoIterator<Item = &'a Anime>,
{
    animes
        .into_iter()
        .enumerate()
        .map(|(i, anime)| DisplayAnime {
            anime: anime.clone(),
            index: DisplayIndex::from_zero_based(i),
        })
        .collect()
}
