//! Anime filtering.
//!
//! [`AnimeFilter`] is the predicate behind the displayed list. Filters are
//! plain values rather than closures so that commands carrying them can be
//! compared and printed.

use crate::anime::{Anime, Genre, Status};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnimeFilter {
    /// Every anime matches.
    #[default]
    ShowAll,
    /// The name contains ANY of the keywords as a whole word, ignoring case.
    NameContainsKeywords(Vec<String>),
    /// The anime has ANY of the genres.
    GenreContains(BTreeSet<Genre>),
    /// The anime has exactly this status.
    StatusIs(Status),
    /// Every inner filter matches (AND logic).
    All(Vec<AnimeFilter>),
}

impl AnimeFilter {
    pub fn name_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnimeFilter::NameContainsKeywords(keywords.into_iter().map(Into::into).collect())
    }

    /// Combines filters with AND logic, collapsing trivial cases.
    pub fn all(filters: Vec<AnimeFilter>) -> Self {
        let mut filters: Vec<AnimeFilter> = filters
            .into_iter()
            .filter(|f| !f.is_show_all())
            .collect();
        match filters.len() {
            0 => AnimeFilter::ShowAll,
            1 => filters.remove(0),
            _ => AnimeFilter::All(filters),
        }
    }

    pub fn is_show_all(&self) -> bool {
        matches!(self, AnimeFilter::ShowAll)
    }

    pub fn matches(&self, anime: &Anime) -> bool {
        match self {
            AnimeFilter::ShowAll => true,
            AnimeFilter::NameContainsKeywords(keywords) => keywords
                .iter()
                .any(|keyword| anime.name().contains_word(keyword)),
            AnimeFilter::GenreContains(genres) => genres.iter().any(|g| anime.has_genre(g)),
            AnimeFilter::StatusIs(status) => anime.status() == *status,
            AnimeFilter::All(filters) => filters.iter().all(|f| f.matches(anime)),
        }
    }
}

impl fmt::Display for AnimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimeFilter::ShowAll => write!(f, "all anime"),
            AnimeFilter::NameContainsKeywords(keywords) => {
                write!(f, "name matches any of [{}]", keywords.join(", "))
            }
            AnimeFilter::GenreContains(genres) => {
                let names: Vec<&str> = genres.iter().map(Genre::as_str).collect();
                write!(f, "genre is any of [{}]", names.join(", "))
            }
            AnimeFilter::StatusIs(status) => write!(f, "status is {}", status),
            AnimeFilter::All(filters) => {
                let parts: Vec<String> = filters.iter().map(|f| f.to_string()).collect();
                write!(f, "{}", parts.join(" and "))
            }
        }
    }
}
