//! # Anime Records
//!
//! An [`Anime`] aggregates four validated value types:
//!
//! - [`Name`]: printable ASCII, not blank
//! - [`Status`]: `watching`, `towatch` or `finished`
//! - [`Episode`]: episodes watched, up to five digits
//! - [`Genre`]: a set of them, possibly empty
//!
//! Records are immutable. Every edit goes through one of the `with_*` methods,
//! which return a new record; the list then swaps the old record for the new
//! one (see [`crate::model::Model::set_anime`]).
//!
//! Records carry no identifier. A record is addressed by its position in the
//! currently displayed list (see [`crate::index`]).

pub mod episode;
pub mod genre;
pub mod name;
pub mod status;

pub use episode::Episode;
pub use genre::Genre;
pub use name::Name;
pub use status::Status;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anime {
    name: Name,
    status: Status,
    episode: Episode,
    #[serde(default)]
    genres: BTreeSet<Genre>,
}

impl Anime {
    pub fn builder(name: Name) -> AnimeBuilder {
        AnimeBuilder::new(name)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn episode(&self) -> Episode {
        self.episode
    }

    pub fn genres(&self) -> &BTreeSet<Genre> {
        &self.genres
    }

    pub fn has_genre(&self, genre: &Genre) -> bool {
        self.genres.contains(genre)
    }

    pub fn with_name(&self, name: Name) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    pub fn with_status(&self, status: Status) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn with_episode(&self, episode: Episode) -> Self {
        Self {
            episode,
            ..self.clone()
        }
    }

    pub fn with_genres(&self, genres: BTreeSet<Genre>) -> Self {
        Self {
            genres,
            ..self.clone()
        }
    }
}

impl fmt::Display for Anime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Episode: {}; Status: {}; Genres: ",
            self.name, self.episode, self.status
        )?;
        for genre in &self.genres {
            write!(f, "[{}]", genre)?;
        }
        Ok(())
    }
}

/// Builds an [`Anime`] from already-validated parts.
///
/// Status defaults to `towatch`, episode to `0`, and genres to the empty set.
#[derive(Debug, Clone)]
pub struct AnimeBuilder {
    name: Name,
    status: Status,
    episode: Episode,
    genres: BTreeSet<Genre>,
}

impl AnimeBuilder {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            status: Status::default(),
            episode: Episode::default(),
            genres: BTreeSet::new(),
        }
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn episode(mut self, episode: Episode) -> Self {
        self.episode = episode;
        self
    }

    pub fn genres(mut self, genres: impl IntoIterator<Item = Genre>) -> Self {
        self.genres = genres.into_iter().collect();
        self
    }

    pub fn genre(mut self, genre: Genre) -> Self {
        self.genres.insert(genre);
        self
    }

    pub fn build(self) -> Anime {
        Anime {
            name: self.name,
            status: self.status,
            episode: self.episode,
            genres: self.genres,
        }
    }
}

impl From<&Anime> for AnimeBuilder {
    fn from(anime: &Anime) -> Self {
        Self {
            name: anime.name.clone(),
            status: anime.status,
            episode: anime.episode,
            genres: anime.genres.clone(),
        }
    }
}
