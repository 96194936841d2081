//! # Edit Descriptors
//!
//! An [`AnimeDescriptor`] is a sparse patch: one optional slot per editable
//! field of an [`Anime`](crate::anime::Anime). Unset slots leave the field
//! alone. A descriptor with no slot set is valid but edit commands refuse it.
//!
//! The genre slot is different from the scalar slots. It carries a set of
//! genres and a [`GenreOperation`]:
//!
//! - `Add`: the new genre set is the union of the current set and the slot's set
//! - `Delete`: the new genre set is the current set minus the slot's set
//!
//! Both operations are idempotent. Adding a genre the anime already has, or
//! deleting one it doesn't have, changes nothing and is not an error.
//!
//! An unset genre slot ("don't touch genres") is distinct from a slot holding
//! an empty set (a no-op update). Only the former counts as "not updated".
//!
//! ## Ownership of the genre set
//!
//! The descriptor owns its set. [`AnimeDescriptor::set_genres`] takes the
//! genres by value, `Clone` deep-copies the set, and
//! [`AnimeDescriptor::genres`] only hands out a shared borrow, so a published
//! set cannot be mutated through the getter:
//!
//! ```compile_fail
//! use anilist::anime::Genre;
//! use anilist::descriptor::{AnimeDescriptor, GenreOperation};
//!
//! let mut descriptor = AnimeDescriptor::default();
//! descriptor.set_genres([Genre::new("Drama").unwrap()], GenreOperation::Add);
//! let update = descriptor.genres().unwrap();
//! update.genres().insert(Genre::new("Horror").unwrap());
//! ```

use crate::anime::{Episode, Genre, Name, Status};
use crate::error::{AnilistError, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub const OPERATION_CONSTRAINTS: &str = "Genre action should be either 'add' or 'delete'";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenreOperation {
    Add,
    Delete,
}

impl FromStr for GenreOperation {
    type Err = AnilistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(GenreOperation::Add),
            "delete" => Ok(GenreOperation::Delete),
            _ => Err(AnilistError::InvalidFormat {
                constraints: OPERATION_CONSTRAINTS,
            }),
        }
    }
}

impl fmt::Display for GenreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreOperation::Add => write!(f, "add"),
            GenreOperation::Delete => write!(f, "delete"),
        }
    }
}

/// The genre slot of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreUpdate {
    genres: BTreeSet<Genre>,
    operation: GenreOperation,
}

impl GenreUpdate {
    pub fn new(genres: impl IntoIterator<Item = Genre>, operation: GenreOperation) -> Self {
        Self {
            genres: genres.into_iter().collect(),
            operation,
        }
    }

    pub fn genres(&self) -> &BTreeSet<Genre> {
        &self.genres
    }

    pub fn operation(&self) -> GenreOperation {
        self.operation
    }

    /// Merges this update into `current`, returning the resulting set.
    pub fn apply_to(&self, current: &BTreeSet<Genre>) -> BTreeSet<Genre> {
        match self.operation {
            GenreOperation::Add => current.union(&self.genres).cloned().collect(),
            GenreOperation::Delete => current.difference(&self.genres).cloned().collect(),
        }
    }
}

impl fmt::Display for GenreUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.operation {
            GenreOperation::Add => "added",
            GenreOperation::Delete => "deleted",
        };
        let names: Vec<&str> = self.genres.iter().map(Genre::as_str).collect();
        write!(f, "genres {}: {}", verb, names.join(", "))
    }
}

/// Sparse description of the fields an edit changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimeDescriptor {
    name: Option<Name>,
    status: Option<Status>,
    episode: Option<Episode>,
    genres: Option<GenreUpdate>,
}

impl AnimeDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one slot is set.
    pub fn is_any_field_updated(&self) -> bool {
        self.name.is_some()
            || self.status.is_some()
            || self.episode.is_some()
            || self.genres.is_some()
    }

    /// Returns true if the genre slot is the only slot set.
    pub fn is_genre_only(&self) -> bool {
        self.genres.is_some()
            && self.name.is_none()
            && self.status.is_none()
            && self.episode.is_none()
    }

    pub fn set_name(&mut self, name: Name) {
        self.name = Some(name);
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn set_episode(&mut self, episode: Episode) {
        self.episode = Some(episode);
    }

    pub fn episode(&self) -> Option<Episode> {
        self.episode
    }

    pub fn set_genres(
        &mut self,
        genres: impl IntoIterator<Item = Genre>,
        operation: GenreOperation,
    ) {
        self.genres = Some(GenreUpdate::new(genres, operation));
    }

    pub fn genres(&self) -> Option<&GenreUpdate> {
        self.genres.as_ref()
    }

    pub fn with_name(mut self, name: Name) -> Self {
        self.set_name(name);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.set_status(status);
        self
    }

    pub fn with_episode(mut self, episode: Episode) -> Self {
        self.set_episode(episode);
        self
    }

    pub fn with_genres(
        mut self,
        genres: impl IntoIterator<Item = Genre>,
        operation: GenreOperation,
    ) -> Self {
        self.set_genres(genres, operation);
        self
    }
}

impl fmt::Display for AnimeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(name) = &self.name {
            parts.push(format!("name: {}", name));
        }
        if let Some(status) = self.status {
            parts.push(format!("status: {}", status));
        }
        if let Some(episode) = self.episode {
            parts.push(format!("episode: {}", episode));
        }
        if let Some(genres) = &self.genres {
            parts.push(genres.to_string());
        }

        if parts.is_empty() {
            write!(f, "no changes")
        } else {
            write!(f, "{}", parts.join("; "))
        }
    }
}
