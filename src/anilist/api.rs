//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every anilist operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the one [`Model`] and the [`DataStore`] it was loaded from
//! - **Normalizes inputs**: raw strings become [`DisplayIndex`], value types,
//!   descriptors and filters, so commands only ever see typed values
//! - **Dispatches** a [`Command`] and **persists** the backing list after
//!   every successful mutating command
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Presentation**: Returns [`CmdResult`], never strings for a terminal
//!
//! ## Generic Over DataStore
//!
//! `AnilistApi<S: DataStore>` runs on a `FileStore` in production and an
//! `InMemoryStore` in tests.
//!
//! Because the API holds the model for its whole lifetime, the displayed list
//! (and therefore what an index refers to) carries over from one call to the
//! next.

use crate::anime::{Anime, Episode, Genre, Name, Status};
use crate::commands::Command;
use crate::descriptor::{AnimeDescriptor, GenreOperation};
use crate::error::{AnilistError, Result};
use crate::filter::AnimeFilter;
use crate::index::DisplayIndex;
use crate::model::Model;
use crate::store::DataStore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub const FIND_CONSTRAINTS: &str = "At least one keyword to search for must be given";
pub const GENRE_LIST_CONSTRAINTS: &str = "At least one genre must be given";

/// Raw field values for a general edit. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    pub name: Option<String>,
    pub status: Option<String>,
    pub episode: Option<String>,
}

/// The main API facade for anilist operations.
pub struct AnilistApi<S: DataStore> {
    store: S,
    model: Model,
}

impl<S: DataStore> AnilistApi<S> {
    /// Loads the stored list and shows all of it.
    pub fn new(store: S) -> Result<Self> {
        let model = Model::with_animes(store.load()?);
        Ok(Self { store, model })
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs an already parsed command, saving afterwards if it can mutate.
    pub fn execute(&mut self, command: Command) -> Result<CmdResult> {
        let result = command.execute(&mut self.model)?;
        if command.is_mutating() {
            self.store.save(self.model.animes())?;
        }
        Ok(result)
    }

    pub fn add_anime<G: AsRef<str>>(
        &mut self,
        name: &str,
        status: Option<&str>,
        episode: Option<&str>,
        genres: &[G],
    ) -> Result<CmdResult> {
        let mut builder = Anime::builder(Name::new(name.trim())?).genres(parse_genres(genres)?);
        if let Some(status) = status {
            builder = builder.status(Status::new(status.trim())?);
        }
        if let Some(episode) = episode {
            builder = builder.episode(Episode::new(episode.trim())?);
        }
        self.execute(Command::Add(builder.build()))
    }

    pub fn delete_anime(&mut self, index: &str) -> Result<CmdResult> {
        let index = index.parse::<DisplayIndex>()?;
        self.execute(Command::Delete { index })
    }

    pub fn edit_anime(&mut self, index: &str, request: &EditRequest) -> Result<CmdResult> {
        let index = index.parse::<DisplayIndex>()?;
        let mut descriptor = AnimeDescriptor::new();
        if let Some(name) = &request.name {
            descriptor.set_name(Name::new(name.trim())?);
        }
        if let Some(status) = &request.status {
            descriptor.set_status(Status::new(status.trim())?);
        }
        if let Some(episode) = &request.episode {
            descriptor.set_episode(Episode::new(episode.trim())?);
        }
        self.execute(Command::Edit { index, descriptor })
    }

    pub fn rename(&mut self, index: &str, name: &str) -> Result<CmdResult> {
        let request = EditRequest {
            name: Some(name.to_string()),
            ..EditRequest::default()
        };
        self.edit_anime(index, &request)
    }

    pub fn set_status(&mut self, index: &str, status: &str) -> Result<CmdResult> {
        let request = EditRequest {
            status: Some(status.to_string()),
            ..EditRequest::default()
        };
        self.edit_anime(index, &request)
    }

    pub fn update_episode(&mut self, index: &str, episode: &str) -> Result<CmdResult> {
        let request = EditRequest {
            episode: Some(episode.to_string()),
            ..EditRequest::default()
        };
        self.edit_anime(index, &request)
    }

    pub fn genre<G: AsRef<str>>(
        &mut self,
        index: &str,
        operation: &str,
        genres: &[G],
    ) -> Result<CmdResult> {
        let index = index.parse::<DisplayIndex>()?;
        let operation = operation.trim().parse::<GenreOperation>()?;
        let genres = parse_genres(genres)?;
        if genres.is_empty() {
            return Err(AnilistError::InvalidFormat {
                constraints: GENRE_LIST_CONSTRAINTS,
            });
        }
        let descriptor = AnimeDescriptor::new().with_genres(genres, operation);
        self.execute(Command::Genre { index, descriptor })
    }

    /// Keywords are split on whitespace; each must match a whole word.
    pub fn find<K: AsRef<str>>(&mut self, keywords: &[K]) -> Result<CmdResult> {
        let words: Vec<String> = keywords
            .iter()
            .flat_map(|k| k.as_ref().split_whitespace())
            .map(str::to_string)
            .collect();
        if words.is_empty() {
            return Err(AnilistError::InvalidFormat {
                constraints: FIND_CONSTRAINTS,
            });
        }
        self.execute(Command::Find(AnimeFilter::NameContainsKeywords(words)))
    }

    /// Lists everything, or only anime with any of `genres` and/or `status`.
    pub fn list<G: AsRef<str>>(&mut self, genres: &[G], status: Option<&str>) -> Result<CmdResult> {
        let mut filters = Vec::new();
        let genres = parse_genres(genres)?;
        if !genres.is_empty() {
            filters.push(AnimeFilter::GenreContains(genres.into_iter().collect()));
        }
        if let Some(status) = status {
            filters.push(AnimeFilter::StatusIs(Status::new(status.trim())?));
        }
        self.execute(Command::List(AnimeFilter::all(filters)))
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        self.execute(Command::Clear)
    }
}

fn parse_genres<G: AsRef<str>>(raw: &[G]) -> Result<Vec<Genre>> {
    raw.iter().map(|g| Genre::new(g.as_ref().trim())).collect()
}
