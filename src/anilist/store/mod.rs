//! # Storage Layer
//!
//! The [`DataStore`] trait is the only thing the API knows about persistence.
//! A store loads and saves the whole backing list at once; the model is
//! rebuilt from it on start-up and written back after every mutating command.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── anilist.json   # { "animes": [ { "name": ..., "status": ..., ... } ] }
//! └── config.json
//! ```
//!
//! Stored records go through the same validating constructors as user input
//! when deserialized, so a hand-edited file with a bad name or genre fails to
//! load instead of producing an invalid anime.

use crate::anime::Anime;
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// On-disk shape of the anime list.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct AnimeListFile {
    #[serde(default)]
    pub animes: Vec<Anime>,
}

pub trait DataStore {
    /// Load the full anime list. A store that has never been saved is empty.
    fn load(&self) -> Result<Vec<Anime>>;

    /// Replace the stored list with `animes`.
    fn save(&mut self, animes: &[Anime]) -> Result<()>;
}
