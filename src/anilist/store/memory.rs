use super::DataStore;
use crate::anime::Anime;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    animes: Vec<Anime>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times [`DataStore::save`] has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Anime>> {
        Ok(self.animes.clone())
    }

    fn save(&mut self, animes: &[Anime]) -> Result<()> {
        self.animes = animes.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::anime::{Episode, Genre, Name, Status};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_animes(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = Name::new(format!("Test Anime {}", i + 1)).unwrap();
                self.store.animes.push(Anime::builder(name).build());
            }
            self
        }

        pub fn with_anime(
            mut self,
            name: &str,
            status: Status,
            episode: u32,
            genres: &[&str],
        ) -> Self {
            let anime = Anime::builder(Name::new(name).unwrap())
                .status(status)
                .episode(Episode::try_from(episode).unwrap())
                .genres(genres.iter().map(|g| Genre::new(*g).unwrap()))
                .build();
            self.store.animes.push(anime);
            self
        }
    }
}
