use crate::anime::{Anime, Episode, Genre, Name, Status};
use crate::store::fs::FileStore;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn genre(name: &str) -> Genre {
    Genre::new(name).expect("valid genre")
}

pub fn genres(names: &[&str]) -> BTreeSet<Genre> {
    names.iter().map(|n| genre(n)).collect()
}

pub fn anime(name: &str, status: Status, genre_names: &[&str]) -> Anime {
    Anime::builder(Name::new(name).expect("valid name"))
        .status(status)
        .genres(genres(genre_names))
        .build()
}

pub fn anime_with_episode(
    name: &str,
    episode: &str,
    status: Status,
    genre_names: &[&str],
) -> Anime {
    Anime::builder(Name::new(name).expect("valid name"))
        .status(status)
        .episode(Episode::new(episode).expect("valid episode"))
        .genres(genres(genre_names))
        .build()
}

/// A small list with a mix of statuses and genres.
pub fn typical_animes() -> Vec<Anime> {
    vec![
        anime_with_episode("Naruto", "12", Status::Watching, &["Shounen"]),
        anime_with_episode("Cowboy Bebop", "26", Status::Finished, &["Sci-Fi", "Space"]),
        anime_with_episode("Monster", "0", Status::ToWatch, &["Mystery", "Thriller"]),
        anime_with_episode("Attack on Titan", "5", Status::Watching, &["Action", "Dark Fantasy"]),
        anime_with_episode("Mushishi", "0", Status::ToWatch, &[]),
    ]
}

pub struct TestEnv {
    // Kept so the directory outlives the test
    pub _temp_dir: TempDir,
    pub store: FileStore,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let store = FileStore::new(root.join("anilist.json"));
        Self {
            _temp_dir: temp_dir,
            store,
            root,
        }
    }
}
