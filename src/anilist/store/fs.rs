use super::{AnimeListFile, DataStore};
use crate::anime::Anime;
use crate::error::{AnilistError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AnilistError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Anime>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No data file yet, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(AnilistError::Io)?;
        let file: AnimeListFile =
            serde_json::from_str(&content).map_err(AnilistError::Serialization)?;
        tracing::debug!(
            path = %self.path.display(),
            count = file.animes.len(),
            "Loaded anime list"
        );
        Ok(file.animes)
    }

    fn save(&mut self, animes: &[Anime]) -> Result<()> {
        self.ensure_parent()?;

        let file = AnimeListFile {
            animes: animes.to_vec(),
        };
        let content = serde_json::to_string_pretty(&file).map_err(AnilistError::Serialization)?;
        fs::write(&self.path, content).map_err(AnilistError::Io)?;
        tracing::debug!(path = %self.path.display(), count = animes.len(), "Saved anime list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{typical_animes, TestEnv};

    #[test]
    fn test_missing_file_loads_empty() {
        let env = TestEnv::new();
        assert!(env.store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut env = TestEnv::new();
        let animes = typical_animes();
        env.store.save(&animes).unwrap();

        assert!(env.root.join("anilist.json").exists());
        assert_eq!(env.store.load().unwrap(), animes);
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let env = TestEnv::new();
        let mut store = FileStore::new(env.root.join("nested").join("list.json"));
        store.save(&typical_animes()).unwrap();
        assert_eq!(store.load().unwrap().len(), 5);
    }

    #[test]
    fn test_file_layout() {
        let mut env = TestEnv::new();
        env.store.save(&typical_animes()[..1]).unwrap();

        let raw = fs::read_to_string(env.store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value["animes"][0];
        assert_eq!(first["name"], "Naruto");
        assert_eq!(first["status"], "watching");
        assert_eq!(first["episode"], 12);
        assert_eq!(first["genres"][0], "Shounen");
    }

    #[test]
    fn test_invalid_record_fails_to_load() {
        let env = TestEnv::new();
        fs::write(
            env.store.path(),
            r#"{ "animes": [ { "name": " leading space", "status": "watching", "episode": 1 } ] }"#,
        )
        .unwrap();

        assert!(matches!(
            env.store.load(),
            Err(AnilistError::Serialization(_))
        ));
    }

    #[test]
    fn test_missing_genres_default_to_empty() {
        let env = TestEnv::new();
        fs::write(
            env.store.path(),
            r#"{ "animes": [ { "name": "Monster", "status": "finished", "episode": 74 } ] }"#,
        )
        .unwrap();

        let animes = env.store.load().unwrap();
        assert!(animes[0].genres().is_empty());
        assert_eq!(animes[0].episode().count(), 74);
    }
}
