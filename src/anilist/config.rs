use crate::error::{AnilistError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "anilist.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Overrides the data directory, mostly for tests and scripting.
pub const HOME_ENV: &str = "ANILIST_HOME";

/// Configuration for anilist, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnilistConfig {
    /// Name of the anime list file inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Log filter used when `ANILIST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for AnilistConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
        }
    }
}

impl AnilistConfig {
    pub const KEYS: [&'static str; 2] = ["data_file", "log_level"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AnilistError::Io)?;
        let config: AnilistConfig =
            serde_json::from_str(&content).map_err(AnilistError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AnilistError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AnilistError::Serialization)?;
        fs::write(config_path, content).map_err(AnilistError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            "data_file" => Ok(&self.data_file),
            "log_level" => Ok(&self.log_level),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "data_file" => {
                let is_dir_name = matches!(value, "" | "." | "..");
                if is_dir_name || value.contains(['/', '\\']) {
                    return Err(AnilistError::Config(format!(
                        "data_file must be a plain file name, got '{}'",
                        value
                    )));
                }
                self.data_file = value.to_string();
            }
            "log_level" => {
                let level = value.to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(AnilistError::Config(format!(
                        "log_level must be one of {}, got '{}'",
                        LOG_LEVELS.join(", "),
                        value
                    )));
                }
                self.log_level = level;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// Full path of the anime list file for a data directory.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }
}

fn unknown_key(key: &str) -> AnilistError {
    AnilistError::Config(format!(
        "Unknown config key '{}' (known keys: {})",
        key,
        AnilistConfig::KEYS.join(", ")
    ))
}

/// Where anilist keeps its files: `ANILIST_HOME` if set, else the OS data dir.
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("", "", "anilist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AnilistError::Config("Could not determine a data directory".to_string()))
}
