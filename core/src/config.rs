use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::model::semester::Season;

const APP_DIR_NAME: &str = ".studyboost";
const CONFIG_FILE_NAME: &str = "config.json";
const LOG_FILE_NAME: &str = "studyboost.log";

fn default_log_level() -> String {
    "info".to_string()
}

/// Optional `~/.studyboost/config.json`. Read once at startup, never
/// written.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub default_season: Season,
    /// Seed file replayed into every new session.
    pub seed: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
            default_season: Season::default(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// `~/.studyboost`.
    pub fn app_dir() -> Result<PathBuf> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Ok(home_dir.join(APP_DIR_NAME))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads from `path`, or from the default location when `None`. A
    /// missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = File::open(&path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(p) => Ok(p.clone()),
            None => Ok(Self::app_dir()?.join(LOG_FILE_NAME)),
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(&dir.path().join("absent.json"))).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
        assert_eq!(config.default_season, Season::Fall);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "log_level": "debug", "default_season": "Spring" }}"#).unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.default_season, Season::Spring);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_invalid_season_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_season": "Monsoon" }}"#).unwrap();
        assert!(AppConfig::load(Some(file.path())).is_err());
    }
}
