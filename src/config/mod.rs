use crate::core::LimitDefaults;
use crate::core::history::DEFAULT_MAX_HISTORY_DAYS;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    #[serde(default = "default_lunch_minutes")]
    pub lunch_minutes: u32,
    #[serde(default = "default_max_history_days")]
    pub max_history_days: u32,
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_break_minutes() -> u32 {
    15
}
fn default_lunch_minutes() -> u32 {
    60
}
fn default_max_history_days() -> u32 {
    DEFAULT_MAX_HISTORY_DAYS
}
fn default_poll_ms() -> u64 {
    5000
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            break_minutes: default_break_minutes(),
            lunch_minutes: default_lunch_minutes(),
            max_history_days: default_max_history_days(),
            poll_ms: default_poll_ms(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.techpedia`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".techpedia")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("techpedia.conf")
    }

    /// Resolve the config path: explicit override first, then the default.
    pub fn resolve_path(custom: Option<&Path>) -> PathBuf {
        custom.map_or_else(Self::config_file, Path::to_path_buf)
    }

    /// Load configuration from `path`, or return defaults if the file does
    /// not exist. Missing keys take their default values.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write configuration as YAML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn limit_defaults(&self) -> LimitDefaults {
        LimitDefaults {
            break_minutes: self.break_minutes,
            lunch_minutes: self.lunch_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("absent.conf")).expect("load");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("techpedia.conf");
        fs::write(&path, "lunch_minutes: 45\n").expect("write");

        let cfg = Config::load_from(&path).expect("load");
        assert_eq!(cfg.lunch_minutes, 45);
        assert_eq!(cfg.break_minutes, 15);
        assert_eq!(cfg.max_history_days, 183);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("techpedia.conf");
        let cfg = Config {
            poll_ms: 1000,
            color: false,
            ..Config::default()
        };

        cfg.save_to(&path).expect("save");
        assert_eq!(Config::load_from(&path).expect("load"), cfg);
    }

    #[test]
    fn broken_yaml_is_a_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("techpedia.conf");
        fs::write(&path, "break_minutes: [nope\n").expect("write");

        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }
}
