//! Application configuration: where the data and backups live.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level registrar configuration, read from `registrar.toml`.
/// Every field has a default, so the file is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding `students.csv` and `courses.csv`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory holding backup folders. Defaults to `<data_dir>/backups`.
    #[serde(default)]
    pub backup_dir: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./registrar-data")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            backup_dir: None,
        }
    }
}

impl AppConfig {
    pub fn students_file(&self) -> PathBuf {
        self.data_dir.join("students.csv")
    }

    pub fn courses_file(&self) -> PathBuf {
        self.data_dir.join("courses.csv")
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.backup_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("backups"))
    }
}

/// Load config from an explicit path, or `registrar.toml` in the current
/// directory if present, or defaults. A `--data-dir` flag wins over the
/// file.
pub fn load_config_from(path: Option<&Path>, data_dir: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("config file not found: {}", p.display());
            }
            Some(p.to_path_buf())
        }
        None => {
            let local = PathBuf::from("registrar.toml");
            local.exists().then_some(local)
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<AppConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => AppConfig::default(),
    };

    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_file() {
        let config = AppConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./registrar-data"));
        assert_eq!(
            config.backup_dir(),
            PathBuf::from("./registrar-data/backups")
        );
    }

    #[test]
    fn parses_partial_toml() {
        let config: AppConfig = toml::from_str("data_dir = \"/tmp/campus\"").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/campus"));
        assert_eq!(config.backup_dir(), PathBuf::from("/tmp/campus/backups"));
    }

    #[test]
    fn explicit_backup_dir_wins() {
        let config: AppConfig =
            toml::from_str("data_dir = \"/tmp/campus\"\nbackup_dir = \"/var/backups\"").unwrap();
        assert_eq!(config.backup_dir(), PathBuf::from("/var/backups"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        assert!(load_config_from(Some(Path::new("/nonexistent.toml")), None).is_err());
    }

    #[test]
    fn data_dir_flag_overrides() {
        let config = load_config_from(None, Some(PathBuf::from("/elsewhere"))).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/elsewhere"));
    }
}
