use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rolodex_core::rules::{validate_window_days, WeekdayOrder, WindowPolicy};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "rolodex";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_PROMPT: &str = "Enter your command: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub prompt: String,
    pub birthdays: WindowPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            birthdays: WindowPolicy::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid birthdays.window_days value: {0}")]
    InvalidWindowDays(i64),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    prompt: Option<String>,
    birthdays: Option<BirthdaysFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BirthdaysFile {
    window_days: Option<i64>,
    order: Option<WeekdayOrder>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(prompt) = parsed.prompt {
        config.prompt = prompt;
    }

    if let Some(birthdays) = parsed.birthdays {
        if let Some(days) = birthdays.window_days {
            config.birthdays.window_days =
                validate_window_days(days).map_err(|_| ConfigError::InvalidWindowDays(days))?;
        }
        if let Some(order) = birthdays.order {
            config.birthdays.order = order;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{
        load, load_at_path, merge_config, resolve_config_path, AppConfig, BirthdaysFile,
        ConfigError, ConfigFile,
    };
    use rolodex_core::rules::WeekdayOrder;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            prompt: Some("> ".to_string()),
            birthdays: Some(BirthdaysFile {
                window_days: Some(14),
                order: Some(WeekdayOrder::Calendar),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.prompt, "> ");
        assert_eq!(merged.birthdays.window_days, 14);
        assert_eq!(merged.birthdays.order, WeekdayOrder::Calendar);
    }

    #[test]
    fn merge_config_rejects_bad_window() {
        let parsed = ConfigFile {
            prompt: None,
            birthdays: Some(BirthdaysFile {
                window_days: Some(0),
                order: None,
            }),
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWindowDays(0)));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "prompt = \"rolodex> \"\n[birthdays]\nwindow_days = 10\norder = \"first-seen\"\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.prompt, "rolodex> ");
        assert_eq!(config.birthdays.window_days, 10);
        assert_eq!(config.birthdays.order, WeekdayOrder::FirstSeen);
    }

    #[test]
    fn load_at_path_rejects_unknown_fields() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[birthdays]\nshift_weekends = false\n").expect("write config");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_with_explicit_path_returns_defaults_for_empty_file() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "").expect("write config");
        let config = load(Some(path)).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn resolve_config_path_rejects_empty_custom_path() {
        let err = resolve_config_path(Some(PathBuf::new())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfigPath(_)));
    }
}
