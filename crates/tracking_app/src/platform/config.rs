//! Configuration for the tracking binary.
//!
//! Values come from command-line flags (which also read `TRACKING_*`
//! environment variables), then the RON file, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracking_core::{Locale, UnknownLocale};
use tracking_engine::DEFAULT_BASE_URL;
use tracking_logging::LogDestination;

use super::cli::Cli;

const DEFAULT_CONFIG_FILENAME: &str = "tracking.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
    Off,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
            LogTarget::Off => LogDestination::Off,
        }
    }
}

/// On-disk shape; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct FileConfig {
    api_base_url: Option<String>,
    locale: Option<String>,
    connect_timeout_secs: Option<u64>,
    request_timeout_secs: Option<u64>,
    history_file: Option<PathBuf>,
    log: Option<LogTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// `None` when neither flags nor file chose one; the page path decides then.
    pub locale: Option<Locale>,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub history_file: Option<PathBuf>,
    pub log: LogTarget,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error(transparent)]
    Locale(#[from] UnknownLocale),
}

pub fn resolve(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let file = match &cli.config {
        Some(path) => load_file(path)?,
        None => load_optional_file(Path::new(DEFAULT_CONFIG_FILENAME))?,
    };
    merge(cli, file)
}

fn merge(cli: &Cli, file: FileConfig) -> Result<AppConfig, ConfigError> {
    let locale = match cli.locale.as_deref().or(file.locale.as_deref()) {
        Some(code) => Some(code.parse::<Locale>()?),
        None => None,
    };
    Ok(AppConfig {
        api_base_url: cli
            .api_base_url
            .clone()
            .or(file.api_base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        locale,
        connect_timeout: file.connect_timeout_secs.map(Duration::from_secs),
        request_timeout: file.request_timeout_secs.map(Duration::from_secs),
        history_file: file.history_file,
        log: cli.log.or(file.log).unwrap_or_default(),
    })
}

fn load_optional_file(path: &Path) -> Result<FileConfig, ConfigError> {
    if path.exists() {
        load_file(path)
    } else {
        Ok(FileConfig::default())
    }
}

fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_apply_without_flags_or_file() {
        let config = merge(&Cli::default(), FileConfig::default()).unwrap();

        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.locale, None);
        assert_eq!(config.log, LogTarget::File);
        assert_eq!(config.connect_timeout, None);
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn flags_override_file_values() {
        let cli = Cli {
            api_base_url: Some("http://flag.example/".to_string()),
            locale: Some("en".to_string()),
            ..Cli::default()
        };
        let file = FileConfig {
            api_base_url: Some("http://file.example/".to_string()),
            locale: Some("id".to_string()),
            log: Some(LogTarget::Off),
            ..FileConfig::default()
        };

        let config = merge(&cli, file).unwrap();

        assert_eq!(config.api_base_url, "http://flag.example/");
        assert_eq!(config.locale, Some(Locale::En));
        assert_eq!(config.log, LogTarget::Off);
    }

    #[test]
    fn ron_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracking.ron");
        fs::write(
            &path,
            r#"(
                api_base_url: Some("http://file.example/"),
                connect_timeout_secs: Some(3),
                request_timeout_secs: Some(15),
                history_file: Some("links.txt"),
                log: Some(terminal),
            )"#,
        )
        .unwrap();

        let file = load_file(&path).unwrap();
        let config = merge(&Cli::default(), file).unwrap();

        assert_eq!(config.api_base_url, "http://file.example/");
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.history_file, Some(PathBuf::from("links.txt")));
        assert_eq!(config.log, LogTarget::Terminal);
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let cli = Cli {
            locale: Some("fr".to_string()),
            ..Cli::default()
        };
        assert!(matches!(
            merge(&cli, FileConfig::default()),
            Err(ConfigError::Locale(_))
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_file(&dir.path().join("missing.ron"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
