//! Target configuration loading
//!
//! Two deployment shapes are supported: a YAML list of country targets
//! (`countries.yml`), or a text file holding a single webhook URL that is
//! searched on the default host with the built-in keywords.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use common::TargetConfig;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_TARGETS_FILE: &str = "countries.yml";

/// Keywords used by the single-webhook deployment.
pub const DEFAULT_SEARCH_KEYS: [&str; 4] = [
    "help desk",
    "it support",
    "desktop support",
    "technical support",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration file found at {0}")]
    NotFound(PathBuf),

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid target list in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("target {index} in {path} has no search keys")]
    NoSearchKeys { path: PathBuf, index: usize },

    #[error("target {index} in {path} has an empty webhook")]
    EmptyWebhook { path: PathBuf, index: usize },
}

/// Where targets come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// YAML list of `{country, search_keys, webhook}` entries.
    Targets(PathBuf),
    /// Plain text file with one webhook URL.
    Webhook(PathBuf),
}

impl Default for ConfigSource {
    fn default() -> Self {
        ConfigSource::Targets(PathBuf::from(DEFAULT_TARGETS_FILE))
    }
}

/// Loads every target from `source`, validated.
pub fn load_targets(source: &ConfigSource) -> Result<Vec<TargetConfig>, ConfigError> {
    let (path, targets) = match source {
        ConfigSource::Targets(path) => (path, parse_targets(path, &read(path)?)?),
        ConfigSource::Webhook(path) => (path, vec![webhook_target(&read(path)?)]),
    };

    validate(path, &targets)?;
    info!("Loaded {} target(s) from {}", targets.len(), path.display());
    Ok(targets)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn parse_targets(path: &Path, contents: &str) -> Result<Vec<TargetConfig>, ConfigError> {
    serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn webhook_target(contents: &str) -> TargetConfig {
    TargetConfig {
        country: None,
        search_keys: DEFAULT_SEARCH_KEYS.iter().map(|k| k.to_string()).collect(),
        webhook: contents.trim().to_string(),
    }
}

fn validate(path: &Path, targets: &[TargetConfig]) -> Result<(), ConfigError> {
    for (index, target) in targets.iter().enumerate() {
        if target.search_keys.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::NoSearchKeys {
                path: path.to_path_buf(),
                index,
            });
        }
        if target.webhook.trim().is_empty() {
            return Err(ConfigError::EmptyWebhook {
                path: path.to_path_buf(),
                index,
            });
        }
    }
    Ok(())
}
