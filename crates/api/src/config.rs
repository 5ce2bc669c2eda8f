//! Process configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `ADOPTA_BIND_ADDR` | `0.0.0.0:8080` | listen address |
//! | `ADOPTA_SEED_FILE` | unset | JSON file in page-data shape (`{"products": [...]}`) |
//! | `ADOPTA_LOG_FORMAT` | `json` | `json` or `text` |

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use adopta_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "ADOPTA_BIND_ADDR";
pub const SEED_FILE_VAR: &str = "ADOPTA_SEED_FILE";
pub const LOG_FORMAT_VAR: &str = "ADOPTA_LOG_FORMAT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub seed_file: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed_file: None,
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(BIND_ADDR_VAR) {
            config.bind_addr = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                message: format!("{e}"),
            })?;
        }

        config.seed_file = get(SEED_FILE_VAR).map(PathBuf::from);

        if let Some(raw) = get(LOG_FORMAT_VAR) {
            config.log_format = raw
                .parse()
                .map_err(|message| ConfigError::Invalid {
                    var: LOG_FORMAT_VAR,
                    message,
                })?;
        }

        Ok(config)
    }
}
