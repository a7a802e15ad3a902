//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::fetch::FetcherConfig;

/// Default listen address.
const DEFAULT_LISTEN: &str = "0.0.0.0:50052";

/// Default base URL for train documents.
const DEFAULT_SOURCE_URL: &str = "http://127.0.0.1:8081/trains";

const LISTEN_VAR: &str = "TRAIN_STATUS_LISTEN";
const SOURCE_URL_VAR: &str = "TRAIN_STATUS_SOURCE_URL";
const MOCK_DIR_VAR: &str = "TRAIN_STATUS_MOCK_DIR";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}: {message}")]
    Invalid {
        var: &'static str,
        value: String,
        message: String,
    },
}

/// Where train records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// Fetch JSON train documents from `{base_url}/{number}`.
    Remote { base_url: String },
    /// Serve records from a directory of `{number}.json` files.
    Mock { data_dir: PathBuf },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub listen: SocketAddr,
    /// Record source
    pub source: SourceConfig,
    /// HTTP transport settings
    pub fetcher: FetcherConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_value = lookup(LISTEN_VAR).unwrap_or_else(|| DEFAULT_LISTEN.to_string());
        let listen = listen_value
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: LISTEN_VAR,
                value: listen_value.clone(),
                message: e.to_string(),
            })?;

        let source = match lookup(MOCK_DIR_VAR).filter(|dir| !dir.is_empty()) {
            Some(dir) => SourceConfig::Mock {
                data_dir: PathBuf::from(dir),
            },
            None => {
                let base_url = lookup(SOURCE_URL_VAR).unwrap_or_else(|| {
                    tracing::warn!("{SOURCE_URL_VAR} not set, using {DEFAULT_SOURCE_URL}");
                    DEFAULT_SOURCE_URL.to_string()
                });
                reqwest::Url::parse(&base_url).map_err(|e| ConfigError::Invalid {
                    var: SOURCE_URL_VAR,
                    value: base_url.clone(),
                    message: e.to_string(),
                })?;
                SourceConfig::Remote { base_url }
            }
        };

        Ok(Self {
            listen,
            source,
            fetcher: FetcherConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.listen, "0.0.0.0:50052".parse().unwrap());
        assert_eq!(
            config.source,
            SourceConfig::Remote {
                base_url: DEFAULT_SOURCE_URL.to_string()
            }
        );
        assert_eq!(config.fetcher.max_attempts, 5);
    }

    #[test]
    fn custom_values() {
        let config = config(&[
            (LISTEN_VAR, "127.0.0.1:9000"),
            (SOURCE_URL_VAR, "https://vt.example/api/trains"),
        ])
        .unwrap();

        assert_eq!(config.listen.port(), 9000);
        assert_eq!(
            config.source,
            SourceConfig::Remote {
                base_url: "https://vt.example/api/trains".to_string()
            }
        );
    }

    #[test]
    fn mock_dir_takes_precedence() {
        let config = config(&[
            (MOCK_DIR_VAR, "data/mock_trains"),
            (SOURCE_URL_VAR, "https://vt.example"),
        ])
        .unwrap();

        assert_eq!(
            config.source,
            SourceConfig::Mock {
                data_dir: PathBuf::from("data/mock_trains")
            }
        );
    }

    #[test]
    fn invalid_listen_address() {
        let err = config(&[(LISTEN_VAR, "not-an-address")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid TRAIN_STATUS_LISTEN"));
    }

    #[test]
    fn invalid_source_url() {
        let err = config(&[(SOURCE_URL_VAR, "::nope")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid TRAIN_STATUS_SOURCE_URL"));
    }
}
