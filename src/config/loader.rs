use std::env;

use url::Url;

use super::env::{AppConfig, ConfigError, DirectoryConfig, LoggingConfig, SinkConfig};

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let directories = DirectoryConfig {
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string()),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            export_dir: env::var("EXPORT_DIR").unwrap_or_else(|_| "exports".to_string()),
            db_filename: env::var("DB_FILENAME").unwrap_or_else(|_| "algofeed.db".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        let timezone = env::var("FEED_TIMEZONE").unwrap_or_else(|_| "UTC".to_string());

        let endpoint = match env::var("SINK_ENDPOINT").ok().filter(|v| !v.is_empty()) {
            Some(raw) => Some(Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
                key: "SINK_ENDPOINT",
                source,
            })?),
            None => None,
        };

        let sink = SinkConfig {
            endpoint,
            timeout: std::time::Duration::from_millis(
                env::var("SINK_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(10_000),
            ),
        };

        Ok(Self {
            directories,
            logging,
            timezone,
            sink,
        })
    }
}
