use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 6969;
const DEFAULT_DATASET_PATH: &str = "./static/quran-final.json";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub dataset: DatasetSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("QURAN_API_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("QURAN_API")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;
        config.normalize();

        Ok(config)
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn normalize(&mut self) {
        if self.logging.level.trim().is_empty() {
            self.logging.level = "info".to_string();
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatasetSection {
    pub path: String,
    /// Reject datasets that break the numbering invariants at load time.
    pub validate: bool,
}

impl Default for DatasetSection {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATASET_PATH.to_string(),
            validate: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> AppConfig {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap();
        let mut config: AppConfig = settings.try_deserialize().unwrap();
        config.normalize();
        config
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:6969");
        assert_eq!(config.dataset.path, "./static/quran-final.json");
        assert!(config.dataset.validate);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = from_toml(
            r#"
            [server]
            port = 8080

            [dataset]
            validate = false

            [logging]
            level = ""
            format = "json"
            "#,
        );

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.dataset.path, DEFAULT_DATASET_PATH);
        assert!(!config.dataset.validate);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
    }
}
