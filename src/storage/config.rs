use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub google: GoogleConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub token_cache: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    /// Calendar the reminder posts are written to.
    pub id: String,
    /// IANA zone name sent with every created event.
    pub time_zone: String,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("socialcal")
            .join("config.toml")
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .expect("Failed to serialize config");
        std::fs::write(&config_path, content)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("socialcal");

        Self {
            google: GoogleConfig {
                client_id: String::new(),
                client_secret: String::new(),
                token_cache: config_dir.join("token.json"),
            },
            calendar: CalendarConfig {
                id: "primary".to_string(),
                time_zone: "America/Chicago".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_primary_calendar() {
        let config = Config::default();
        assert_eq!(config.calendar.id, "primary");
    }

    #[test]
    fn default_config_uses_chicago_time_zone() {
        let config = Config::default();
        assert_eq!(config.calendar.time_zone, "America/Chicago");
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [google]
            client_id = "test_client_id"
            client_secret = "test_secret"
            token_cache = "/tmp/token.json"

            [calendar]
            id = "bookings@example.com"
            time_zone = "America/New_York"
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.google.client_id, "test_client_id");
        assert_eq!(config.calendar.id, "bookings@example.com");
        assert_eq!(config.calendar.time_zone, "America/New_York");
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let invalid_toml = "this is not valid toml";
        let result = Config::from_toml(invalid_toml);
        assert!(result.is_err());
    }

    #[test]
    fn parse_missing_section_returns_error() {
        let toml_content = r#"
            [google]
            client_id = "id"
            client_secret = "secret"
            token_cache = "/tmp/token.json"
        "#;

        assert!(Config::from_toml(toml_content).is_err());
    }
}
