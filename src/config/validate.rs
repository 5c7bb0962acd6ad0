use thiserror::Error;

use super::schema::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Validation(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_servers == 0 {
            return Err(ConfigError::Validation(
                "num_servers must be at least 1".to_string(),
            ));
        }
        if self.missing_data_prob.is_nan() || !(0.0..=1.0).contains(&self.missing_data_prob) {
            return Err(ConfigError::Validation(
                "missing_data_prob must be between 0 and 1".to_string(),
            ));
        }
        if self.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "interval_secs must be greater than 0".to_string(),
            ));
        }
        if self.interval_secs > 86_400 {
            return Err(ConfigError::Validation(
                "interval_secs must not exceed one day".to_string(),
            ));
        }
        if self.output.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
