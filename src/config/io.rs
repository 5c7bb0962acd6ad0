use std::path::Path;

use super::{schema::Config, validate::ConfigError};

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        // Every key has a default, so an absent file just means "run with
        // the stock configuration".
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            log::info!("config file {} not found, using defaults", path_str);
            let config = Config::default();
            config.validate()?;
            return Ok(config);
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path_str,
                source,
            })
        }
    };
    let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path_str,
        source,
    })?;
    config.validate()?;
    Ok(config)
}
