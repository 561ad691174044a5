use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::error::ConfigError;
use super::paths::ConfigPaths;
use super::types::AppConfig;

/// Reads the configuration file, falling back to defaults when the default file is absent.
pub fn load_config(path_override: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let paths = ConfigPaths::resolve(path_override)?;
    read_config(&paths)
}

fn read_config(paths: &ConfigPaths) -> Result<AppConfig, ConfigError> {
    match fs::read_to_string(&paths.config_file) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(err) if err.kind() == ErrorKind::NotFound && !paths.required => {
            Ok(AppConfig::default())
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(ConfigError::NotFound(paths.config_file.clone()))
        }
        Err(err) => Err(ConfigError::Io(err)),
    }
}
