use std::path::PathBuf;

use super::error::ConfigError;

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    /// Whether the path was given explicitly and therefore must exist.
    pub required: bool,
}

impl ConfigPaths {
    pub fn resolve(config_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = config_override {
            return Ok(Self {
                config_file: path,
                required: true,
            });
        }
        Ok(Self {
            config_file: default_config_dir()?.join("config.toml"),
            required: false,
        })
    }
}

fn default_config_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::MissingHome)?;
    Ok(home.join(".config").join("survey-eval"))
}
