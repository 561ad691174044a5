use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config IO error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("missing home directory for config paths")]
    MissingHome,
}
