use serde::Deserialize;

use super::{InputConfig, LoggingConfig, ModelConfig, TranslationConfig};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub translation: TranslationConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}
