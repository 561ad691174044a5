use serde::Deserialize;
use survey_eval::backends::ollama::DEFAULT_OLLAMA_URL;
use survey_eval::evaluator::DEFAULT_MODEL;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            timeout_seconds: None,
        }
    }
}
