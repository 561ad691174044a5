use serde::Deserialize;
use survey_eval::backends::google::DEFAULT_GOOGLE_TRANSLATE_URL;
use survey_eval::translation::LanguagePair;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub enabled: bool,
    pub source: String,
    pub target: String,
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl TranslationConfig {
    pub fn languages(&self) -> LanguagePair {
        LanguagePair::new(self.source.as_str(), self.target.as_str())
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        let languages = LanguagePair::default();
        Self {
            enabled: true,
            source: languages.source.code().to_string(),
            target: languages.target.code().to_string(),
            base_url: DEFAULT_GOOGLE_TRANSLATE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}
