//! Translation of survey text before it is shown to the model.
//!
//! The [`Translator`] trait is the seam between the prompt builder and a
//! concrete service. [`crate::backends::google::GoogleTranslate`] talks to
//! the Google Translate web endpoint; [`IdentityTranslator`] passes text
//! through unchanged.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// A language code as understood by the translation service (`ru`, `en`, `auto`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Source and destination of a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    pub fn new(source: impl Into<Language>, target: impl Into<Language>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Russian to English.
impl Default for LanguagePair {
    fn default() -> Self {
        Self::new("ru", "en")
    }
}

/// Trait for services that translate text between two languages.
///
/// No caching and no retries: every call reaches the service, and any
/// failure is returned to the caller.
#[async_trait]
pub trait Translator: Sync + Send {
    async fn translate(
        &self,
        text: &str,
        source: &Language,
        target: &Language,
    ) -> Result<String, EvalError>;
}

#[async_trait]
impl<T: Translator + ?Sized> Translator for Box<T> {
    async fn translate(
        &self,
        text: &str,
        source: &Language,
        target: &Language,
    ) -> Result<String, EvalError> {
        (**self).translate(text, source, target).await
    }
}

/// Translator that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

#[async_trait]
impl Translator for IdentityTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &Language,
        _target: &Language,
    ) -> Result<String, EvalError> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pair_is_russian_to_english() {
        let pair = LanguagePair::default();
        assert_eq!(pair.source.code(), "ru");
        assert_eq!(pair.target.code(), "en");
    }

    #[tokio::test]
    async fn identity_translator_passes_text_through() {
        let pair = LanguagePair::new("de", "fr");
        let out = IdentityTranslator
            .translate("Guten Tag", &pair.source, &pair.target)
            .await
            .unwrap();
        assert_eq!(out, "Guten Tag");
    }
}
