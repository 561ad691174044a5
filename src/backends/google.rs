//! Google Translate client for the public `translate_a/single` web endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::EvalError;
use crate::translation::{Language, Translator};

pub const DEFAULT_GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com";

/// Configuration for the Google Translate client.
#[derive(Debug)]
pub struct GoogleTranslateConfig {
    /// Base URL of the service, without the `/translate_a/single` path.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

/// Client for the Google Translate web endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslate {
    pub config: Arc<GoogleTranslateConfig>,
    pub client: Client,
}

impl GoogleTranslate {
    pub fn new(base_url: impl Into<String>, timeout_seconds: Option<u64>) -> Result<Self, EvalError> {
        let mut builder = Client::builder();
        if let Some(sec) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(sec));
        }
        Ok(Self::with_client(builder.build()?, base_url, timeout_seconds))
    }

    /// Creates a new client with a custom HTTP client.
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        timeout_seconds: Option<u64>,
    ) -> Self {
        Self {
            config: Arc::new(GoogleTranslateConfig {
                base_url: base_url.into(),
                timeout_seconds,
            }),
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/translate_a/single",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn fetch(&self, text: &str, source: &Language, target: &Language) -> Result<String, reqwest::Error> {
        let mut request = self.client.get(self.endpoint()).query(&[
            ("client", "gtx"),
            ("sl", source.code()),
            ("tl", target.code()),
            ("dt", "t"),
            ("q", text),
        ]);
        if let Some(timeout) = self.config.timeout_seconds {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let resp = request.send().await?;
        log::debug!("Google Translate HTTP status: {}", resp.status());
        resp.error_for_status()?.text().await
    }
}

#[async_trait]
impl Translator for GoogleTranslate {
    async fn translate(
        &self,
        text: &str,
        source: &Language,
        target: &Language,
    ) -> Result<String, EvalError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let raw = self
            .fetch(text, source, target)
            .await
            .map_err(|e| EvalError::Translation(format!("{source} -> {target}: {e}")))?;
        let translated = parse_translation(&raw)?;
        log::trace!("translated {:?} -> {:?}", text, translated);
        Ok(translated)
    }
}

/// Joins the translated segments of a `translate_a/single` body.
///
/// The body is a nested array whose first element lists the sentences as
/// `[translated, original, ...]`; entries without a translated string are skipped.
pub(crate) fn parse_translation(raw: &str) -> Result<String, EvalError> {
    let value: Value = serde_json::from_str(raw)?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| EvalError::ResponseFormat {
            message: "missing translated sentences".to_string(),
            raw_response: raw.to_string(),
        })?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};

    use super::*;

    #[test]
    fn parse_translation_joins_sentences() {
        let raw = r#"[[["The sky is blue. ","Небо голубое. ",null,null,10],["Yes.","Да.",null,null,10],[null,null,"Nebo goluboye. Da."]],null,"ru"]"#;
        assert_eq!(parse_translation(raw).unwrap(), "The sky is blue. Yes.");
    }

    #[test]
    fn parse_translation_rejects_unexpected_shape() {
        let err = parse_translation(r#"{"error":"quota"}"#).unwrap_err();
        assert!(matches!(err, EvalError::ResponseFormat { .. }));
    }

    #[tokio::test]
    async fn translate_sends_language_pair() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/translate_a/single")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("sl".into(), "ru".into()),
                Matcher::UrlEncoded("tl".into(), "en".into()),
                Matcher::UrlEncoded("q".into(), "Небо голубое?".into()),
            ]))
            .with_status(200)
            .with_body(r#"[[["Is the sky blue?","Небо голубое?",null,null,10]],null,"ru"]"#)
            .create_async()
            .await;

        let translator = GoogleTranslate::new(server.url(), None).unwrap();
        let out = translator
            .translate("Небо голубое?", &"ru".into(), &"en".into())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(out, "Is the sky blue?");
    }

    #[tokio::test]
    async fn translate_calls_service_every_time() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/translate_a/single")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"[[["Yes","Да",null,null,10]],null,"ru"]"#)
            .expect(2)
            .create_async()
            .await;

        let translator = GoogleTranslate::new(server.url(), None).unwrap();
        for _ in 0..2 {
            translator
                .translate("Да", &"ru".into(), &"en".into())
                .await
                .unwrap();
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn translate_propagates_http_failure() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/translate_a/single")
            .match_query(Matcher::Any)
            .with_status(429)
            .create_async()
            .await;

        let translator = GoogleTranslate::new(server.url(), None).unwrap();
        let err = translator
            .translate("Да", &"ru".into(), &"en".into())
            .await
            .unwrap_err();
        assert!(matches!(err, EvalError::Translation(ref m) if m.contains("429")));
    }

    #[tokio::test]
    async fn blank_text_skips_the_service() {
        let translator = GoogleTranslate::new("http://127.0.0.1:1", None).unwrap();
        let out = translator
            .translate("  ", &"ru".into(), &"en".into())
            .await
            .unwrap();
        assert_eq!(out, "  ");
    }
}
