//! Builds the grading request sent to the model for one question/answer pair.

use crate::chat::ChatMessage;
use crate::error::EvalError;
use crate::translation::{LanguagePair, Translator};

/// A question/answer pair, its translation and the conversation built from it.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub question: String,
    pub answer: String,
    pub translated_question: String,
    pub translated_answer: String,
    pub messages: Vec<ChatMessage>,
}

/// Renders the grading instruction for an already translated pair.
pub fn compose_prompt(translated_answer: &str, translated_question: &str) -> String {
    format!(
        "Is the answer '{translated_answer}' to the question '{translated_question}'? \
         Rate the answer on a scale of 1 to 10 and explain your choice."
    )
}

/// Translates survey text and wraps it into a single user message.
pub struct PromptBuilder<'a, T: Translator + ?Sized> {
    translator: &'a T,
    languages: LanguagePair,
}

impl<'a, T: Translator + ?Sized> PromptBuilder<'a, T> {
    pub fn new(translator: &'a T, languages: LanguagePair) -> Self {
        Self {
            translator,
            languages,
        }
    }

    pub fn languages(&self) -> &LanguagePair {
        &self.languages
    }

    /// Messages asking the model to rate `answer` as a reply to `question`.
    pub async fn build_prompt(
        &self,
        answer: &str,
        question: &str,
    ) -> Result<Vec<ChatMessage>, EvalError> {
        Ok(self.build_request(answer, question).await?.messages)
    }

    /// Translates both texts and composes the request.
    ///
    /// Both translations must succeed; there is no untranslated fallback.
    pub async fn build_request(
        &self,
        answer: &str,
        question: &str,
    ) -> Result<EvaluationRequest, EvalError> {
        let LanguagePair { source, target } = &self.languages;
        let (translated_question, translated_answer) = futures::try_join!(
            self.translator.translate(question, source, target),
            self.translator.translate(answer, source, target),
        )?;

        let prompt = compose_prompt(&translated_answer, &translated_question);
        log::trace!("prompt: {prompt}");

        Ok(EvaluationRequest {
            question: question.to_string(),
            answer: answer.to_string(),
            translated_question,
            translated_answer,
            messages: vec![ChatMessage::user().content(prompt).build()],
        })
    }
}
