use std::io::Write;

use crate::{
    chat::{ChatOutcome, ModelClient},
    error::EvalError,
    prompt::PromptBuilder,
    survey::{Record, Survey},
    translation::Translator,
};

use super::report::Report;
use super::types::{EvalSettings, EvalSummary};

/// Grades every answer of a survey, one pair at a time, and writes a report.
///
/// Records are visited in file order and answers in column order. Each
/// model call finishes before the next pair starts.
pub struct SurveyEvaluator<T, M> {
    pub(super) translator: T,
    pub(super) client: M,
    pub(super) settings: EvalSettings,
}

impl<T: Translator, M: ModelClient> SurveyEvaluator<T, M> {
    /// Creates a new evaluator from an already constructed translator and model client.
    pub fn new(translator: T, client: M, settings: EvalSettings) -> Self {
        Self {
            translator,
            client,
            settings,
        }
    }

    pub fn settings(&self) -> &EvalSettings {
        &self.settings
    }

    /// Evaluates the whole survey, writing the report to `out`.
    ///
    /// Model failures are reported inline. Translation failures, malformed
    /// rows and write errors stop the run.
    pub async fn run<W: Write + ?Sized>(
        &self,
        survey: &Survey,
        out: &mut W,
    ) -> Result<EvalSummary, EvalError> {
        let mut report = Report::new(out);
        let mut summary = EvalSummary::default();

        report.preamble(survey.questions())?;
        for record in survey.records() {
            report.record(record.id())?;
            self.evaluate_record(survey, record, &mut report, &mut summary)
                .await?;
            summary.records += 1;
        }

        log::info!(
            "evaluated {} pairs across {} records ({} replies, {} without reply)",
            summary.pairs,
            summary.records,
            summary.replies,
            summary.failures()
        );
        Ok(summary)
    }

    async fn evaluate_record<W: Write + ?Sized>(
        &self,
        survey: &Survey,
        record: &Record,
        report: &mut Report<'_, W>,
        summary: &mut EvalSummary,
    ) -> Result<(), EvalError> {
        let answers = survey.aligned_answers(record, self.settings.row_policy)?;
        log::debug!("record '{}': {} answers", record.id(), answers.len());

        for (question, answer) in survey.question_texts().iter().zip(answers) {
            let outcome = self.evaluate_pair(question, answer).await?;
            summary.count(&outcome);
            report.pair(question, answer, &self.settings.model, &outcome.report_text())?;
        }
        Ok(())
    }

    /// Builds the request for one pair and asks the model to grade it.
    pub async fn evaluate_pair(&self, question: &str, answer: &str) -> Result<ChatOutcome, EvalError> {
        let builder = PromptBuilder::new(&self.translator, self.settings.languages.clone());
        let request = builder.build_request(answer, question).await?;
        let outcome = self
            .client
            .evaluate(&self.settings.model, &request.messages)
            .await;

        if !outcome.is_reply() {
            log::warn!("no assistant reply for question '{question}': {outcome}");
        }
        Ok(outcome)
    }
}
