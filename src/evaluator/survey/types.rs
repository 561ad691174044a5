use crate::chat::ChatOutcome;
use crate::survey::RowPolicy;
use crate::translation::LanguagePair;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "deepseek-r1:1.5b";

/// Settings shared by every evaluation in a run.
#[derive(Debug, Clone)]
pub struct EvalSettings {
    /// Model name passed to the model client on every call.
    pub model: String,
    /// Direction in which questions and answers are translated.
    pub languages: LanguagePair,
    /// Treatment of records narrower than the header.
    pub row_policy: RowPolicy,
}

impl Default for EvalSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            languages: LanguagePair::default(),
            row_policy: RowPolicy::default(),
        }
    }
}

/// Counts of what happened during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalSummary {
    pub records: usize,
    pub pairs: usize,
    pub replies: usize,
    pub unrecognized: usize,
    pub transport_errors: usize,
}

impl EvalSummary {
    pub(super) fn count(&mut self, outcome: &ChatOutcome) {
        self.pairs += 1;
        match outcome {
            ChatOutcome::AssistantReply(_) => self.replies += 1,
            ChatOutcome::Unrecognized => self.unrecognized += 1,
            ChatOutcome::TransportError(_) => self.transport_errors += 1,
        }
    }

    /// Pairs for which no assistant reply was obtained.
    pub fn failures(&self) -> usize {
        self.unrecognized + self.transport_errors
    }
}
