use std::fmt;

/// Text reported when the model answers with a well-formed body that is not an assistant reply.
pub const FALLBACK_REPLY: &str = "assistant response unavailable";

/// Result of a single model call.
///
/// Model failures never abort a run; they are carried here and rendered
/// inline in the report instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The model replied with an assistant message.
    AssistantReply(String),
    /// The service answered successfully but without an assistant message.
    Unrecognized,
    /// The request failed: connection, status code, timeout or undecodable body.
    TransportError(String),
}

impl ChatOutcome {
    /// Text to print as the evaluation of an answer.
    pub fn report_text(&self) -> String {
        match self {
            ChatOutcome::AssistantReply(content) => content.clone(),
            ChatOutcome::Unrecognized => FALLBACK_REPLY.to_string(),
            ChatOutcome::TransportError(detail) => {
                format!("Error communicating with Ollama: {detail}")
            }
        }
    }

    pub fn is_reply(&self) -> bool {
        matches!(self, ChatOutcome::AssistantReply(_))
    }
}

impl fmt::Display for ChatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report_text())
    }
}
