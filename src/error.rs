use thiserror::Error;

/// Error types that can occur while loading a survey or evaluating its answers.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Input file could not be opened or read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Input file content is not a usable survey table
    #[error("Invalid input: {0}")]
    Input(String),
    /// CSV tokenizer errors
    #[error("CSV error: {0}")]
    Csv(String),
    /// A data row whose width does not line up with the header
    #[error("Malformed row for record '{record}': {answers} answers for {questions} questions")]
    MalformedRow {
        record: String,
        answers: usize,
        questions: usize,
    },
    /// HTTP request/response errors
    #[error("HTTP error: {0}")]
    Http(String),
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    Json(String),
    /// API response parsing or format error
    #[error("Response format error: {message}. Raw response: {raw_response}")]
    ResponseFormat {
        message: String,
        raw_response: String,
    },
    /// Errors returned by the translation service
    #[error("Translation error: {0}")]
    Translation(String),
}

/// Converts reqwest HTTP errors into EvalErrors
impl From<reqwest::Error> for EvalError {
    fn from(err: reqwest::Error) -> Self {
        EvalError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        EvalError::Json(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}

impl From<csv::Error> for EvalError {
    fn from(err: csv::Error) -> Self {
        EvalError::Csv(err.to_string())
    }
}
