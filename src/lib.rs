//! Grade free-text survey answers with a local language model.
//!
//! A survey export (CSV: identifier column, then one column per question) is
//! loaded with [`survey::load_survey`]. For every answer, the question and
//! answer are translated through a [`translation::Translator`], turned into a
//! grading prompt by [`prompt::PromptBuilder`] and sent to a
//! [`chat::ModelClient`] such as [`backends::ollama::Ollama`].
//! [`evaluator::SurveyEvaluator`] drives the whole run and writes the report.

pub mod backends;
pub mod chat;
pub mod error;
pub mod evaluator;
pub mod prompt;
pub mod survey;
pub mod translation;

pub use error::EvalError;
