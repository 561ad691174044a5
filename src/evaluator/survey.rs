#[path = "survey/types.rs"]
mod types;

#[path = "survey/report.rs"]
mod report;

#[path = "survey/evaluator.rs"]
mod evaluator;


pub use evaluator::SurveyEvaluator;
pub use types::{EvalSettings, EvalSummary, DEFAULT_MODEL};
