mod survey;

pub use survey::{EvalSettings, EvalSummary, SurveyEvaluator, DEFAULT_MODEL};
