use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "new_form.csv";

#[derive(Parser, Debug)]
#[command(
    name = "survey-eval",
    about = "Grade free-text survey answers with a local Ollama model"
)]
pub struct CliArgs {
    /// Survey export to grade (CSV, first column identifies the respondent)
    #[arg(index = 1, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
    /// Configuration file (TOML)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    /// Model used to grade every answer
    #[arg(long, short = 'm', env = "SURVEY_EVAL_MODEL")]
    pub model: Option<String>,
    /// Base URL of the Ollama server
    #[arg(long, env = "OLLAMA_URL")]
    pub ollama_url: Option<String>,
    /// Send questions and answers to the model untranslated
    #[arg(long)]
    pub no_translate: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults_to_form_export() {
        let args = CliArgs::parse_from(["survey-eval"]);
        assert_eq!(args.input, PathBuf::from(DEFAULT_INPUT));
        assert!(!args.no_translate);
    }

    #[test]
    fn positional_input_and_flags() {
        let args = CliArgs::parse_from([
            "survey-eval",
            "answers.csv",
            "--model",
            "llama3:8b",
            "--no-translate",
        ]);
        assert_eq!(args.input, PathBuf::from("answers.csv"));
        assert_eq!(args.model.as_deref(), Some("llama3:8b"));
        assert!(args.no_translate);
    }
}
