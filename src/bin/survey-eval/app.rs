use std::io;

use anyhow::Context;
use clap::Parser;
use survey_eval::backends::{google::GoogleTranslate, ollama::Ollama};
use survey_eval::evaluator::{EvalSettings, SurveyEvaluator};
use survey_eval::survey::load_survey;
use survey_eval::translation::{IdentityTranslator, Translator};

use crate::args::CliArgs;
use crate::config::{load_config, AppConfig, TranslationConfig};
use crate::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let mut config = load_config(args.config.clone())?;
    apply_overrides(&mut config, &args);
    let _logger = init_logging(&config.logging)?;

    let survey = load_survey(&args.input)
        .with_context(|| format!("failed to load survey from {}", args.input.display()))?;
    log::info!(
        "grading {} records from {} with {}",
        survey.len(),
        args.input.display(),
        config.model.name
    );

    let translator = build_translator(&config.translation)?;
    let client = Ollama::new(config.model.base_url.as_str(), config.model.timeout_seconds)?;
    let settings = EvalSettings {
        model: config.model.name.clone(),
        languages: config.translation.languages(),
        row_policy: config.input.row_policy,
    };
    let evaluator = SurveyEvaluator::new(translator, client, settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = evaluator
        .run(&survey, &mut out)
        .await
        .context("evaluation aborted")?;

    if summary.failures() > 0 {
        log::warn!(
            "{} of {} answers could not be graded",
            summary.failures(),
            summary.pairs
        );
    }
    Ok(())
}

fn apply_overrides(config: &mut AppConfig, args: &CliArgs) {
    if let Some(model) = &args.model {
        config.model.name = model.clone();
    }
    if let Some(url) = &args.ollama_url {
        config.model.base_url = url.clone();
    }
    if args.no_translate {
        config.translation.enabled = false;
    }
}

fn build_translator(config: &TranslationConfig) -> anyhow::Result<Box<dyn Translator>> {
    if !config.enabled {
        log::info!("translation disabled");
        return Ok(Box::new(IdentityTranslator));
    }
    Ok(Box::new(GoogleTranslate::new(
        config.base_url.as_str(),
        config.timeout_seconds,
    )?))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn flags_override_config_values() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            input: PathBuf::from("in.csv"),
            config: None,
            model: Some("qwen2:7b".into()),
            ollama_url: Some("http://gpu-box:11434".into()),
            no_translate: true,
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.model.name, "qwen2:7b");
        assert_eq!(config.model.base_url, "http://gpu-box:11434");
        assert!(!config.translation.enabled);
    }

    #[test]
    fn absent_flags_keep_config_values() {
        let mut config = AppConfig::default();
        config.model.name = "from-file".into();
        let args = CliArgs {
            input: PathBuf::from("in.csv"),
            config: None,
            model: None,
            ollama_url: None,
            no_translate: false,
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.model.name, "from-file");
        assert!(config.translation.enabled);
    }
}
