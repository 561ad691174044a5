use std::path::PathBuf;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

use crate::config::LoggingConfig;

/// Starts the logger. `RUST_LOG` takes precedence over the configured level.
///
/// Logs go to stderr unless a file is configured, so they never mix with the report.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(&config.level)?;
    let logger = match config.path.as_ref().map(PathBuf::from) {
        Some(log_path) => {
            let directory = log_path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let basename = log_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("survey-eval")
                .to_string();
            logger
                .log_to_file(FileSpec::default().directory(directory).basename(basename))
                .rotate(
                    Criterion::Size(config.rotate_size),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(config.rotate_keep),
                )
        }
        None => logger.log_to_stderr(),
    };
    Ok(logger.start()?)
}
