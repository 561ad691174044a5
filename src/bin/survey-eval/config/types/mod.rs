mod app;
mod input;
mod logging;
mod model;
mod translation;

const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;

pub use app::AppConfig;
pub use input::InputConfig;
pub use logging::LoggingConfig;
pub use model::ModelConfig;
pub use translation::TranslationConfig;
