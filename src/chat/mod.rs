mod message;
mod outcome;
mod traits;

pub use message::{ChatMessage, ChatMessageBuilder, ChatRole};
pub use outcome::{ChatOutcome, FALLBACK_REPLY};
pub use traits::ModelClient;
