use async_trait::async_trait;

use super::message::ChatMessage;
use super::outcome::ChatOutcome;

/// Trait for services that can grade a chat conversation with a named model.
///
/// Implementations absorb their own failures into [`ChatOutcome`] so that a
/// single failed call degrades to an inline message rather than an error.
#[async_trait]
pub trait ModelClient: Sync + Send {
    async fn evaluate(&self, model: &str, messages: &[ChatMessage]) -> ChatOutcome;
}

#[async_trait]
impl<T: ModelClient + ?Sized> ModelClient for Box<T> {
    async fn evaluate(&self, model: &str, messages: &[ChatMessage]) -> ChatOutcome {
        (**self).evaluate(model, messages).await
    }
}
