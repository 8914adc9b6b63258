pub mod anthropic;
pub mod retry;

pub use anthropic::AnthropicClient;
pub use retry::{complete_with_retry, RetryPolicy};

use async_trait::async_trait;

/// One text-completion call: a model identifier, an output size cap,
/// and a single prompt.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub max_tokens: u32,
    pub prompt: String,
}

/// Failures from the completion service. `Overloaded` is the only
/// retryable condition; everything else is fatal for the request.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion service overloaded")]
    Overloaded,

    #[error("completion request failed (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion transport error: {0}")]
    Transport(String),
}

/// The external text-generation service, treated as opaque.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
