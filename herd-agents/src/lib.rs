pub mod gift_advisor;
pub mod llm;
pub mod storage;

pub use gift_advisor::GiftAdvisorAgent;
pub use llm::{AnthropicClient, CompletionClient, CompletionError, CompletionRequest, RetryPolicy};
pub use storage::ContactDirectory;
