use serde::{Deserialize, Serialize};

pub mod chat;
pub mod contact;
pub mod import;
pub mod storage;
pub mod waitlist;

pub use chat::{
    ChatRequest, ChatResponse, ChatRole, ChatTurn, GiftProduct, ProductRecommendation,
};
pub use contact::{
    Contact, ContactsResponse, CreateContactRequest, NewContact, UpdateContactRequest,
};
pub use import::{
    ImportContactsRequest, ImportError, ImportPreviewResponse, ImportResultResponse,
};
pub use storage::StorageError;
pub use waitlist::WaitlistRequest;

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
