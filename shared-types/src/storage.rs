/// Errors surfaced by the external storage collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Unique constraint violation, e.g. an email already on the waitlist.
    #[error("duplicate row")]
    Conflict,

    #[error("storage service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("storage request failed: {0}")]
    Transport(String),
}
