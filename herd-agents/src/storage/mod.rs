use anyhow::Result;
use async_trait::async_trait;
use shared_types::Contact;

/// Read access to one user's contacts, as the gift advisor needs it.
///
/// The production implementation lives in the API crate on top of the
/// managed-database client; tests use an in-memory fake. Every call is
/// scoped to the requesting user's id, so the directory never returns
/// another owner's rows.
#[async_trait]
pub trait ContactDirectory: Send + Sync {
    /// Contacts whose name contains `fragment` case-insensitively,
    /// capped at `limit`.
    async fn search_by_name(
        &self,
        user_id: &str,
        fragment: &str,
        limit: usize,
    ) -> Result<Vec<Contact>>;

    /// Up to `limit` of the user's contacts, no filtering.
    async fn sample(&self, user_id: &str, limit: usize) -> Result<Vec<Contact>>;
}
