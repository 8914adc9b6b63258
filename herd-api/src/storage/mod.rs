#[cfg(test)]
pub mod memory;
pub mod supabase;

pub use supabase::SupabaseStore;

use async_trait::async_trait;
use shared_types::{Contact, NewContact, StorageError, UpdateContactRequest};

/// Filter options for a contact select. The owner id is always passed
/// separately and is never optional.
#[derive(Debug, Default, Clone)]
pub struct ContactQuery {
    /// Case-insensitive substring match on the name column.
    pub name_contains: Option<String>,
    pub group: Option<String>,
    pub limit: Option<usize>,
    pub order_by_name: bool,
}

/// The external managed database, as this API consumes it.
///
/// Every query and mutation is scoped to the owning user's id; that
/// per-row filtering is the only cross-user isolation mechanism. The
/// collaborator serializes concurrent writes, no locking happens here.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn select_contacts(
        &self,
        user_id: &str,
        query: &ContactQuery,
    ) -> Result<Vec<Contact>, StorageError>;

    /// Insert a batch of records for one owner. The store stamps each
    /// row with the owner id and an insertion timestamp.
    async fn insert_contacts(
        &self,
        user_id: &str,
        batch: &[NewContact],
    ) -> Result<(), StorageError>;

    async fn update_contact(
        &self,
        user_id: &str,
        contact_id: i64,
        changes: &UpdateContactRequest,
    ) -> Result<(), StorageError>;

    async fn delete_contact(&self, user_id: &str, contact_id: i64) -> Result<(), StorageError>;

    async fn delete_all_contacts(&self, user_id: &str) -> Result<(), StorageError>;

    async fn insert_waitlist_email(&self, email: &str) -> Result<(), StorageError>;
}
