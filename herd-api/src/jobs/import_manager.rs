use std::sync::Arc;
use std::time::Duration;

use shared_types::{ImportError, NewContact};

use crate::storage::ContactStore;

/// Records per storage submission.
pub const BATCH_SIZE: usize = 50;

/// Fixed pause between batches. Throttling, not adaptive backpressure.
const BATCH_PAUSE: Duration = Duration::from_millis(100);

/// Drives one-shot CSV imports: parse, then submit sequentially in
/// fixed-size batches.
pub struct ImportManager {
    store: Arc<dyn ContactStore>,
}

impl ImportManager {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Parse-only pass backing the pre-import confirmation: the first
    /// few records plus the total count.
    pub fn preview(&self, csv_text: &str) -> Result<(Vec<NewContact>, usize), ImportError> {
        let contacts = importers::parse_contacts(csv_text)?;
        let total = contacts.len();
        let head = importers::preview(&contacts).to_vec();
        Ok((head, total))
    }

    /// Parse the CSV text and submit every record for the given owner.
    ///
    /// A failed batch aborts the remaining ones and surfaces the
    /// storage message verbatim; batches already committed stay
    /// committed.
    pub async fn import_csv(&self, user_id: &str, csv_text: &str) -> Result<usize, ImportError> {
        let contacts = importers::parse_contacts(csv_text)?;
        tracing::info!(total = contacts.len(), "starting contact import");

        let total_batches = contacts.len().div_ceil(BATCH_SIZE);
        for (index, batch) in contacts.chunks(BATCH_SIZE).enumerate() {
            self.store
                .insert_contacts(user_id, batch)
                .await
                .map_err(|e| ImportError::Storage(e.to_string()))?;

            tracing::info!(
                batch = index + 1,
                total_batches,
                inserted = batch.len(),
                "import batch committed"
            );

            if index + 1 < total_batches {
                tokio::time::sleep(BATCH_PAUSE).await;
            }
        }

        Ok(contacts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use crate::storage::ContactQuery;

    fn csv_with_rows(rows: usize) -> String {
        let mut csv = String::from("First name,Last name\n");
        for i in 0..rows {
            csv.push_str(&format!("Person{i},Test\n"));
        }
        csv
    }

    #[tokio::test]
    async fn test_batches_of_fifty() {
        let store = Arc::new(MemoryStore::new());
        let manager = ImportManager::new(store.clone());

        let imported = manager
            .import_csv("user-1", &csv_with_rows(120))
            .await
            .unwrap();

        assert_eq!(imported, 120);
        assert_eq!(store.insert_batch_sizes(), vec![50, 50, 20]);
    }

    #[tokio::test]
    async fn test_failed_batch_aborts_but_keeps_committed() {
        let store = Arc::new(MemoryStore::failing_after(1));
        let manager = ImportManager::new(store.clone());

        let result = manager.import_csv("user-1", &csv_with_rows(120)).await;

        assert!(matches!(result, Err(ImportError::Storage(_))));
        // the first batch stays committed
        assert_eq!(store.contact_count(), 50);
        assert_eq!(store.insert_batch_sizes(), vec![50]);
    }

    #[tokio::test]
    async fn test_import_round_trips_by_owner() {
        let store = Arc::new(MemoryStore::new());
        let manager = ImportManager::new(store.clone());

        manager.import_csv("user-1", &csv_with_rows(7)).await.unwrap();

        let contacts = store
            .select_contacts("user-1", &ContactQuery::default())
            .await
            .unwrap();
        assert_eq!(contacts.len(), 7);
        assert!(contacts.iter().all(|c| c.user_id == "user-1"));
        assert!(contacts.iter().all(|c| c.source.as_deref() == Some("csv_import")));

        let other = store
            .select_contacts("user-2", &ContactQuery::default())
            .await
            .unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn test_empty_csv_never_reaches_storage() {
        let store = Arc::new(MemoryStore::new());
        let manager = ImportManager::new(store.clone());

        let result = manager.import_csv("user-1", "First name,Last name\n").await;

        assert!(matches!(result, Err(ImportError::EmptyInput)));
        assert!(store.insert_batch_sizes().is_empty());
    }

    #[test]
    fn test_preview_is_parse_only() {
        let store = Arc::new(MemoryStore::new());
        let manager = ImportManager::new(store.clone());

        let (head, total) = manager.preview(&csv_with_rows(10)).unwrap();

        assert_eq!(head.len(), 3);
        assert_eq!(total, 10);
        assert_eq!(store.contact_count(), 0);
    }
}
