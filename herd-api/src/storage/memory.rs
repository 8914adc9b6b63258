use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use shared_types::{Contact, NewContact, StorageError, UpdateContactRequest};

use super::{ContactQuery, ContactStore};

/// In-memory stand-in for the managed database.
pub struct MemoryStore {
    contacts: Mutex<Vec<Contact>>,
    waitlist: Mutex<Vec<String>>,
    next_id: AtomicI64,
    insert_batches: Mutex<Vec<usize>>,
    /// When set, insert calls fail after this many batches succeeded.
    fail_insert_after: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            contacts: Mutex::new(Vec::new()),
            waitlist: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            insert_batches: Mutex::new(Vec::new()),
            fail_insert_after: None,
        }
    }

    pub fn failing_after(batches: usize) -> Self {
        MemoryStore {
            fail_insert_after: Some(batches),
            ..Self::new()
        }
    }

    pub fn insert_batch_sizes(&self) -> Vec<usize> {
        self.insert_batches.lock().unwrap().clone()
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn select_contacts(
        &self,
        user_id: &str,
        query: &ContactQuery,
    ) -> Result<Vec<Contact>, StorageError> {
        let contacts = self.contacts.lock().unwrap();
        let mut matches: Vec<Contact> = contacts
            .iter()
            .filter(|c| c.user_id == user_id)
            .filter(|c| match &query.name_contains {
                Some(fragment) => c
                    .name
                    .to_lowercase()
                    .contains(&fragment.to_lowercase()),
                None => true,
            })
            .filter(|c| match &query.group {
                Some(group) => &c.group_name == group,
                None => true,
            })
            .cloned()
            .collect();

        if query.order_by_name {
            matches.sort_by(|a, b| a.name.cmp(&b.name));
        }
        if let Some(limit) = query.limit {
            matches.truncate(limit);
        }
        Ok(matches)
    }

    async fn insert_contacts(
        &self,
        user_id: &str,
        batch: &[NewContact],
    ) -> Result<(), StorageError> {
        let mut batches = self.insert_batches.lock().unwrap();
        if let Some(cap) = self.fail_insert_after {
            if batches.len() >= cap {
                return Err(StorageError::Service {
                    status: 500,
                    message: "insert failed".to_string(),
                });
            }
        }
        batches.push(batch.len());
        drop(batches);

        let now = chrono::Utc::now().to_rfc3339();
        let mut contacts = self.contacts.lock().unwrap();
        for record in batch {
            contacts.push(Contact {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                user_id: user_id.to_string(),
                name: record.name.clone(),
                email: record.email.clone(),
                phone: record.phone.clone(),
                company: record.company.clone(),
                location: record.location.clone(),
                job_title: record.job_title.clone(),
                birthday: record.birthday.clone(),
                notes: record.notes.clone(),
                relationship: record.relationship.clone(),
                group_name: record.group_name.clone(),
                interests: record.interests.clone(),
                meeting_context: None,
                last_contact: None,
                source: record.source.clone(),
                created_at: Some(now.clone()),
            });
        }
        Ok(())
    }

    async fn update_contact(
        &self,
        user_id: &str,
        contact_id: i64,
        changes: &UpdateContactRequest,
    ) -> Result<(), StorageError> {
        let mut contacts = self.contacts.lock().unwrap();
        if let Some(contact) = contacts
            .iter_mut()
            .find(|c| c.id == contact_id && c.user_id == user_id)
        {
            if let Some(name) = &changes.name {
                contact.name = name.clone();
            }
            if let Some(email) = &changes.email {
                contact.email = Some(email.clone());
            }
            if let Some(phone) = &changes.phone {
                contact.phone = Some(phone.clone());
            }
            if let Some(group_name) = &changes.group_name {
                contact.group_name = group_name.clone();
            }
            if let Some(interests) = &changes.interests {
                contact.interests = interests.clone();
            }
        }
        Ok(())
    }

    async fn delete_contact(&self, user_id: &str, contact_id: i64) -> Result<(), StorageError> {
        self.contacts
            .lock()
            .unwrap()
            .retain(|c| !(c.id == contact_id && c.user_id == user_id));
        Ok(())
    }

    async fn delete_all_contacts(&self, user_id: &str) -> Result<(), StorageError> {
        self.contacts.lock().unwrap().retain(|c| c.user_id != user_id);
        Ok(())
    }

    async fn insert_waitlist_email(&self, email: &str) -> Result<(), StorageError> {
        let mut waitlist = self.waitlist.lock().unwrap();
        if waitlist.iter().any(|existing| existing == email) {
            return Err(StorageError::Conflict);
        }
        waitlist.push(email.to_string());
        Ok(())
    }
}
