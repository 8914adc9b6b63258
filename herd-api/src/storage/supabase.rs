use async_trait::async_trait;
use serde_json::json;
use shared_types::{Contact, NewContact, StorageError, UpdateContactRequest};

use super::{ContactQuery, ContactStore};

/// REST client for the managed Postgres service.
///
/// Filters use the PostgREST operator syntax (`eq.`, `ilike.*…*`);
/// writes ask for minimal representation since callers never need the
/// inserted rows back.
pub struct SupabaseStore {
    http: reqwest::Client,
    base_url: String,
    service_role_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        SupabaseStore {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_role_key: service_role_key.into(),
        }
    }

    fn request(&self, method: reqwest::Method, table: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}/rest/v1/{}", self.base_url, table))
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StorageError> {
    let status = response.status();
    if status == reqwest::StatusCode::CONFLICT {
        return Err(StorageError::Conflict);
    }
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(StorageError::Service {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}

fn transport(error: reqwest::Error) -> StorageError {
    StorageError::Transport(error.to_string())
}

#[async_trait]
impl ContactStore for SupabaseStore {
    async fn select_contacts(
        &self,
        user_id: &str,
        query: &ContactQuery,
    ) -> Result<Vec<Contact>, StorageError> {
        let mut params: Vec<(String, String)> = vec![
            ("select".to_string(), "*".to_string()),
            ("user_id".to_string(), format!("eq.{user_id}")),
        ];
        if let Some(fragment) = &query.name_contains {
            params.push(("name".to_string(), format!("ilike.*{fragment}*")));
        }
        if let Some(group) = &query.group {
            params.push(("group_name".to_string(), format!("eq.{group}")));
        }
        if query.order_by_name {
            params.push(("order".to_string(), "name.asc".to_string()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        let response = self
            .request(reqwest::Method::GET, "contacts")
            .query(&params)
            .send()
            .await
            .map_err(transport)?;

        check_status(response)
            .await?
            .json::<Vec<Contact>>()
            .await
            .map_err(transport)
    }

    async fn insert_contacts(
        &self,
        user_id: &str,
        batch: &[NewContact],
    ) -> Result<(), StorageError> {
        let now = chrono::Utc::now().to_rfc3339();
        let mut rows = Vec::with_capacity(batch.len());
        for contact in batch {
            let mut row = serde_json::to_value(contact)
                .map_err(|e| StorageError::Transport(e.to_string()))?;
            if let Some(object) = row.as_object_mut() {
                object.insert("user_id".to_string(), json!(user_id));
                object.insert("created_at".to_string(), json!(now));
            }
            rows.push(row);
        }

        let response = self
            .request(reqwest::Method::POST, "contacts")
            .header("Prefer", "return=minimal")
            .json(&rows)
            .send()
            .await
            .map_err(transport)?;

        check_status(response).await?;
        Ok(())
    }

    async fn update_contact(
        &self,
        user_id: &str,
        contact_id: i64,
        changes: &UpdateContactRequest,
    ) -> Result<(), StorageError> {
        let response = self
            .request(reqwest::Method::PATCH, "contacts")
            .query(&[
                ("id", format!("eq.{contact_id}")),
                ("user_id", format!("eq.{user_id}")),
            ])
            .header("Prefer", "return=minimal")
            .json(&update_body(changes))
            .send()
            .await
            .map_err(transport)?;

        check_status(response).await?;
        Ok(())
    }

    async fn delete_contact(&self, user_id: &str, contact_id: i64) -> Result<(), StorageError> {
        let response = self
            .request(reqwest::Method::DELETE, "contacts")
            .query(&[
                ("id", format!("eq.{contact_id}")),
                ("user_id", format!("eq.{user_id}")),
            ])
            .send()
            .await
            .map_err(transport)?;

        check_status(response).await?;
        Ok(())
    }

    async fn delete_all_contacts(&self, user_id: &str) -> Result<(), StorageError> {
        let response = self
            .request(reqwest::Method::DELETE, "contacts")
            .query(&[("user_id", format!("eq.{user_id}"))])
            .send()
            .await
            .map_err(transport)?;

        check_status(response).await?;
        Ok(())
    }

    async fn insert_waitlist_email(&self, email: &str) -> Result<(), StorageError> {
        let response = self
            .request(reqwest::Method::POST, "waitlist")
            .header("Prefer", "return=minimal")
            .json(&json!([{ "email": email }]))
            .send()
            .await
            .map_err(transport)?;

        check_status(response).await?;
        Ok(())
    }
}

fn update_body(changes: &UpdateContactRequest) -> serde_json::Map<String, serde_json::Value> {
    let mut body = serde_json::Map::new();
    if let Some(name) = &changes.name {
        body.insert("name".to_string(), json!(name));
    }
    if let Some(email) = &changes.email {
        body.insert("email".to_string(), json!(email));
    }
    if let Some(phone) = &changes.phone {
        body.insert("phone".to_string(), json!(phone));
    }
    if let Some(company) = &changes.company {
        body.insert("company".to_string(), json!(company));
    }
    if let Some(location) = &changes.location {
        body.insert("location".to_string(), json!(location));
    }
    if let Some(job_title) = &changes.job_title {
        body.insert("job_title".to_string(), json!(job_title));
    }
    if let Some(birthday) = &changes.birthday {
        body.insert("birthday".to_string(), json!(birthday));
    }
    if let Some(notes) = &changes.notes {
        body.insert("notes".to_string(), json!(notes));
    }
    if let Some(relationship) = &changes.relationship {
        body.insert("relationship".to_string(), json!(relationship));
    }
    if let Some(group_name) = &changes.group_name {
        body.insert("group_name".to_string(), json!(group_name));
    }
    if let Some(interests) = &changes.interests {
        body.insert("interests".to_string(), json!(interests));
    }
    body
}

/// Chat lookups go through the same store; the advisor only needs
/// narrow read access.
#[async_trait]
impl herd_agents::ContactDirectory for SupabaseStore {
    async fn search_by_name(
        &self,
        user_id: &str,
        fragment: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<Contact>> {
        let contacts = self
            .select_contacts(
                user_id,
                &ContactQuery {
                    name_contains: Some(fragment.to_string()),
                    limit: Some(limit),
                    ..ContactQuery::default()
                },
            )
            .await?;
        Ok(contacts)
    }

    async fn sample(&self, user_id: &str, limit: usize) -> anyhow::Result<Vec<Contact>> {
        let contacts = self
            .select_contacts(
                user_id,
                &ContactQuery {
                    limit: Some(limit),
                    ..ContactQuery::default()
                },
            )
            .await?;
        Ok(contacts)
    }
}
