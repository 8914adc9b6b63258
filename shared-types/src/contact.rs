use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A stored person entity, scoped to one owning user.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contact {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_title: Option<String>,
    pub birthday: Option<String>,
    pub notes: Option<String>,
    pub relationship: Option<String>,
    pub group_name: String,
    #[serde(default)]
    pub interests: Vec<String>,
    pub meeting_context: Option<String>,
    pub last_contact: Option<String>,
    pub source: Option<String>,
    pub created_at: Option<String>,
}

/// Insert payload for a contact. The storage client stamps the owner id
/// and creation timestamp on the way in.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_title: Option<String>,
    pub birthday: Option<String>,
    pub notes: Option<String>,
    pub relationship: Option<String>,
    pub group_name: String,
    #[serde(default)]
    pub interests: Vec<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub user_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_title: Option<String>,
    pub birthday: Option<String>,
    pub notes: Option<String>,
    pub relationship: Option<String>,
    pub group_name: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_title: Option<String>,
    pub birthday: Option<String>,
    pub notes: Option<String>,
    pub relationship: Option<String>,
    pub group_name: Option<String>,
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct ContactsResponse {
    pub contacts: Vec<Contact>,
}

impl From<CreateContactRequest> for NewContact {
    fn from(req: CreateContactRequest) -> Self {
        NewContact {
            name: req.name,
            email: req.email,
            phone: req.phone,
            company: req.company,
            location: req.location,
            job_title: req.job_title,
            birthday: req.birthday,
            notes: req.notes,
            relationship: req.relationship,
            group_name: req.group_name.unwrap_or_else(|| "All".to_string()),
            interests: req.interests,
            source: None,
        }
    }
}
