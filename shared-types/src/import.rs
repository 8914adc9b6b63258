use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::NewContact;

/// Errors from the CSV contact import pipeline.
///
/// Storage failures abort the batch loop and are surfaced verbatim;
/// batches committed before the failure stay committed.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("File appears to be empty")]
    EmptyInput,

    #[error("Database error: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ImportContactsRequest {
    pub user_id: String,
    pub csv_text: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreviewResponse {
    pub contacts: Vec<NewContact>,
    pub total: usize,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ImportResultResponse {
    pub imported: usize,
}
