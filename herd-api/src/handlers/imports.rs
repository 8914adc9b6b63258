use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{
    ErrorResponse, ImportContactsRequest, ImportError, ImportPreviewResponse,
    ImportResultResponse,
};
use std::sync::Arc;

use crate::jobs::ImportManager;

pub async fn preview_import(
    manager: web::Data<Arc<ImportManager>>,
    request: web::Json<ImportContactsRequest>,
) -> ActixResult<HttpResponse> {
    match manager.preview(&request.csv_text) {
        Ok((contacts, total)) => {
            Ok(HttpResponse::Ok().json(ImportPreviewResponse { contacts, total }))
        }
        Err(error) => Ok(import_error_response(error)),
    }
}

pub async fn import_contacts(
    manager: web::Data<Arc<ImportManager>>,
    request: web::Json<ImportContactsRequest>,
) -> ActixResult<HttpResponse> {
    let ImportContactsRequest { user_id, csv_text } = request.into_inner();

    if user_id.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Missing data")));
    }

    match manager.import_csv(&user_id, &csv_text).await {
        Ok(imported) => Ok(HttpResponse::Ok().json(ImportResultResponse { imported })),
        Err(error) => Ok(import_error_response(error)),
    }
}

/// Import failures are surfaced verbatim; a partial import needs the
/// user's awareness, unlike the chat flow which degrades silently.
fn import_error_response(error: ImportError) -> HttpResponse {
    match &error {
        ImportError::EmptyInput => {
            HttpResponse::BadRequest().json(ErrorResponse::new(error.to_string()))
        }
        ImportError::Storage(_) => {
            HttpResponse::InternalServerError().json(ErrorResponse::new(error.to_string()))
        }
    }
}
