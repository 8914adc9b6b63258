use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use shared_types::{
    ContactsResponse, CreateContactRequest, ErrorResponse, NewContact, UpdateContactRequest,
};
use std::sync::Arc;

use crate::storage::{ContactQuery, ContactStore};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContactsQuery {
    pub user_id: String,
    pub group: Option<String>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerQuery {
    pub user_id: String,
}

pub async fn list_contacts(
    store: web::Data<Arc<dyn ContactStore>>,
    query: web::Query<ListContactsQuery>,
) -> ActixResult<HttpResponse> {
    let ListContactsQuery {
        user_id,
        group,
        search,
        limit,
    } = query.into_inner();

    let contacts = store
        .select_contacts(
            &user_id,
            &ContactQuery {
                name_contains: search,
                group,
                limit,
                order_by_name: true,
            },
        )
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(ContactsResponse { contacts }))
}

pub async fn create_contact(
    store: web::Data<Arc<dyn ContactStore>>,
    request: web::Json<CreateContactRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();

    if request.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Name is required")));
    }

    let user_id = request.user_id.clone();
    let contact = NewContact::from(request);

    store
        .insert_contacts(&user_id, &[contact])
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Created().finish())
}

pub async fn update_contact(
    store: web::Data<Arc<dyn ContactStore>>,
    path: web::Path<i64>,
    request: web::Json<UpdateContactRequest>,
) -> ActixResult<HttpResponse> {
    let contact_id = path.into_inner();
    let changes = request.into_inner();

    store
        .update_contact(&changes.user_id, contact_id, &changes)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().finish())
}

pub async fn delete_contact(
    store: web::Data<Arc<dyn ContactStore>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let contact_id = path.into_inner();

    store
        .delete_contact(&query.user_id, contact_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::NoContent().finish())
}

pub async fn delete_all_contacts(
    store: web::Data<Arc<dyn ContactStore>>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    store
        .delete_all_contacts(&query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::NoContent().finish())
}
