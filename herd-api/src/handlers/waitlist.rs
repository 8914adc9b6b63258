use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{ErrorResponse, StorageError, WaitlistRequest};
use std::sync::Arc;

use crate::storage::ContactStore;

pub async fn join_waitlist(
    store: web::Data<Arc<dyn ContactStore>>,
    request: web::Json<WaitlistRequest>,
) -> ActixResult<HttpResponse> {
    let email = request.email.trim().to_string();

    if email.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Email is required")));
    }

    match store.insert_waitlist_email(&email).await {
        Ok(()) => Ok(HttpResponse::Created().json(serde_json::json!({ "success": true }))),
        Err(StorageError::Conflict) => Ok(HttpResponse::Conflict()
            .json(ErrorResponse::new("This email is already on our waitlist!"))),
        Err(error) => {
            tracing::error!(%error, "waitlist insert failed");
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(error.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_duplicate_email_conflicts() {
        let store: Arc<dyn ContactStore> = Arc::new(MemoryStore::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .route("/api/waitlist", web::post().to(join_waitlist)),
        )
        .await;

        let first = test::TestRequest::post()
            .uri("/api/waitlist")
            .set_json(serde_json::json!({ "email": "early@example.com" }))
            .to_request();
        assert_eq!(test::call_service(&app, first).await.status(), 201);

        let second = test::TestRequest::post()
            .uri("/api/waitlist")
            .set_json(serde_json::json!({ "email": "early@example.com" }))
            .to_request();
        let response = test::call_service(&app, second).await;
        assert_eq!(response.status(), 409);

        let body: ErrorResponse = test::read_body_json(response).await;
        assert_eq!(body.error, "This email is already on our waitlist!");
    }
}
