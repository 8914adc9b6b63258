use actix_web::{web, HttpResponse, Result as ActixResult};
use herd_agents::GiftAdvisorAgent;
use shared_types::{ChatRequest, ErrorResponse};
use std::sync::Arc;

/// Shared state for the chat route. `agent` is None when no completion
/// API key is configured; the route degrades instead of the whole
/// server failing to start.
#[derive(Clone)]
pub struct ChatAppState {
    pub agent: Option<Arc<GiftAdvisorAgent>>,
}

pub async fn chat(
    state: web::Data<ChatAppState>,
    request: web::Json<ChatRequest>,
) -> ActixResult<HttpResponse> {
    let ChatRequest { message, user_id } = request.into_inner();

    if message.trim().is_empty() || user_id.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Missing data")));
    }

    let Some(agent) = state.agent.as_ref() else {
        return Ok(HttpResponse::InternalServerError()
            .json(ErrorResponse::new("API key not configured")));
    };

    match agent.advise(&user_id, &message).await {
        Ok(reply) => Ok(HttpResponse::Ok().json(reply)),
        Err(error) => {
            tracing::error!(%error, "chat request failed");
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::with_details("Internal error", error.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn unconfigured_app_state() -> ChatAppState {
        ChatAppState { agent: None }
    }

    #[actix_web::test]
    async fn test_missing_fields_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(unconfigured_app_state()))
                .route("/api/chat", web::post().to(chat)),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(serde_json::json!({ "message": "", "userId": "user-1" }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), 400);
    }

    #[actix_web::test]
    async fn test_unconfigured_key_reported() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(unconfigured_app_state()))
                .route("/api/chat", web::post().to(chat)),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(serde_json::json!({ "message": "hi", "userId": "user-1" }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), 500);
        let body: ErrorResponse = test::read_body_json(response).await;
        assert_eq!(body.error, "API key not configured");
    }
}
