use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

use herd_agents::{AnthropicClient, GiftAdvisorAgent};
use herd_api::catalog::default_catalog;
use herd_api::config::ApiConfig;
use herd_api::handlers;
use herd_api::jobs::ImportManager;
use herd_api::storage::{ContactStore, SupabaseStore};

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Herd API"
    }))
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = args.log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("herd-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Load config
    let (config, config_path) = ApiConfig::load().expect("Failed to load config");
    tracing::info!("Loaded config from {:?}", config_path);

    let storage_config = config
        .storage
        .clone()
        .expect("Storage is not configured; set [storage] url and service_role_key");
    let store = Arc::new(SupabaseStore::new(
        &storage_config.url,
        &storage_config.service_role_key,
    ));
    let contact_store: Arc<dyn ContactStore> = store.clone();
    let import_manager = Arc::new(ImportManager::new(contact_store.clone()));

    // The chat route degrades when no completion key is present; the
    // rest of the API stays up.
    let agent = match config.anthropic_api_key() {
        Some(api_key) => {
            let llm_client = Arc::new(AnthropicClient::new(api_key));
            Some(Arc::new(GiftAdvisorAgent::new(
                llm_client,
                store.clone(),
                default_catalog(),
            )))
        }
        None => {
            tracing::warn!("No completion API key configured; /api/chat will be unavailable");
            None
        }
    };
    let chat_state = handlers::chat::ChatAppState { agent };

    // Get server config or use defaults
    let (host, port) = if let Some(server_config) = &config.server {
        (server_config.host.clone(), server_config.port)
    } else {
        ("127.0.0.1".to_string(), 8080)
    };

    tracing::info!("Server will listen on {}:{}", host, port);
    println!("Starting server on {}:{}", host, port);

    HttpServer::new(move || {
        // Configure CORS
        let cors = if let Some(cors_config) = &config.cors {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(contact_store.clone()))
            .app_data(web::Data::new(import_manager.clone()))
            .app_data(web::Data::new(chat_state.clone()))
            .service(hello)
            .service(health)
            .route("/api/chat", web::post().to(handlers::chat::chat))
            .route("/api/contacts", web::get().to(handlers::contacts::list_contacts))
            .route("/api/contacts", web::post().to(handlers::contacts::create_contact))
            .route("/api/contacts", web::delete().to(handlers::contacts::delete_all_contacts))
            .route("/api/contacts/import/preview", web::post().to(handlers::imports::preview_import))
            .route("/api/contacts/import", web::post().to(handlers::imports::import_contacts))
            .route("/api/contacts/{id}", web::put().to(handlers::contacts::update_contact))
            .route("/api/contacts/{id}", web::delete().to(handlers::contacts::delete_contact))
            .route("/api/waitlist", web::post().to(handlers::waitlist::join_waitlist))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
