//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::server::routes;
use crate::server::state::AppState;
use crate::server::handlers;
use crate::utils::error::{ApiError, Result};
use actix_cors::Cors;
use actix_web::{web, App, HttpServer as ActixHttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Self {
        info!("Creating HTTP server");

        Self {
            config: config.server.clone(),
            state: AppState::from_config(config.clone()),
        }
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || {
            // CORS is enabled for all routes and origins
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header();

            App::new()
                .app_data(state.clone())
                .wrap(cors)
                .wrap(TracingLogger::default())
                .configure(configure_app)
        })
        .bind(&bind_addr)
        .map_err(|e| ApiError::config(format!("Failed to bind {}: {}", bind_addr, e)))?
        .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| ApiError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Set up routes and fallback responses
///
/// Shared by the server and the integration tests. Each known resource
/// carries a method fallback returning 405; everything else is 404.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(handlers::home))
            .default_service(web::route().to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/health")
            .route(web::get().to(handlers::health_check))
            .default_service(web::route().to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/process-text")
            .route(web::post().to(routes::text::process_text))
            .default_service(web::route().to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/process-json")
            .route(web::post().to(routes::json::process_json))
            .default_service(web::route().to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/upload-json")
            .route(web::post().to(routes::upload::upload_json))
            .default_service(web::route().to(handlers::method_not_allowed)),
    )
    .default_service(web::route().to(handlers::not_found));
}
