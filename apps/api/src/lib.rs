//! DrivingMaster API
//!
//! Single-binary HTTP service for the DrivingMaster booking page:
//!
//! - `GET /` serves the booking form
//! - `POST /api/enquiries` validates and forwards an enquiry, then queues
//!   the confirmation and lead-alert emails
//! - `POST /api/send-email` is the raw mail relay
//! - `GET /health` for liveness probes

use axum::{Json, Router, response::Html, routing::get};
use axum_helpers::{errors, health_router, shutdown_signal};
use core_config::server::ServerConfig;
use core_config::tracing::init_tracing;
use core_config::{AppInfo, Environment, FromEnv, app_info};
use domain_enquiries::booking::{BookingClient, HttpBookingClient};
use domain_enquiries::notifications::Notifier;
use domain_enquiries::service::EnquiryService;
use email::provider::{EmailProvider, GraphProvider, MockMailProvider};
use email::templates::TemplateEngine;
use eyre::WrapErr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub mod openapi;

const INDEX_HTML: &str = include_str!("../static/index.html");

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::openapi())
}

/// Build the full application router
pub fn router<B: BookingClient + 'static>(
    service: EnquiryService<B>,
    provider: Arc<dyn EmailProvider>,
    info: AppInfo,
) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(health_router(info))
        .nest("/api/enquiries", domain_enquiries::handlers::router(service))
        .nest("/api/send-email", email::handlers::router(provider))
        .fallback(errors::handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Pick the mail provider for the current environment.
///
/// Production requires the Graph credentials. In development a missing
/// registration falls back to the capturing mock so the form and relay
/// stay usable offline.
fn mail_provider(environment: &Environment) -> eyre::Result<Arc<dyn EmailProvider>> {
    match GraphProvider::from_env() {
        Ok(provider) => {
            info!(provider = provider.name(), sender = provider.sender(), "Mail provider configured");
            Ok(Arc::new(provider))
        }
        Err(e) if environment.is_development() => {
            warn!("Graph credentials not set ({}), falling back to mock mail provider", e);
            Ok(Arc::new(MockMailProvider::new()))
        }
        Err(e) => Err(e.wrap_err("mail provider is required in production")),
    }
}

/// Run the server until shutdown
pub async fn run() -> eyre::Result<()> {
    let environment = Environment::from_env();
    init_tracing(&environment);

    let server_config = ServerConfig::from_env()?;

    let provider = mail_provider(&environment)?;
    let templates = Arc::new(TemplateEngine::new()?);
    let notifier = Notifier::new(Arc::clone(&provider), templates);
    let booking = HttpBookingClient::from_env();
    let service = EnquiryService::new(booking, notifier);

    let app = router(service, provider, app_info!());

    let listener = tokio::net::TcpListener::bind(server_config.address())
        .await
        .wrap_err_with(|| format!("failed to bind {}", server_config.address()))?;

    info!("DrivingMaster API listening on {}", server_config.address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server error")?;

    info!("DrivingMaster API shutdown complete");
    Ok(())
}
