//! Smoke tests for the assembled application router

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_enquiries::booking::BookingClient;
use domain_enquiries::error::EnquiryResult;
use domain_enquiries::models::NewEnquiry;
use domain_enquiries::notifications::Notifier;
use domain_enquiries::service::EnquiryService;
use email::provider::EmailProvider;
use email::templates::TemplateEngine;
use email::MockMailProvider;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

struct NoopBookingClient;

#[async_trait]
impl BookingClient for NoopBookingClient {
    async fn submit(&self, _enquiry: &NewEnquiry) -> EnquiryResult<()> {
        Ok(())
    }
}

fn app() -> axum::Router {
    let provider: Arc<dyn EmailProvider> = Arc::new(MockMailProvider::new());
    let notifier = Notifier::new(
        Arc::clone(&provider),
        Arc::new(TemplateEngine::new().unwrap()),
    );
    let service = EnquiryService::new(NoopBookingClient, notifier);

    drivingmaster_api::router(service, provider, core_config::app_info!())
}

async fn get(app: axum::Router, uri: &str) -> axum::http::Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_index_serves_booking_form() {
    let response = get(app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("DrivingMaster"));
    assert!(html.contains("enquiry-form"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = get(app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["name"], "drivingmaster_api");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let response = get(app(), "/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"].get("/api/enquiries").is_some());
    assert!(doc["paths"].get("/api/send-email").is_some());
}

#[tokio::test]
async fn test_unknown_route_returns_structured_404() {
    let response = get(app(), "/api/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "NOT_FOUND");
}
