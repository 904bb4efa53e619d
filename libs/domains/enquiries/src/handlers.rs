use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use axum_helpers::{ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::booking::BookingClient;
use crate::error::EnquiryResult;
use crate::models::{CarType, EnquiryAck, NewEnquiry};
use crate::service::EnquiryService;

/// OpenAPI documentation for the enquiries domain
#[derive(OpenApi)]
#[openapi(
    paths(create_enquiry),
    components(schemas(NewEnquiry, CarType, EnquiryAck, ErrorResponse)),
    tags((name = "enquiries", description = "Driving lesson enquiry submission"))
)]
pub struct ApiDoc;

/// Create the enquiries router
pub fn router<B: BookingClient + 'static>(service: EnquiryService<B>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_enquiry))
        .with_state(shared_service)
}

/// Submit a new enquiry
#[utoipa::path(
    post,
    path = "/api/enquiries",
    tag = "enquiries",
    request_body = NewEnquiry,
    responses(
        (status = 201, description = "Enquiry accepted", body = EnquiryAck),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 502, description = "Booking backend failure", body = ErrorResponse)
    )
)]
async fn create_enquiry<B: BookingClient>(
    State(service): State<Arc<EnquiryService<B>>>,
    ValidatedJson(enquiry): ValidatedJson<NewEnquiry>,
) -> EnquiryResult<impl IntoResponse> {
    let ack = service.submit(enquiry).await?;
    Ok((StatusCode::CREATED, Json(ack)))
}
