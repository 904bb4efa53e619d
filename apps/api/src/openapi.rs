//! Combined OpenAPI document for the service

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "DrivingMaster API",
    description = "Lead capture for driving lessons: enquiry submission and the mail relay"
))]
struct ApiDoc;

/// Merge the per-domain documents into one spec served at
/// `/api-docs/openapi.json`
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(domain_enquiries::handlers::ApiDoc::openapi());
    doc.merge(email::handlers::ApiDoc::openapi());
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_includes_both_domains() {
        let doc = openapi();
        assert!(doc.paths.paths.contains_key("/api/enquiries"));
        assert!(doc.paths.paths.contains_key("/api/send-email"));
    }
}
