//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every cafe endpoint, the health probes, the success
//! body wrappers from [`crate::inbound::http::schemas`] and the error
//! envelope. Swagger UI serves it in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{ErrorCode, ErrorEnvelopeSchema};
use crate::inbound::http::schemas::{
    Acknowledgement, AcknowledgementResponse, AddCafeForm, CafeBody, CafeResponse,
    CafesListResponse, RandomCafeBody, RandomCafeResponse,
};

/// Describe the shared `api_key` parameter guarding deletion.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "ApiKeyParam",
            SecurityScheme::ApiKey(ApiKey::Query(ApiKeyValue::with_description(
                "api_key",
                "Shared secret required by DELETE /report-closed/{key_id}.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Cafe directory API",
        description = "Read and maintain a directory of cafes, their amenities and coffee prices."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::cafes::random_cafe,
        crate::inbound::http::cafes::all_cafes,
        crate::inbound::http::cafes::search_cafes,
        crate::inbound::http::cafes::add_cafe,
        crate::inbound::http::cafes::update_price,
        crate::inbound::http::cafes::report_closed,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CafeBody,
        RandomCafeBody,
        CafeResponse,
        RandomCafeResponse,
        CafesListResponse,
        Acknowledgement,
        AcknowledgementResponse,
        AddCafeForm,
        ErrorEnvelopeSchema,
        ErrorCode,
    )),
    tags(
        (name = "cafes", description = "Cafe directory operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_fields(doc: &utoipa::openapi::OpenApi, name: &str) -> Vec<String> {
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(name).unwrap_or_else(|| panic!("{name} schema")) {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema for {name}"),
        }
    }

    #[rstest]
    #[case("/random")]
    #[case("/all")]
    #[case("/search")]
    #[case("/add")]
    #[case("/update-price/{cafe_id}")]
    #[case("/report-closed/{key_id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_endpoint_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn random_body_schema_has_no_identifier() {
        let doc = ApiDoc::openapi();

        let with_id = object_fields(&doc, "CafeBody");
        let without_id = object_fields(&doc, "RandomCafeBody");

        assert!(with_id.iter().any(|field| field == "caffe_id"));
        assert!(!without_id.iter().any(|field| field == "caffe_id"));
    }

    #[rstest]
    fn error_envelope_is_registered() {
        let doc = ApiDoc::openapi();

        assert_eq!(object_fields(&doc, "ErrorEnvelope"), vec!["error".to_owned()]);
    }
}
