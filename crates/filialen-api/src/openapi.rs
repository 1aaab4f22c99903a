//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the Filialen API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filialen",
        version = "1.0.0",
        description = "Toegang tot onze filialen"
    ),
    paths(
        crate::routes::filialen::get_filiaal,
        crate::routes::filialen::find_all,
        crate::routes::filialen::create,
        crate::routes::filialen::update,
        crate::routes::filialen::delete,
    ),
    components(schemas(
        crate::routes::filialen::FiliaalRequest,
        crate::hal::Link,
        crate::hal::Links,
        crate::hal::FiliaalModel,
        crate::hal::FiliaalIdNaam,
        crate::hal::EmbeddedFilialen,
        crate::hal::FiliaalCollectionModel,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::error::ValidationErrorBody,
    )),
    tags(
        (name = "filialen", description = "Filialen"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(path: &str, method: &str) -> Option<String> {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        json["paths"][path][method]["summary"]
            .as_str()
            .map(str::to_string)
    }

    #[test]
    fn test_openapi_spec_info() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Filialen");
        assert_eq!(spec.info.version, "1.0.0");
        assert_eq!(
            spec.info.description.as_deref(),
            Some("Toegang tot onze filialen")
        );
    }

    #[test]
    fn test_openapi_spec_has_filialen_paths() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/filialen"));
        assert!(spec.paths.paths.contains_key("/filialen/{id}"));
        assert_eq!(spec.paths.paths.len(), 2);
    }

    #[test]
    fn test_operation_summaries() {
        assert_eq!(
            summary("/filialen/{id}", "get").as_deref(),
            Some("Een filiaal zoeken op id")
        );
        assert_eq!(
            summary("/filialen/{id}", "delete").as_deref(),
            Some("Een filiaal verwijderen")
        );
        assert_eq!(
            summary("/filialen/{id}", "put").as_deref(),
            Some("Een filiaal wijzigen")
        );
        assert_eq!(
            summary("/filialen", "post").as_deref(),
            Some("Een filiaal toevoegen")
        );
        assert_eq!(
            summary("/filialen", "get").as_deref(),
            Some("Alle filialen zoeken")
        );
    }

    #[test]
    fn test_openapi_spec_has_components() {
        let spec = ApiDoc::openapi();
        let schemas = &spec
            .components
            .as_ref()
            .expect("OpenAPI spec should have components")
            .schemas;
        for name in &[
            "FiliaalRequest",
            "FiliaalModel",
            "FiliaalIdNaam",
            "FiliaalCollectionModel",
            "ValidationErrorBody",
        ] {
            assert!(schemas.contains_key(*name), "should contain {name} schema");
        }
    }

    #[test]
    fn test_openapi_spec_serializes_to_json() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(json.contains("openapi"), "should contain openapi key");
        assert!(json.contains("application/hal+json"));
    }
}
