//! # Hypermedia (HAL)
//!
//! Representation models for `application/hal+json` responses and the link
//! builder that derives canonical resource URIs from record ids.
//!
//! Single record:
//!
//! ```json
//! { "id": 1, "naam": "Andros", "gemeente": "Brussel", "omzet": 2500.50,
//!   "_links": { "self": { "href": "http://host/filialen/1" },
//!               "werknemers": { "href": "http://host/filialen/1/werknemers" } } }
//! ```
//!
//! Collection (`_embedded` is omitted when empty):
//!
//! ```json
//! { "_embedded": { "filiaalIdNaamList": [
//!       { "id": 1, "naam": "Andros", "_links": { "self": { "href": "http://host/filialen/1" } } } ] },
//!   "_links": { "self": { "href": "http://host/filialen" } } }
//! ```

use std::collections::BTreeMap;

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use filialen_core::{Filiaal, FiliaalId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Media type of every hypermedia response.
pub const HAL_JSON: &str = "application/hal+json";

/// A single hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Link relations keyed by name. Serialized in relation-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the link for `rel`.
    pub fn with(mut self, rel: &str, link: Link) -> Self {
        self.0.insert(rel.to_string(), link);
        self
    }
}

/// A full branch record with `self` and `werknemers` links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FiliaalModel {
    pub id: i64,
    pub naam: String,
    pub gemeente: String,
    /// Written with the stored digits and scale, never through `f64`.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 2500.5)]
    pub omzet: Decimal,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// Id and name projection used in listings, with a `self` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FiliaalIdNaam {
    pub id: i64,
    pub naam: String,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// Embedded resources of the collection representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmbeddedFilialen {
    #[serde(rename = "filiaalIdNaamList")]
    pub filiaal_id_naam_list: Vec<FiliaalIdNaam>,
}

/// The `GET /filialen` representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FiliaalCollectionModel {
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<EmbeddedFilialen>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl FiliaalCollectionModel {
    /// Embedded projections, empty when `_embedded` is absent.
    pub fn items(&self) -> &[FiliaalIdNaam] {
        self.embedded
            .as_ref()
            .map(|e| e.filiaal_id_naam_list.as_slice())
            .unwrap_or_default()
    }
}

/// Builds links and representations relative to a base URL.
#[derive(Debug, Clone)]
pub struct FiliaalLinks {
    base_url: String,
}

impl FiliaalLinks {
    /// `base_url` is scheme plus authority, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn collection_uri(&self) -> String {
        format!("{}/filialen", self.base_url)
    }

    pub fn item_uri(&self, id: FiliaalId) -> String {
        format!("{}/filialen/{id}", self.base_url)
    }

    pub fn werknemers_uri(&self, id: FiliaalId) -> String {
        format!("{}/werknemers", self.item_uri(id))
    }

    pub fn model(&self, filiaal: &Filiaal) -> FiliaalModel {
        let id = filiaal.id();
        FiliaalModel {
            id: id.get(),
            naam: filiaal.naam().to_string(),
            gemeente: filiaal.gemeente().to_string(),
            omzet: filiaal.omzet(),
            links: Links::new()
                .with("self", Link::new(self.item_uri(id)))
                .with("werknemers", Link::new(self.werknemers_uri(id))),
        }
    }

    pub fn id_naam(&self, filiaal: &Filiaal) -> FiliaalIdNaam {
        FiliaalIdNaam {
            id: filiaal.id().get(),
            naam: filiaal.naam().to_string(),
            links: Links::new().with("self", Link::new(self.item_uri(filiaal.id()))),
        }
    }

    pub fn collection(&self, filialen: &[Filiaal]) -> FiliaalCollectionModel {
        let embedded = (!filialen.is_empty()).then(|| EmbeddedFilialen {
            filiaal_id_naam_list: filialen.iter().map(|f| self.id_naam(f)).collect(),
        });
        FiliaalCollectionModel {
            embedded,
            links: Links::new().with("self", Link::new(self.collection_uri())),
        }
    }
}

/// JSON response tagged with the HAL media type.
#[derive(Debug)]
pub struct Hal<T>(pub T);

impl<T: Serialize> IntoResponse for Hal<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(HAL_JSON))],
                body,
            )
                .into_response(),
            Err(err) => AppError::Internal(format!("serializing response: {err}")).into_response(),
        }
    }
}
