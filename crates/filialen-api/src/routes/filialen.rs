//! # Filialen API
//!
//! Handles create, read, update, and delete of branch offices. Reads return
//! HAL representations with hypermedia links.
//!
//! ## Endpoints
//!
//! - `GET /filialen`: list id and name of every branch
//! - `POST /filialen`: create a branch
//! - `GET /filialen/{id}`: get a branch
//! - `PUT /filialen/{id}`: replace a branch
//! - `DELETE /filialen/{id}`: delete a branch

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use filialen_core::{FieldErrors, FiliaalData, FiliaalId};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, BaseUrl, Validate};
use crate::hal::{FiliaalCollectionModel, FiliaalLinks, FiliaalModel, Hal};
use crate::state::AppState;

// ── Request DTOs ────────────────────────────────────────────────────

/// Fields submitted on create and update. An `id` in the body is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct FiliaalRequest {
    /// Name of the branch. Must not be blank.
    #[schema(example = "Andros")]
    pub naam: Option<String>,
    /// Municipality of the branch. Must not be blank.
    #[schema(example = "Brussel")]
    pub gemeente: Option<String>,
    /// Revenue. Required, zero or more. Parsed from the literal digits.
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    #[schema(value_type = Option<f64>, example = 2500.5)]
    pub omzet: Option<Decimal>,
}

impl Validate for FiliaalRequest {
    type Output = FiliaalData;

    fn validate(self) -> Result<FiliaalData, FieldErrors> {
        FiliaalData::new(self.naam, self.gemeente, self.omzet)
    }
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the filialen router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/filialen", get(find_all).post(create))
        .route(
            "/filialen/{id}",
            get(get_filiaal).put(update).delete(delete),
        )
}

// ── Handlers ────────────────────────────────────────────────────────

/// Een filiaal zoeken op id
///
/// Returns the branch with `self` and `werknemers` links, or 404 with an
/// empty body.
#[utoipa::path(
    get,
    path = "/filialen/{id}",
    params(("id" = i64, Path, description = "Filiaal id")),
    responses(
        (status = 200, description = "Filiaal found", body = FiliaalModel, content_type = "application/hal+json"),
        (status = 404, description = "Filiaal not found"),
    ),
    tag = "filialen"
)]
pub async fn get_filiaal(
    State(state): State<AppState>,
    BaseUrl(base): BaseUrl,
    Path(id): Path<i64>,
) -> Result<Hal<FiliaalModel>, AppError> {
    let id = FiliaalId::new(id);
    let filiaal = state
        .service
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("filiaal {id}")))?;
    Ok(Hal(FiliaalLinks::new(base).model(&filiaal)))
}

/// Alle filialen zoeken
///
/// Lists id and name of every branch, ordered by id.
#[utoipa::path(
    get,
    path = "/filialen",
    responses(
        (status = 200, description = "All filialen", body = FiliaalCollectionModel, content_type = "application/hal+json"),
    ),
    tag = "filialen"
)]
pub async fn find_all(
    State(state): State<AppState>,
    BaseUrl(base): BaseUrl,
) -> Result<Hal<FiliaalCollectionModel>, AppError> {
    let filialen = state.service.find_all().await?;
    Ok(Hal(FiliaalLinks::new(base).collection(&filialen)))
}

/// Een filiaal toevoegen
///
/// Responds 201 with a `Location` header and an empty body.
#[utoipa::path(
    post,
    path = "/filialen",
    request_body = FiliaalRequest,
    responses(
        (status = 201, description = "Filiaal created",
            headers(("Location" = String, description = "URI of the new filiaal"))),
        (status = 400, description = "Validation error", body = crate::error::ValidationErrorBody),
    ),
    tag = "filialen"
)]
pub async fn create(
    State(state): State<AppState>,
    BaseUrl(base): BaseUrl,
    body: Result<Json<FiliaalRequest>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1]), AppError> {
    let data = extract_validated_json(body)?;
    let filiaal = state.service.create(data).await?;
    let location = FiliaalLinks::new(base).item_uri(filiaal.id());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

/// Een filiaal wijzigen
///
/// Replaces every field of the branch at `id`.
#[utoipa::path(
    put,
    path = "/filialen/{id}",
    params(("id" = i64, Path, description = "Filiaal id")),
    request_body = FiliaalRequest,
    responses(
        (status = 200, description = "Filiaal updated"),
        (status = 400, description = "Validation error", body = crate::error::ValidationErrorBody),
    ),
    tag = "filialen"
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<FiliaalRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let data = extract_validated_json(body)?;
    state.service.update(&data.with_id(FiliaalId::new(id))).await?;
    Ok(StatusCode::OK)
}

/// Een filiaal verwijderen
///
/// Succeeds whether or not the branch existed.
#[utoipa::path(
    delete,
    path = "/filialen/{id}",
    params(("id" = i64, Path, description = "Filiaal id")),
    responses(
        (status = 200, description = "Filiaal deleted"),
    ),
    tag = "filialen"
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.service.delete(FiliaalId::new(id)).await?;
    Ok(StatusCode::OK)
}
