//! # Custom Extractors & Validation
//!
//! Provides the [`Validate`] trait for request DTOs, helpers to extract and
//! validate JSON bodies in handlers, and the [`BaseUrl`] extractor used to
//! build hypermedia links.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};
use axum::Json;
use filialen_core::FieldErrors;

use crate::error::AppError;
use crate::state::AppState;

/// Trait for request types that check field constraints beyond what serde
/// deserialization checks, turning themselves into a validated value.
pub trait Validate {
    type Output;

    /// Validate every field. All violations are reported, not only the first.
    fn validate(self) -> Result<Self::Output, FieldErrors>;
}

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
///
/// Handlers use:
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let req = extract_json(body)?;
///     // use req...
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body and validate it using the [`Validate`] trait.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T::Output, AppError> {
    let value = extract_json(result)?;
    Ok(value.validate()?)
}

/// Scheme and authority that hypermedia links are built against,
/// e.g. `https://api.example.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(pub String);

impl FromRequestParts<AppState> for BaseUrl {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(resolve_base_url(
            state.config.public_base_url.as_deref(),
            &parts.headers,
        ))
    }
}

/// Configured base URL if present, otherwise `X-Forwarded-Proto` (or `http`)
/// plus the `Host` header (or `localhost`).
pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap) -> BaseUrl {
    if let Some(base) = configured {
        return BaseUrl(base.trim_end_matches('/').to_string());
    }
    let scheme = header_str(headers, "x-forwarded-proto")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("localhost");
    BaseUrl(format!("{scheme}://{host}"))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
