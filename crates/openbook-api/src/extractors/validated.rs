//! Extractors that deserialize a request DTO and run its validation.
//!
//! Deserialization failures are reported per field, the same way validation
//! failures are: `{"details": {"<field>": ["<message>"]}}`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{FromRef, FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use serde::de::DeserializeOwned;
use validator::Validate;

use openbook_core::error::AppError;
use openbook_core::result::AppResult;
use openbook_core::traits::ReferenceLookup;

use crate::error::ApiError;
use crate::validators::{CheckReferences, validate_request};

/// JSON body that passed field validation and reference checks.
///
/// The state must provide an `Arc<dyn ReferenceLookup>` through `FromRef`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

/// Query string that passed field validation and reference checks.
///
/// Repeated keys are merged into one comma separated value, so
/// `types=PR&types=PC` reads the same as `types=PR,PC`.
///
/// The state must provide an `Arc<dyn ReferenceLookup>` through `FromRef`.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::Deref for ValidatedQuery<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + CheckReferences + Send + Sync,
    S: Send + Sync,
    Arc<dyn ReferenceLookup>: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::validation(
                "Expected request with `Content-Type: application/json`",
            )
            .into());
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!(error = %rejection.body_text(), "Failed to read request body");
            AppError::validation(rejection.body_text())
        })?;

        let value = parse_json::<T>(&bytes).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected JSON body");
        })?;

        let lookup = Arc::<dyn ReferenceLookup>::from_ref(state);
        validate_request(&value, lookup.as_ref()).await?;

        Ok(Self(value))
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + CheckReferences + Send + Sync,
    S: Send + Sync,
    Arc<dyn ReferenceLookup>: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        let value = parse_query::<T>(query).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected query string");
        })?;

        let lookup = Arc::<dyn ReferenceLookup>::from_ref(state);
        validate_request(&value, lookup.as_ref()).await?;

        Ok(Self(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Deserialize a JSON body, reporting failures against the offending field.
pub(crate) fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> AppResult<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        if err.inner().is_syntax() || err.inner().is_eof() {
            return AppError::validation(format!("Malformed JSON: {}", err.inner()));
        }
        field_error(&err.path().to_string(), &err.inner().to_string())
    })?;

    deserializer
        .end()
        .map_err(|e| AppError::validation(format!("Malformed JSON: {e}")))?;
    Ok(value)
}

/// Deserialize a query string, reporting failures against the offending field.
pub(crate) fn parse_query<T: DeserializeOwned>(query: &str) -> AppResult<T> {
    let merged = merge_repeated_keys(query)?;
    let deserializer =
        serde_urlencoded::Deserializer::new(url::form_urlencoded::parse(merged.as_bytes()));
    serde_path_to_error::deserialize(deserializer)
        .map_err(|err| field_error(&err.path().to_string(), &err.inner().to_string()))
}

fn merge_repeated_keys(query: &str) -> AppResult<String> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
        .map_err(|e| AppError::validation(format!("Malformed query string: {e}")))?;

    let mut merged: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        match merged.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => {
                existing.push(',');
                existing.push_str(&value);
            }
            None => merged.push((key, value)),
        }
    }

    serde_urlencoded::to_string(&merged)
        .map_err(|e| AppError::internal(format!("Failed to re-encode query string: {e}")))
}

/// Map a deserializer message at `path` onto a field validation error.
fn field_error(path: &str, raw: &str) -> AppError {
    let message = strip_location(raw);

    if let Some(field) = missing_field(message) {
        return AppError::field_validation(field, "This field is required.");
    }
    if path.is_empty() || path == "." {
        return AppError::validation(message);
    }
    AppError::field_validation(path, field_message(message))
}

// serde_json appends " at line L column C" to every message.
fn strip_location(raw: &str) -> &str {
    match raw.rfind(" at line ") {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}

fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
}

fn field_message(message: &str) -> String {
    const INTEGER_MARKERS: [&str; 6] = [
        "expected u32",
        "expected i64",
        "invalid digit found in string",
        "number too large to fit",
        "number too small to fit",
        "cannot parse integer from empty string",
    ];

    if message.starts_with("invalid value: integer `-") {
        return "Ensure this value is greater than or equal to 0.".to_string();
    }
    if INTEGER_MARKERS.iter().any(|m| message.contains(m)) {
        return "A valid integer is required.".to_string();
    }
    if message.contains("expected a string") {
        return "Not a valid string.".to_string();
    }
    message.to_string()
}
