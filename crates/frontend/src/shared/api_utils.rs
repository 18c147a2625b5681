//! API utilities for frontend-backend communication
//!
//! Every backend call goes through the helpers here: they build the URL from
//! the configured base, attach `Authorization: Bearer <credential>` and map
//! HTTP failures onto [`ApiError`]. A 401 from any endpoint fires the
//! session-expired hook registered by the auth provider.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::{Blob, BlobPropertyBag};

use crate::config::app_config;
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("No hay ninguna sesión iniciada.")]
    NotAuthenticated,
    #[error("Sesión expirada. Vuelve a iniciar sesión.")]
    Unauthorized,
    #[error("No tienes permiso para realizar esta acción.")]
    Forbidden,
    #[error("Error {status}: {message}")]
    Status { status: u16, message: String },
    #[error("No se pudo contactar con el servidor: {0}")]
    Network(String),
    #[error("Respuesta inesperada del servidor: {0}")]
    Decode(String),
    #[error("No se pudo preparar la petición: {0}")]
    Encode(String),
    #[error("Error del navegador: {0}")]
    Browser(String),
}

/// Build a full API URL from an endpoint path such as `/product/`.
pub fn api_url(path: &str) -> String {
    join_url(&app_config().backend.url, path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

// ============================================================================
// Session-expired hook
// ============================================================================

thread_local! {
    static ON_UNAUTHORIZED: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Register the callback run when the backend rejects the credential.
pub fn set_unauthorized_hook(hook: impl Fn() + 'static) {
    ON_UNAUTHORIZED.with(|slot| *slot.borrow_mut() = Some(Rc::new(hook)));
}

fn fire_unauthorized() {
    let hook = ON_UNAUTHORIZED.with(|slot| slot.borrow().clone());
    if let Some(hook) = hook {
        hook();
    }
}

// ============================================================================
// Status mapping
// ============================================================================

/// Map a non-2xx status and its body onto an error. FastAPI puts the reason
/// in `{"detail": ...}`; anything else is passed through as text.
pub fn status_error(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        _ => {
            let detail = serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("detail").map(|d| match d.as_str() {
                    Some(s) => s.to_string(),
                    None => d.to_string(),
                }))
                .unwrap_or_else(|| body.trim().to_string());
            let message = if detail.is_empty() {
                default_reason(status).to_string()
            } else {
                detail
            };
            ApiError::Status { status, message }
        }
    }
}

fn default_reason(status: u16) -> &'static str {
    match status {
        400 => "Petición incorrecta",
        404 => "No encontrado",
        422 => "Datos no válidos",
        500..=599 => "Error interno del servidor",
        _ => "Error inesperado",
    }
}

// ============================================================================
// Requests
// ============================================================================

fn bearer() -> Result<String, ApiError> {
    storage::get_credential()
        .map(|token| format!("Bearer {}", token))
        .ok_or(ApiError::NotAuthenticated)
}

async fn send(request: Request, path: &str) -> Result<Response, ApiError> {
    log::debug!("{} {}", request.method(), path);
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = status_error(status, &body);
    log::warn!("{} failed: {}", path, error);
    if error == ApiError::Unauthorized {
        fire_unauthorized();
    }
    Err(error)
}

fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    Ok(builder.header("Authorization", &bearer()?))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn with_body<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    builder.json(body).map_err(|e| ApiError::Encode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = authorized(Request::get(&api_url(path)))?
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    decode(send(request, path).await?).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let request = with_body(authorized(Request::post(&api_url(path)))?, body)?;
    decode(send(request, path).await?).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let request = with_body(authorized(Request::put(&api_url(path)))?, body)?;
    decode(send(request, path).await?).await
}

/// POST whose response body is ignored.
pub async fn post_json_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = with_body(authorized(Request::post(&api_url(path)))?, body)?;
    send(request, path).await.map(|_| ())
}

/// PUT whose response body is ignored.
pub async fn put_json_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = with_body(authorized(Request::put(&api_url(path)))?, body)?;
    send(request, path).await.map(|_| ())
}

/// Download a binary response (PDF) as a `Blob`.
pub async fn get_blob(path: &str) -> Result<Blob, ApiError> {
    let request = authorized(Request::get(&api_url(path)))?
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = send(request, path).await?;
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap_or_else(|| "application/pdf".to_string());
    let bytes = response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));
    let properties = BlobPropertyBag::new();
    properties.set_type(&content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| ApiError::Browser(format!("{:?}", e)))
}

/// Unauthenticated POST that returns the raw response text (`POST /auth`).
pub async fn post_json_public_text<B: Serialize>(path: &str, body: &B) -> Result<String, ApiError> {
    let request = with_body(Request::post(&api_url(path)), body)?;
    send(request, path)
        .await?
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_urls() {
        assert_eq!(join_url("http://h:8000/", "/product/"), "http://h:8000/product/");
        assert_eq!(join_url("http://h:8000", "offer/pdf?offerID=1"), "http://h:8000/offer/pdf?offerID=1");
    }

    #[test]
    fn maps_auth_statuses() {
        assert_eq!(status_error(401, ""), ApiError::Unauthorized);
        assert_eq!(status_error(403, "{\"detail\":\"nope\"}"), ApiError::Forbidden);
    }

    #[test]
    fn extracts_fastapi_detail() {
        assert_eq!(
            status_error(400, r#"{"detail": "Missing required fields"}"#),
            ApiError::Status {
                status: 400,
                message: "Missing required fields".into()
            }
        );
        let err = status_error(422, r#"{"detail": [{"loc": ["body"], "msg": "field required"}]}"#);
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("field required"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn falls_back_to_text_or_reason() {
        assert_eq!(
            status_error(500, "boom"),
            ApiError::Status { status: 500, message: "boom".into() }
        );
        assert_eq!(
            status_error(404, "  "),
            ApiError::Status { status: 404, message: "No encontrado".into() }
        );
        assert_eq!(
            status_error(502, "").to_string(),
            "Error 502: Error interno del servidor"
        );
    }
}
