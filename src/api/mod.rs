//! Report API Client
//!
//! Frontend bindings to the remote report API, organized by domain.
//! Every response body is treated as opaque text (or bytes for exports).

mod data;
mod reports;
mod xslt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use data::*;
pub use reports::*;
pub use xslt::*;

/// Query value encoding, same unreserved set as `encodeURIComponent`
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unreadable response body: {0}")]
    Body(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// Build `{base}/{operation}?k=v&..` with percent-encoded query values
pub fn endpoint(base: &str, operation: &str, params: &[(&str, &str)]) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), operation);
    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.extend(utf8_percent_encode(value, QUERY_ENCODE_SET));
    }
    url
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Issue one request and return the response once its status is checked
async fn send(method: Method, url: &str, body: Option<&str>) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let init = RequestInit::new();
    init.set_method(method.as_str());
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(|e| ApiError::Network(js_error(e)))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "text/plain;charset=utf-8")
            .map_err(|e| ApiError::Network(js_error(e)))?;
    }

    log::debug!("[API] {} {}", method.as_str(), url);
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_error(e)))?
        .dyn_into()
        .map_err(|e| ApiError::Network(js_error(e)))?;

    if !response.ok() {
        let status = response.status();
        let body = read_text(&response).await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    Ok(response)
}

async fn read_text(response: &Response) -> Result<String, ApiError> {
    let promise = response.text().map_err(|e| ApiError::Body(js_error(e)))?;
    let text = JsFuture::from(promise).await.map_err(|e| ApiError::Body(js_error(e)))?;
    text.as_string().ok_or_else(|| ApiError::Body("body is not text".to_string()))
}

async fn read_bytes(response: &Response) -> Result<Vec<u8>, ApiError> {
    let promise = response.array_buffer().map_err(|e| ApiError::Body(js_error(e)))?;
    let buffer = JsFuture::from(promise).await.map_err(|e| ApiError::Body(js_error(e)))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Request returning the body as text
async fn request_text(method: Method, url: &str, body: Option<&str>) -> Result<String, ApiError> {
    let response = send(method, url, body).await?;
    read_text(&response).await
}
