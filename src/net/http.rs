//! Thin HTTP layer over `gloo-net` that understands the backend envelope.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend response is wrapped as `{code, message, data, timestamp}`.
//! [`decode_body`] unwraps that envelope into either the typed `data` or an
//! [`ApiError`]; it is pure so the decoding rules are testable off-browser.
//!
//! Outside the `csr` build the transport is a stub that always reports a
//! network error, matching how the rest of the crate degrades on the server.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// Envelope code the backend uses for success.
pub const SUCCESS_CODE: i32 = 200;

#[derive(Debug, serde::Deserialize)]
struct Envelope {
    code: i32,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// REST client rooted at the configured API base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpClient {
    base: String,
}

impl HttpClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into().trim_end_matches('/').to_owned() }
    }

    /// Absolute URL for `path` under the API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// Issue a request and decode the enveloped response.
    ///
    /// `token`, when present, is sent as a bearer `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the request cannot be sent, and the
    /// classified backend error when the response reports a failure.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.endpoint(path);
            let builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            let mut builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
            if let Some(token) = token.filter(|t| !t.is_empty()) {
                builder = builder.header("Authorization", &bearer(token));
            }
            let request = match body {
                Some(body) => builder.json(&body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            decode_body(status, &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, query, body, token);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Serialize a request body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if `value` cannot be represented as JSON.
pub fn json_body<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a raw response into `T`, unwrapping the backend envelope.
///
/// An empty 2xx body is success with no data (`T` must accept JSON `null`,
/// as `()` and `Option<_>` do).
///
/// # Errors
///
/// Returns the classified [`ApiError`] for a failing status or envelope code,
/// and [`ApiError::Decode`] when a successful body does not match `T`.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let ok_status = (200..300).contains(&status);
    if body.trim().is_empty() {
        if ok_status {
            return decode_data(Value::Null);
        }
        return Err(ApiError::from_code(i32::from(status), status_message(status)));
    }

    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) if envelope.code == SUCCESS_CODE && ok_status => decode_data(envelope.data),
        Ok(envelope) if envelope.code != SUCCESS_CODE => Err(ApiError::from_code(envelope.code, envelope.message)),
        Ok(envelope) => Err(ApiError::from_code(i32::from(status), envelope.message)),
        Err(_) if !ok_status => Err(ApiError::from_code(i32::from(status), status_message(status))),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

fn decode_data<T: DeserializeOwned>(data: Value) -> Result<T, ApiError> {
    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}

fn status_message(status: u16) -> String {
    format!("request failed: {status}")
}
