//! Backend API Client
//!
//! HTTP bindings to the Groupypay backend, organized by domain.

mod error;
mod groups;
mod users;


use std::sync::{Arc, RwLock};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub use error::{ApiErrors, ClientError};

/// Characters left as-is inside a single path segment (emails keep their `@`)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'@');

/// HTTP client for the Groupypay backend
///
/// Cloning is cheap and clones share the bearer token.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, token)
    }

    pub fn with_http(http: reqwest::Client, base_url: &str, token: Option<String>) -> Self {
        Self {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            token: Arc::new(RwLock::new(token)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    /// Issue a request and return the parsed JSON body
    ///
    /// `GET` sends `data` as query parameters; every other method sends it as
    /// the JSON body. Failures are always a list of messages.
    pub async fn request(&self, endpoint: &str, data: &Value, method: Method) -> Result<Value, ApiErrors> {
        log::debug!("API call: {} {}", method, endpoint);
        self.send(endpoint, data, method.clone()).await.map_err(|err| {
            let errors = ApiErrors::from(err);
            log::error!("API error: {} {}: {}", method, endpoint, errors);
            errors
        })
    }

    async fn send(&self, endpoint: &str, data: &Value, method: Method) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let (query, body) = split_payload(&method, data);

        let mut builder = self.http.request(method, &url);
        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let payload = serde_json::from_str::<Value>(&text).ok();
            return Err(ApiErrors::from_error_body(status.as_u16(), payload.as_ref()).into());
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// `request` followed by decoding into `T`
    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str, data: &Value, method: Method) -> Result<T, ApiErrors> {
        let body = self.request(endpoint, data, method).await?;
        unwrap_payload(body).map_err(|err| ApiErrors::from(ClientError::from(err)))
    }
}

/// Decide where request data goes: query string for `GET`, JSON body otherwise
fn split_payload<'a>(method: &Method, data: &'a Value) -> (Option<&'a Value>, Option<&'a Value>) {
    if *method == Method::GET {
        let has_params = data.as_object().is_some_and(|params| !params.is_empty());
        (has_params.then_some(data), None)
    } else {
        (None, Some(data))
    }
}

/// Decode a response body, unwrapping a `{"data": ...}` envelope when present
fn unwrap_payload<T: DeserializeOwned>(body: Value) -> Result<T, serde_json::Error> {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            serde_json::from_value(map.remove("data").unwrap_or(Value::Null))
        }
        other => serde_json::from_value(other),
    }
}

fn payload<T: Serialize>(value: &T) -> Result<Value, ApiErrors> {
    serde_json::to_value(value).map_err(|err| ApiErrors::from(ClientError::from(err)))
}

/// Percent-encode one path segment such as an email address
fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}
