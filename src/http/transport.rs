//! HTTP transport
//!
//! The transport is the only piece that touches the network. It takes a fully
//! built [`HttpRequest`] and hands back the complete [`HttpResponse`] without
//! interpreting the status code.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{FormFields, JsonValue, Method};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Request body variants
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// JSON document
    Json(JsonValue),
    /// URL-encoded form fields
    Form(FormFields),
}

/// A single outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Header pairs, applied in order
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A completed response with its body fully read
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a response with no headers
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Get a header as a string, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get a header as text even when it carries non-ASCII bytes
    ///
    /// Invalid UTF-8 sequences are replaced rather than dropping the value.
    pub fn header_lossy(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
    }

    /// Raw pagination `link` header
    pub fn link(&self) -> Option<&str> {
        self.header("link").filter(|v| !v.trim().is_empty())
    }

    /// Status code starts with 4
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Status code starts with 5
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON; an empty body decodes to `null`
    pub fn json_value(&self) -> Result<JsonValue> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonValue::Null);
        }
        serde_json::from_slice(&self.body).map_err(|e| {
            Error::decode(format!(
                "HTTP {} body is not valid JSON: {e}",
                self.status
            ))
        })
    }

    /// Decode the body into a typed value
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.json_value()?)?)
    }
}

/// Capability to send one HTTP request
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and read the whole response
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Transport backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport from client settings
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut req = self
            .client
            .request(request.method.into(), request.url.as_str());

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        req = match request.body {
            RequestBody::Empty => req,
            RequestBody::Json(ref body) => req.json(body),
            RequestBody::Form(ref fields) => req.form(fields),
        };

        let response = req.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.url,
            status,
            body.len()
        );

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
