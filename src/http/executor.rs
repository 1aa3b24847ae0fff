//! Request executor
//!
//! Turns a [`RequestOptions`] set into one HTTP request and classifies the
//! response:
//! - 4xx fails with [`Error::Client`] carrying the raw body
//! - a response with a `link` header, or any download, comes back raw
//! - everything else comes back as the decoded JSON body

use super::transport::{HttpRequest, HttpResponse, RequestBody, Transport};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{FormFields, JsonValue, Method, ResponseEncoding};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Options for a single request
///
/// `uri` and `token` override the client defaults for this call only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Base URI override
    pub uri: Option<String>,
    /// Path appended verbatim to the base URI
    pub path: Option<String>,
    pub method: Method,
    /// Bearer token override
    pub token: Option<String>,
    /// JSON body
    pub body: Option<JsonValue>,
    /// URL-encoded form body, takes precedence over `body`
    pub form: Option<FormFields>,
    /// Download mode
    pub encoding: Option<ResponseEncoding>,
}

impl RequestOptions {
    /// Create options for the given method
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// GET request options
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// POST request options
    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    /// DELETE request options
    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Override the base URI
    #[must_use]
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the path suffix
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Override the bearer token
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Set form body
    #[must_use]
    pub fn form(mut self, fields: FormFields) -> Self {
        self.form = Some(fields);
        self
    }

    /// Request a raw download
    #[must_use]
    pub fn encoding(mut self, encoding: ResponseEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }
}

/// Outcome of a successful request
#[derive(Debug, Clone)]
pub enum Reply {
    /// Response handed back whole: it carries a `link` header or was a download
    Raw(HttpResponse),
    /// Decoded JSON body
    Body(JsonValue),
}

impl Reply {
    /// Check if the raw response was returned
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }

    /// Body as JSON, decoding a raw response if needed
    pub fn into_value(self) -> Result<JsonValue> {
        match self {
            Self::Raw(response) => response.json_value(),
            Self::Body(value) => Ok(value),
        }
    }

    /// Body as a typed value
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.into_value()?)?)
    }

    /// Take the raw response, failing if the body was already decoded
    pub fn into_response(self) -> Result<HttpResponse> {
        match self {
            Self::Raw(response) => Ok(response),
            Self::Body(_) => Err(Error::decode("expected a raw response, got a decoded body")),
        }
    }
}

/// Issues requests against the configured API
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl RequestExecutor {
    /// Create an executor over a transport
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { transport, config }
    }

    /// Client defaults
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the outbound request without sending it
    pub fn build_request(&self, options: &RequestOptions) -> HttpRequest {
        let base = options.uri.as_deref().unwrap_or(&self.config.base_url);
        let url = format!("{base}{}", options.path.as_deref().unwrap_or(""));

        let content_type = if options.form.is_some() {
            CONTENT_TYPE_FORM
        } else {
            CONTENT_TYPE_JSON
        };

        let mut headers = vec![
            ("Content-Type".to_string(), content_type.to_string()),
            ("Accept".to_string(), CONTENT_TYPE_JSON.to_string()),
        ];

        let token = options
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.config.default_token());
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let body = match (&options.form, &options.body) {
            (Some(fields), _) => RequestBody::Form(fields.clone()),
            (None, Some(json)) => RequestBody::Json(json.clone()),
            (None, None) => RequestBody::Empty,
        };

        HttpRequest {
            method: options.method,
            url,
            headers,
            body,
        }
    }

    /// Issue one request and classify the response
    pub async fn execute(&self, options: RequestOptions) -> Result<Reply> {
        let request = self.build_request(&options);
        debug!("Request: {} {}", request.method, request.url);

        let response = self.transport.send(request).await?;

        if response.is_client_error() {
            debug!("Request rejected with HTTP {}", response.status);
            return Err(Error::client(response.status, response.text()));
        }

        // 5xx is not classified; the body goes on to decoding
        if response.is_server_error() {
            warn!(
                "Server answered HTTP {}, passing the body through",
                response.status
            );
        }

        if response.link().is_some() || options.encoding.is_some() {
            return Ok(Reply::Raw(response));
        }

        Ok(Reply::Body(response.json_value()?))
    }

    /// Issue one request and decode the body into `T`
    pub async fn execute_json<T: DeserializeOwned>(&self, options: RequestOptions) -> Result<T> {
        self.execute(options).await?.into_json()
    }
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
