//! File download classification
//!
//! Derives the file name from `content-disposition` and decides from
//! `content-type` whether the payload is handed back as base64 text or as
//! raw bytes.

use crate::error::{Error, Result};
use crate::http::HttpResponse;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;
use serde::ser::Error as _;
use serde::Serialize;

/// Content-type fragments whose payload is base64 encoded
pub const ENCODED_CONTENT_TYPES: [&str; 5] =
    ["image", "zip", "octet-stream", "officedocument", "pdf"];

/// Name used when neither the headers nor the URI yield one
pub const FALLBACK_FILE_NAME: &str = "download";

/// Downloaded file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "encoding", content = "data", rename_all = "snake_case")]
pub enum FilePayload {
    /// Base64 text (images, archives, office documents, PDFs)
    Base64(String),
    /// Untouched bytes
    #[serde(serialize_with = "serialize_raw")]
    Raw(Bytes),
}

/// Raw payloads serialize as text; non-UTF-8 content is refused, not mangled
fn serialize_raw<S: serde::Serializer>(
    bytes: &Bytes,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match std::str::from_utf8(bytes) {
        Ok(text) => serializer.serialize_str(text),
        Err(e) => Err(S::Error::custom(format!(
            "raw payload of {} bytes is not valid UTF-8: {e}",
            bytes.len()
        ))),
    }
}

impl FilePayload {
    /// Check if the payload was base64 encoded
    pub fn is_base64(&self) -> bool {
        matches!(self, Self::Base64(_))
    }

    /// Raw payload as text, if it is valid UTF-8
    ///
    /// Base64 payloads return `None`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Raw(bytes) => std::str::from_utf8(bytes).ok(),
            Self::Base64(_) => None,
        }
    }

    /// Original file content, decoding base64 when needed
    pub fn to_content(&self) -> Result<Vec<u8>> {
        match self {
            Self::Base64(text) => STANDARD
                .decode(text)
                .map_err(|e| Error::decode(format!("invalid base64 payload: {e}"))),
            Self::Raw(bytes) => Ok(bytes.to_vec()),
        }
    }
}

/// A downloaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDownload {
    pub file_name: String,
    /// Declared `content-type`, empty when absent
    pub content_type: String,
    pub blob: FilePayload,
}

/// Extract the quoted file name from a `content-disposition` value
///
/// `attachment; filename="report.pdf"` yields `report.pdf`. Returns `None`
/// when there is no complete quoted segment or it is empty.
pub fn file_name_from_disposition(disposition: &str) -> Option<String> {
    let start = disposition.find('"')? + 1;
    let len = disposition[start..].find('"')?;
    let name = &disposition[start..start + len];
    (!name.is_empty()).then(|| name.to_string())
}

/// Last non-empty path segment of a URI, ignoring query and fragment
pub fn file_name_from_uri(uri: &str) -> Option<String> {
    let url = url::Url::parse(uri).ok()?;
    let segment = url.path_segments()?.rev().find(|s| !s.is_empty())?;
    Some(segment.to_string())
}

/// Check whether a content type gets base64 encoded (case-sensitive)
pub fn is_encoded_content_type(content_type: &str) -> bool {
    ENCODED_CONTENT_TYPES
        .iter()
        .any(|fragment| content_type.contains(fragment))
}

/// Encode or pass through a body according to its content type
pub fn classify_payload(content_type: &str, body: Bytes) -> FilePayload {
    if is_encoded_content_type(content_type) {
        FilePayload::Base64(STANDARD.encode(&body))
    } else {
        FilePayload::Raw(body)
    }
}

/// Turn a binary-mode response into a [`FileDownload`]
///
/// `uri` is the download URI, used for the file name when the response has
/// no usable `content-disposition`.
pub fn classify(uri: &str, response: HttpResponse) -> FileDownload {
    let file_name = response
        .header_lossy("content-disposition")
        .and_then(|disposition| file_name_from_disposition(&disposition))
        .or_else(|| file_name_from_uri(uri))
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

    let content_type = response.header_lossy("content-type").unwrap_or_default();
    let blob = classify_payload(&content_type, response.body);

    FileDownload {
        file_name,
        content_type,
        blob,
    }
}
