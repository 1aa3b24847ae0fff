//! File attachments

use super::SparkClient;
use crate::download::{classify, FileDownload};
use crate::error::Result;
use crate::http::RequestOptions;
use crate::models::Message;
use crate::types::ResponseEncoding;
use tracing::debug;

/// Content URIs of every file attached to `messages`, in message order
pub fn get_file_uris(messages: &[Message]) -> Vec<String> {
    messages
        .iter()
        .flat_map(|m| m.file_uris().iter().cloned())
        .collect()
}

impl SparkClient {
    /// Content URIs of every file attached to `messages`, in message order
    pub fn get_file_uris(&self, messages: &[Message]) -> Vec<String> {
        get_file_uris(messages)
    }

    /// Download a file by its content URI
    ///
    /// `token` overrides the client's default token for this download.
    pub async fn download_file(&self, uri: &str, token: Option<&str>) -> Result<FileDownload> {
        let mut options = RequestOptions::get()
            .uri(uri)
            .encoding(ResponseEncoding::Binary);
        if let Some(token) = token {
            options = options.token(token);
        }

        let response = self.executor.execute(options).await?.into_response()?;
        let download = classify(uri, response);
        debug!(
            "Downloaded {} ({}, base64: {})",
            download.file_name,
            download.content_type,
            download.blob.is_base64()
        );
        Ok(download)
    }
}
