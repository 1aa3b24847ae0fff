//! Spark API client
//!
//! [`SparkClient`] exposes one async method per API operation. Each method
//! builds [`RequestOptions`] and hands them to the shared
//! [`RequestExecutor`]; listings are followed to their last page.
//!
//! ```rust,ignore
//! use spark_client::{ClientConfig, SparkClient};
//!
//! let client = SparkClient::new(ClientConfig::builder().token("...").build()?)?;
//! for room in client.list_rooms().await? {
//!     println!("{} {:?}", room.id, room.title);
//! }
//! ```

mod files;
mod memberships;
mod messages;
mod oauth;
mod people;
mod rooms;
mod webhooks;

pub use files::get_file_uris;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{ReqwestTransport, RequestExecutor, RequestOptions, Transport};
use crate::pagination::fetch_all;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Page size requested for listings
pub const LIST_PAGE_SIZE: u32 = 200;

/// Client for the Spark REST API
#[derive(Debug, Clone)]
pub struct SparkClient {
    executor: RequestExecutor,
}

impl SparkClient {
    /// Create a client that talks HTTP through reqwest
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            executor: RequestExecutor::new(config, transport),
        }
    }

    /// Client defaults
    pub fn config(&self) -> &ClientConfig {
        self.executor.config()
    }

    /// The request executor, for calls this client has no method for
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    async fn call<T: DeserializeOwned>(&self, options: RequestOptions) -> Result<T> {
        self.executor.execute_json(options).await
    }

    async fn call_discard(&self, options: RequestOptions) -> Result<()> {
        self.executor.execute(options).await?;
        Ok(())
    }

    async fn list<T: DeserializeOwned>(&self, path: String) -> Result<Vec<T>> {
        fetch_all(&self.executor, RequestOptions::get().path(path)).await
    }
}

#[cfg(test)]
mod tests;
